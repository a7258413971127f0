//! Shared types, configuration, and codecs for the wowbot webhook.
//!
//! Defines the Dialogflow turn envelope, the BBL parcel identifier codec,
//! address formatting, and the top-level error type used across crates.

pub mod address;
pub mod bbl;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use address::format_address;
pub use bbl::Bbl;
pub use config::WowbotConfig;
pub use error::{Result, WowbotError};
pub use types::{
    FulfillmentMessage, Intent, Location, OutputContext, Parameters, QueryResult, TextMessage,
    WebhookRequest, WebhookResponse,
};
