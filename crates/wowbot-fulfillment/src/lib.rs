//! Fulfillment logic for the wowbot webhook.
//!
//! Classifies the turn's intent, routes it to the matching handler, and
//! packages reply text plus conversation contexts into the response
//! envelope. The entry point is [`Dispatcher::handle`].

pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod intent;

pub use context::{ADDRESS_CONFIRMED_KEY, CONTEXT_LIFESPAN, HOUSING_TYPE_FOUND_KEY};
pub use dispatcher::Dispatcher;
pub use error::FulfillmentError;
pub use handler::{Reply, TurnHandler};
pub use intent::IntentKind;

#[cfg(test)]
pub(crate) mod testing;
