//! External-service boundary for the wowbot webhook.
//!
//! Narrow contracts for the two collaborators: geocode-by-text against NYC
//! GeoSearch, and parcel-record lookups (landlord ownership, housing-type
//! prediction) against the Who Owns What API. The fulfillment layer consumes
//! the traits in [`service`]; the reqwest clients here implement them.

pub mod error;
pub mod geosearch;
pub mod service;
pub mod types;
pub mod wow_api;

pub use error::LookupError;
pub use geosearch::GeosearchClient;
pub use service::{GeocodeService, PropertyRecordsService};
pub use types::{
    AddressRecord, GeoFeature, GeoProperties, GeoSearchResults, HousingTypeResult,
    OwnershipResults,
};
pub use wow_api::WowApiClient;
