//! Service traits consumed by the fulfillment layer.
//!
//! These are the seams between turn handlers and the network: handlers hold
//! trait objects, tests substitute in-memory fakes.

use async_trait::async_trait;
use wowbot_core::Bbl;

use crate::error::LookupError;
use crate::types::{GeoSearchResults, HousingTypeResult, OwnershipResults};

/// Resolves a free-text address to ranked location candidates.
#[async_trait]
pub trait GeocodeService: Send + Sync {
    /// Geocode a free-text address string.
    async fn search(&self, text: &str) -> Result<GeoSearchResults, LookupError>;
}

/// Parcel-record lookups keyed by BBL.
#[async_trait]
pub trait PropertyRecordsService: Send + Sync {
    /// All buildings associated with the same landlord as the given parcel.
    async fn ownership(&self, bbl: &Bbl) -> Result<OwnershipResults, LookupError>;

    /// Predicted housing/regulation type for the given parcel.
    async fn housing_type(&self, bbl: &str) -> Result<HousingTypeResult, LookupError>;
}
