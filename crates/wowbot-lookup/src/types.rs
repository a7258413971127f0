//! Wire types for the external collaborators.
//!
//! Every field defaults so real service payloads deserialize even when they
//! carry more (or less) than we consume.

use serde::{Deserialize, Serialize};

// =============================================================================
// Geocoder
// =============================================================================

/// Ranked candidate features from the geocoder. Only the first candidate is
/// ever consulted downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoSearchResults {
    pub features: Vec<GeoFeature>,
}

impl GeoSearchResults {
    /// The best-ranked candidate, if the geocoder returned any.
    pub fn first(&self) -> Option<&GeoFeature> {
        self.features.first()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoFeature {
    pub properties: GeoProperties,
}

/// The properties of one geocode candidate that we consume: canonical
/// display name, borough, and the parcel id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoProperties {
    pub name: String,
    pub borough: String,
    pub pad_bbl: String,
}

// =============================================================================
// Property records
// =============================================================================

/// Buildings tied to the same owner entity as the queried parcel. Handler
/// behavior keys only on `addrs.len()`, never on record contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnershipResults {
    pub addrs: Vec<AddressRecord>,
}

/// A tolerant subset of the upstream building record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub bbl: String,
    pub housenumber: String,
    pub streetname: String,
    pub boro: String,
    pub zip: Option<String>,
}

/// A single categorical housing/regulation-type label for a parcel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HousingTypeResult {
    pub result: String,
}

// =============================================================================
// Tests
// =============================================================================
