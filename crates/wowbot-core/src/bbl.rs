//! Borough-block-lot parcel identifier codec.
//!
//! A BBL is a 10-character compound id: 1-character borough code, 5-character
//! block, 4-character lot, concatenated with no delimiter. Splitting is
//! purely positional; no character-class validation happens here. A malformed
//! id flows through to the downstream lookup, which is the defined failure
//! point.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parcel identifier split into its three positional components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bbl {
    /// Borough code, chars [0..1].
    pub borough: String,
    /// Block code, chars [1..6].
    pub block: String,
    /// Lot code, chars [6..10].
    pub lot: String,
}

impl Bbl {
    /// Split a compound id positionally: first 1 / next 5 / next 4 chars.
    ///
    /// Inputs shorter than 10 characters yield correspondingly short
    /// components rather than an error.
    pub fn split(id: &str) -> Self {
        Self {
            borough: id.chars().take(1).collect(),
            block: id.chars().skip(1).take(5).collect(),
            lot: id.chars().skip(6).take(4).collect(),
        }
    }
}

impl fmt::Display for Bbl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.borough, self.block, self.lot)
    }
}
