//! Error types for the fulfillment layer.

use wowbot_core::WowbotError;
use wowbot_lookup::LookupError;

/// Errors from turn handling.
///
/// An upstream lookup failure ends the turn: no fallback text is produced on
/// this path, the dialogue platform sees the turn fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FulfillmentError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl From<FulfillmentError> for WowbotError {
    fn from(err: FulfillmentError) -> Self {
        WowbotError::Fulfillment(err.to_string())
    }
}
