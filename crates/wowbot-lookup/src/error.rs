//! Error types for the external-service boundary.

use thiserror::Error;
use wowbot_core::WowbotError;

/// Errors from the external lookup clients.
///
/// Any non-success status is fatal for the turn: there are no retries and no
/// fallback text on this path, so the error propagates uncaught to the turn
/// boundary.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },
}

impl From<LookupError> for WowbotError {
    fn from(err: LookupError) -> Self {
        WowbotError::Lookup(err.to_string())
    }
}

/// Truncate an upstream error body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    body.chars().take(200).collect()
}
