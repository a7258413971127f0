use thiserror::Error;

/// Top-level error type for the wowbot system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for WowbotError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WowbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geocoding error: {0}")]
    Geocode(String),

    #[error("Property lookup error: {0}")]
    Lookup(String),

    #[error("Fulfillment error: {0}")]
    Fulfillment(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for WowbotError {
    fn from(err: toml::de::Error) -> Self {
        WowbotError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for WowbotError {
    fn from(err: toml::ser::Error) -> Self {
        WowbotError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for WowbotError {
    fn from(err: serde_json::Error) -> Self {
        WowbotError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WowbotError>;
