use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the wowbot webhook.
///
/// Loaded from a TOML file. Each section corresponds to one external
/// collaborator or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WowbotConfig {
    pub general: GeneralConfig,
    pub geosearch: GeosearchConfig,
    pub wow: WowApiConfig,
    pub address: AddressConfig,
}

impl WowbotConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: WowbotConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// NYC GeoSearch service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeosearchConfig {
    /// Base URL of the geocoder, without a trailing slash.
    pub base_url: String,
}

impl Default for GeosearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://geosearch.planninglabs.nyc/v1".to_string(),
        }
    }
}

/// Who Owns What property-records service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WowApiConfig {
    /// Base URL of the records API, without a trailing slash.
    pub base_url: String,
}

impl Default for WowApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wow-django.herokuapp.com".to_string(),
        }
    }
}

/// Address formatting options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    /// Append the zip-code slot to the formatted address. The geocoder
    /// resolves addresses fine without it, so this defaults to off.
    pub append_zip: bool,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Defaults ----

    #[test]
    fn test_default_config() {
        let config = WowbotConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(
            config.geosearch.base_url,
            "https://geosearch.planninglabs.nyc/v1"
        );
        assert_eq!(config.wow.base_url, "https://wow-django.herokuapp.com");
        assert!(!config.address.append_zip);
    }

    // ---- Round trip ----

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = WowbotConfig::default();
        config.address.append_zip = true;
        config.wow.base_url = "http://localhost:8000".to_string();
        config.save(&path).unwrap();

        let loaded = WowbotConfig::load(&path).unwrap();
        assert!(loaded.address.append_zip);
        assert_eq!(loaded.wow.base_url, "http://localhost:8000");
        assert_eq!(loaded.general.log_level, "info");
    }

    // ---- Partial files ----

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[address]\nappend_zip = true\n").unwrap();

        let loaded = WowbotConfig::load(&path).unwrap();
        assert!(loaded.address.append_zip);
        assert_eq!(loaded.wow.base_url, "https://wow-django.herokuapp.com");
    }

    #[test]
    fn test_load_empty_file_is_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let loaded = WowbotConfig::load(&path).unwrap();
        assert_eq!(loaded.general.log_level, "info");
    }

    // ---- Failure paths ----

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(WowbotConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = WowbotConfig::load_or_default(&path);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        let config = WowbotConfig::load_or_default(&path);
        assert_eq!(
            config.geosearch.base_url,
            "https://geosearch.planninglabs.nyc/v1"
        );
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");
        WowbotConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }
}
