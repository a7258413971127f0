//! NYC GeoSearch client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use wowbot_core::config::GeosearchConfig;

use crate::error::{truncate_body, LookupError};
use crate::service::GeocodeService;
use crate::types::GeoSearchResults;

/// Reqwest-backed client for the NYC Planning Labs GeoSearch API.
///
/// Requests carry no timeout and are never retried: a slow geocoder stalls
/// the turn, which is the accepted contract for this webhook.
pub struct GeosearchClient {
    http: Client,
    base_url: String,
}

impl GeosearchClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &GeosearchConfig) -> Self {
        Self::new(config.base_url.clone())
    }
}

#[async_trait]
impl GeocodeService for GeosearchClient {
    async fn search(&self, text: &str) -> Result<GeoSearchResults, LookupError> {
        let url = format!("{}/search", self.base_url);
        debug!(%url, text, "geosearch request");

        let response = self.http.get(&url).query(&[("text", text)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                service: "geosearch",
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let results: GeoSearchResults = response.json().await?;
        debug!(candidates = results.features.len(), "geosearch response");
        Ok(results)
    }
}
