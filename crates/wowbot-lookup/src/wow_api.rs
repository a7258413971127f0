//! Who Owns What property-records client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use wowbot_core::config::WowApiConfig;
use wowbot_core::Bbl;

use crate::error::{truncate_body, LookupError};
use crate::service::PropertyRecordsService;
use crate::types::{HousingTypeResult, OwnershipResults};

/// Reqwest-backed client for the Who Owns What records API.
pub struct WowApiClient {
    http: Client,
    base_url: String,
}

impl WowApiClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &WowApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, LookupError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "wow-api request");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                service: "wow-api",
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PropertyRecordsService for WowApiClient {
    async fn ownership(&self, bbl: &Bbl) -> Result<OwnershipResults, LookupError> {
        self.get(
            "/api/address",
            &[
                ("borough", bbl.borough.as_str()),
                ("block", bbl.block.as_str()),
                ("lot", bbl.lot.as_str()),
            ],
        )
        .await
    }

    async fn housing_type(&self, bbl: &str) -> Result<HousingTypeResult, LookupError> {
        self.get("/api/address/housingtype", &[("bbl", bbl)]).await
    }
}
