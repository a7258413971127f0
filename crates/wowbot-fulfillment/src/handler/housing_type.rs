//! Housing-type prediction handler.
//!
//! Never geocodes: depends entirely on the BBL persisted by a prior
//! ConfirmAddress turn. When that context is absent or expired, the handler
//! degrades to a fixed fallback rather than an error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use wowbot_core::WebhookRequest;
use wowbot_lookup::PropertyRecordsService;

use crate::context::{confirmed_bbl, housing_type_found};
use crate::error::FulfillmentError;
use crate::handler::{Reply, TurnHandler};
use crate::intent::IntentKind;

/// Fallback when no confirmed parcel is available for this session.
const NO_PARCEL_FALLBACK: &str = "It doesn't look like your building has any rent regulated units.";

/// Handler for the PredictHousingType intent.
pub struct PredictHousingTypeHandler {
    records: Arc<dyn PropertyRecordsService>,
}

impl PredictHousingTypeHandler {
    pub fn new(records: Arc<dyn PropertyRecordsService>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl TurnHandler for PredictHousingTypeHandler {
    fn intent(&self) -> IntentKind {
        IntentKind::PredictHousingType
    }

    async fn handle(&self, turn: &WebhookRequest) -> Result<Reply, FulfillmentError> {
        let Some(bbl) = confirmed_bbl(&turn.query_result.output_contexts) else {
            return Ok(Reply::with_context(
                NO_PARCEL_FALLBACK,
                housing_type_found(&turn.session, ""),
            ));
        };

        let prediction = self.records.housing_type(&bbl).await?;
        info!(%bbl, housing_type = %prediction.result, "housing type predicted");
        Ok(Reply::with_context(
            format!("Looks like you might live in {}", prediction.result),
            housing_type_found(&turn.session, &prediction.result),
        ))
    }
}
