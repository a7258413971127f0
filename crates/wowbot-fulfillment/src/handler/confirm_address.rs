//! Address confirmation handler.
//!
//! Resolves the turn's location slots to a canonical address and asks the
//! user to confirm it. On a match, the resolved BBL is persisted as an
//! `address-confirmed` context so a later turn can use it without
//! re-geocoding.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use wowbot_core::{format_address, WebhookRequest};
use wowbot_lookup::GeocodeService;

use crate::context::address_confirmed;
use crate::error::FulfillmentError;
use crate::handler::{Reply, TurnHandler};
use crate::intent::IntentKind;

/// Prompt returned when the geocoder finds no candidates.
const RESTATE_PROMPT: &str = "I couldn't find that address. Can you tell me your full street \
     address (no apartment number), borough, and zip? e.g. '150 Court St, Brooklyn, 11201'";

/// Handler for the ConfirmAddress intent.
pub struct ConfirmAddressHandler {
    geocoder: Arc<dyn GeocodeService>,
    append_zip: bool,
}

impl ConfirmAddressHandler {
    pub fn new(geocoder: Arc<dyn GeocodeService>, append_zip: bool) -> Self {
        Self {
            geocoder,
            append_zip,
        }
    }
}

#[async_trait]
impl TurnHandler for ConfirmAddressHandler {
    fn intent(&self) -> IntentKind {
        IntentKind::ConfirmAddress
    }

    async fn handle(&self, turn: &WebhookRequest) -> Result<Reply, FulfillmentError> {
        let location = &turn.query_result.parameters.location;
        let addr = format_address(location, self.append_zip);
        let results = self.geocoder.search(&addr).await?;

        let Some(feature) = results.first() else {
            // No context is persisted on the no-match path.
            return Ok(Reply::text_only(RESTATE_PROMPT));
        };

        let props = &feature.properties;
        info!(bbl = %props.pad_bbl, "address resolved");
        Ok(Reply::with_context(
            format!("I found {}, {}. Is that right?", props.name, props.borough),
            address_confirmed(&turn.session, &props.pad_bbl),
        ))
    }
}
