//! Turn dispatcher: the webhook's entry point.
//!
//! Classifies the inbound turn's intent, awaits the matching handler, and
//! packages its reply into the response envelope. Every handler call is
//! awaited to completion before the envelope is built; the reply is always
//! the handler's returned value.

use std::sync::Arc;

use tracing::info;
use wowbot_core::{WebhookRequest, WebhookResponse, WowbotConfig};
use wowbot_lookup::{GeocodeService, GeosearchClient, PropertyRecordsService, WowApiClient};

use crate::error::FulfillmentError;
use crate::handler::{
    ConfirmAddressHandler, GetLandlordInfoHandler, PredictHousingTypeHandler, TurnHandler,
};
use crate::intent::IntentKind;

/// Routes each turn to its intent handler.
///
/// Holds only immutable handlers behind `Arc`'d clients, so one dispatcher
/// can serve concurrent turns without locking.
pub struct Dispatcher {
    confirm_address: ConfirmAddressHandler,
    predict_housing_type: PredictHousingTypeHandler,
    get_landlord_info: GetLandlordInfoHandler,
}

impl Dispatcher {
    /// Build a dispatcher over the given service implementations.
    pub fn new(
        config: &WowbotConfig,
        geocoder: Arc<dyn GeocodeService>,
        records: Arc<dyn PropertyRecordsService>,
    ) -> Self {
        let append_zip = config.address.append_zip;
        Self {
            confirm_address: ConfirmAddressHandler::new(Arc::clone(&geocoder), append_zip),
            predict_housing_type: PredictHousingTypeHandler::new(Arc::clone(&records)),
            get_landlord_info: GetLandlordInfoHandler::new(geocoder, records, append_zip),
        }
    }

    /// Build a dispatcher with live HTTP clients from configuration.
    pub fn from_config(config: &WowbotConfig) -> Self {
        let geocoder: Arc<dyn GeocodeService> =
            Arc::new(GeosearchClient::from_config(&config.geosearch));
        let records: Arc<dyn PropertyRecordsService> =
            Arc::new(WowApiClient::from_config(&config.wow));
        Self::new(config, geocoder, records)
    }

    /// Handle one inbound turn.
    ///
    /// Upstream lookup failures propagate as `Err`; the graceful paths
    /// (no geocode match, unresolved context) are handled inside the
    /// individual handlers and still produce a reply.
    pub async fn handle(&self, turn: &WebhookRequest) -> Result<WebhookResponse, FulfillmentError> {
        let intent = IntentKind::classify(&turn.query_result.intent.display_name);
        info!(
            session = %turn.session,
            intent = %intent,
            query = %turn.query_result.query_text,
            "dispatching turn"
        );

        let handler: &dyn TurnHandler = match intent {
            IntentKind::ConfirmAddress => &self.confirm_address,
            IntentKind::PredictHousingType => &self.predict_housing_type,
            IntentKind::GetLandlordInfo => &self.get_landlord_info,
        };

        let reply = handler.handle(turn).await?;
        Ok(WebhookResponse::with_text(reply.text, reply.contexts))
    }
}
