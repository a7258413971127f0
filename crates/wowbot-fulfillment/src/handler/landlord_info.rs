//! Landlord ownership handler.
//!
//! Resolves the turn's location slots, queries the ownership records for the
//! resolved parcel, and replies based only on how many buildings share the
//! same landlord. Persists no context.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use wowbot_core::{format_address, Bbl, WebhookRequest};
use wowbot_lookup::{GeocodeService, PropertyRecordsService};

use crate::error::FulfillmentError;
use crate::handler::{Reply, TurnHandler};
use crate::intent::IntentKind;

/// Reply when the geocoder finds no candidates.
const NO_ADDRESS_MATCH: &str =
    "Unfortunately, I was unable to find any information about the landlord at that address.";

/// Public ownership-portal page, keyed by BBL.
const PORTAL_BASE: &str = "https://whoownswhat.justfix.nyc/bbl";

/// Handler for the GetLandlordInfo intent (and the classifier's catch-all).
pub struct GetLandlordInfoHandler {
    geocoder: Arc<dyn GeocodeService>,
    records: Arc<dyn PropertyRecordsService>,
    append_zip: bool,
}

impl GetLandlordInfoHandler {
    pub fn new(
        geocoder: Arc<dyn GeocodeService>,
        records: Arc<dyn PropertyRecordsService>,
        append_zip: bool,
    ) -> Self {
        Self {
            geocoder,
            records,
            append_zip,
        }
    }
}

#[async_trait]
impl TurnHandler for GetLandlordInfoHandler {
    fn intent(&self) -> IntentKind {
        IntentKind::GetLandlordInfo
    }

    async fn handle(&self, turn: &WebhookRequest) -> Result<Reply, FulfillmentError> {
        let location = &turn.query_result.parameters.location;
        let query = format_address(location, self.append_zip);
        let results = self.geocoder.search(&query).await?;

        let Some(feature) = results.first() else {
            return Ok(Reply::text_only(NO_ADDRESS_MATCH));
        };

        let props = &feature.properties;
        let addr = format!("{}, {}", props.name, props.borough);
        let bbl = &props.pad_bbl;
        let landlord = self.records.ownership(&Bbl::split(bbl)).await?;
        info!(%bbl, buildings = landlord.addrs.len(), "ownership records fetched");

        let text = match landlord.addrs.len() {
            0 => format!(
                "Alas, I couldn't find any information about the landlord at {}.",
                addr
            ),
            1 => format!(
                "The landlord at {} does not own any other buildings. Learn more at {}/{}.",
                addr, PORTAL_BASE, bbl
            ),
            n => format!(
                "The landlord at {} owns {} buildings. Learn more at {}/{}.",
                addr, n, PORTAL_BASE, bbl
            ),
        };
        Ok(Reply::text_only(text))
    }
}
