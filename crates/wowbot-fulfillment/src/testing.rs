//! In-memory fakes and turn fixtures shared by the handler unit tests.

use async_trait::async_trait;
use wowbot_core::types::{Intent, Location, OutputContext, Parameters, QueryResult, WebhookRequest};
use wowbot_core::Bbl;
use wowbot_lookup::{
    AddressRecord, GeoFeature, GeoProperties, GeoSearchResults, GeocodeService, HousingTypeResult,
    LookupError, OwnershipResults, PropertyRecordsService,
};

pub(crate) const TEST_SESSION: &str = "projects/p/agent/sessions/test";

fn fail(service: &'static str, status: u16) -> LookupError {
    LookupError::Status {
        service,
        status,
        body: "upstream failure".to_string(),
    }
}

// =============================================================================
// Fakes
// =============================================================================

pub(crate) struct MockGeocoder {
    results: GeoSearchResults,
    fail_status: Option<u16>,
}

impl MockGeocoder {
    pub(crate) fn with_feature(name: &str, borough: &str, bbl: &str) -> Self {
        Self {
            results: GeoSearchResults {
                features: vec![GeoFeature {
                    properties: GeoProperties {
                        name: name.to_string(),
                        borough: borough.to_string(),
                        pad_bbl: bbl.to_string(),
                    },
                }],
            },
            fail_status: None,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            results: GeoSearchResults::default(),
            fail_status: None,
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            results: GeoSearchResults::default(),
            fail_status: Some(status),
        }
    }
}

#[async_trait]
impl GeocodeService for MockGeocoder {
    async fn search(&self, _text: &str) -> Result<GeoSearchResults, LookupError> {
        match self.fail_status {
            Some(status) => Err(fail("geosearch", status)),
            None => Ok(self.results.clone()),
        }
    }
}

pub(crate) struct MockRecords {
    building_count: usize,
    housing_type: String,
    fail_status: Option<u16>,
}

impl MockRecords {
    pub(crate) fn owning(building_count: usize) -> Self {
        Self {
            building_count,
            housing_type: String::new(),
            fail_status: None,
        }
    }

    pub(crate) fn predicting(housing_type: &str) -> Self {
        Self {
            building_count: 0,
            housing_type: housing_type.to_string(),
            fail_status: None,
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            building_count: 0,
            housing_type: String::new(),
            fail_status: Some(status),
        }
    }
}

#[async_trait]
impl PropertyRecordsService for MockRecords {
    async fn ownership(&self, _bbl: &Bbl) -> Result<OwnershipResults, LookupError> {
        match self.fail_status {
            Some(status) => Err(fail("wow-api", status)),
            None => Ok(OwnershipResults {
                addrs: vec![AddressRecord::default(); self.building_count],
            }),
        }
    }

    async fn housing_type(&self, _bbl: &str) -> Result<HousingTypeResult, LookupError> {
        match self.fail_status {
            Some(status) => Err(fail("wow-api", status)),
            None => Ok(HousingTypeResult {
                result: self.housing_type.clone(),
            }),
        }
    }
}

// =============================================================================
// Turn fixtures
// =============================================================================

/// An inbound turn carrying a street address and borough slot.
pub(crate) fn address_turn(intent: &str, street: &str, subadmin: &str) -> WebhookRequest {
    WebhookRequest {
        session: TEST_SESSION.to_string(),
        query_result: QueryResult {
            query_text: format!("{} {}", street, subadmin),
            parameters: Parameters {
                location: Location {
                    street_address: street.to_string(),
                    subadmin_area: subadmin.to_string(),
                    ..Location::default()
                },
            },
            intent: Intent {
                display_name: intent.to_string(),
            },
            output_contexts: vec![],
        },
    }
}

/// An inbound turn carrying only prior-turn contexts.
pub(crate) fn context_turn(intent: &str, output_contexts: Vec<OutputContext>) -> WebhookRequest {
    WebhookRequest {
        session: TEST_SESSION.to_string(),
        query_result: QueryResult {
            intent: Intent {
                display_name: intent.to_string(),
            },
            output_contexts,
            ..QueryResult::default()
        },
    }
}
