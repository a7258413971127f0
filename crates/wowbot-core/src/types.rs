//! Dialogflow webhook envelope types.
//!
//! Wire shapes for the inbound turn and outbound reply. Field names follow
//! the platform's JSON exactly (camelCase envelope keys, kebab-case slot
//! names); everything is tolerant of missing fields since slot values may be
//! partially empty.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Inbound turn
// =============================================================================

/// One inbound webhook request: a single conversation turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Opaque session path assigned by the dialogue platform.
    pub session: String,
    pub query_result: QueryResult,
}

/// The parsed utterance: raw text, slot values, matched intent, and any
/// contexts carried over from prior turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryResult {
    pub query_text: String,
    pub parameters: Parameters,
    pub intent: Intent,
    pub output_contexts: Vec<OutputContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub location: Location,
}

/// The matched intent, identified only by its display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Intent {
    pub display_name: String,
}

/// Location slot values extracted from the utterance. Any subset may be
/// empty; address-dependent handlers expect at least one of street-address
/// or business-name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(rename = "business-name")]
    pub business_name: String,
    #[serde(rename = "street-address")]
    pub street_address: String,
    #[serde(rename = "subadmin-area")]
    pub subadmin_area: String,
    pub city: String,
    #[serde(rename = "zip-code")]
    pub zip_code: String,
}

/// A named, lifespan-bounded piece of state the platform persists across
/// turns within a session. Names are namespaced as
/// `{session}/contexts/{key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputContext {
    pub name: String,
    pub lifespan_count: u32,
    pub parameters: Map<String, Value>,
}

// =============================================================================
// Outbound reply
// =============================================================================

/// The outbound webhook response: reply text plus any contexts to persist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_messages: Vec<FulfillmentMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output_contexts: Vec<OutputContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FulfillmentMessage {
    pub text: TextMessage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextMessage {
    pub text: Vec<String>,
}

impl WebhookResponse {
    /// Build a response with a single text alternative and the given
    /// contexts to persist.
    pub fn with_text(text: impl Into<String>, output_contexts: Vec<OutputContext>) -> Self {
        Self {
            fulfillment_messages: vec![FulfillmentMessage {
                text: TextMessage {
                    text: vec![text.into()],
                },
            }],
            output_contexts,
        }
    }

    /// The first (and in practice only) text alternative, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.fulfillment_messages
            .first()
            .and_then(|m| m.text.text.first())
            .map(String::as_str)
    }
}

// =============================================================================
// Tests
// =============================================================================
