//! The conversation-context convention.
//!
//! This webhook owns no storage. State that must survive a turn is written
//! into the outbound response as a named context entry; the dialogue
//! platform persists it and delivers it back on later turns. Names are
//! namespaced as `{session}/contexts/{key}`, and every context we write
//! carries the same fixed lifespan so the platform expires it on its own.

use serde_json::{Map, Value};
use wowbot_core::OutputContext;

/// Context key carrying the resolved parcel id (`bbl` parameter).
pub const ADDRESS_CONFIRMED_KEY: &str = "address-confirmed";

/// Context key carrying the predicted label (`housing-type` parameter).
pub const HOUSING_TYPE_FOUND_KEY: &str = "housing-type-found";

/// Turns a written context survives before the platform expires it.
pub const CONTEXT_LIFESPAN: u32 = 10;

/// Fully-qualified context name for a session and key.
pub fn context_name(session: &str, key: &str) -> String {
    format!("{}/contexts/{}", session, key)
}

/// Build the context asserting a confirmed address with its resolved BBL.
pub fn address_confirmed(session: &str, bbl: &str) -> OutputContext {
    let mut parameters = Map::new();
    parameters.insert("bbl".to_string(), Value::String(bbl.to_string()));
    OutputContext {
        name: context_name(session, ADDRESS_CONFIRMED_KEY),
        lifespan_count: CONTEXT_LIFESPAN,
        parameters,
    }
}

/// Build the context recording a housing-type prediction (possibly empty).
pub fn housing_type_found(session: &str, housing_type: &str) -> OutputContext {
    let mut parameters = Map::new();
    parameters.insert(
        "housing-type".to_string(),
        Value::String(housing_type.to_string()),
    );
    OutputContext {
        name: context_name(session, HOUSING_TYPE_FOUND_KEY),
        lifespan_count: CONTEXT_LIFESPAN,
        parameters,
    }
}

/// Extract the BBL carried by a prior `address-confirmed` context, if any.
///
/// Scans by name suffix because inbound names are fully session-qualified.
/// A present entry with an empty or missing `bbl` parameter counts as
/// unresolved.
pub fn confirmed_bbl(contexts: &[OutputContext]) -> Option<String> {
    contexts
        .iter()
        .find(|c| {
            c.name
                .ends_with(&format!("/contexts/{}", ADDRESS_CONFIRMED_KEY))
        })
        .and_then(|c| c.parameters.get("bbl"))
        .and_then(Value::as_str)
        .filter(|bbl| !bbl.is_empty())
        .map(str::to_string)
}
