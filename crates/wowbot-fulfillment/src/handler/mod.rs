//! Turn handler trait and per-intent handler implementations.

pub mod confirm_address;
pub mod housing_type;
pub mod landlord_info;

use async_trait::async_trait;
use wowbot_core::{OutputContext, WebhookRequest};

use crate::error::FulfillmentError;
use crate::intent::IntentKind;

pub use confirm_address::ConfirmAddressHandler;
pub use housing_type::PredictHousingTypeHandler;
pub use landlord_info::GetLandlordInfoHandler;

/// What a handler produces for one turn: reply text plus any contexts to
/// persist for future turns.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub contexts: Vec<OutputContext>,
}

impl Reply {
    /// A reply with no contexts to persist.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            contexts: vec![],
        }
    }

    /// A reply persisting a single context.
    pub fn with_context(text: impl Into<String>, context: OutputContext) -> Self {
        Self {
            text: text.into(),
            contexts: vec![context],
        }
    }
}

/// One handler per intent category. Handlers are fully awaited: the reply is
/// returned as a value, never assigned from a detached callback.
#[async_trait]
pub trait TurnHandler: Send + Sync {
    /// The intent category this handler serves.
    fn intent(&self) -> IntentKind;

    /// Handle one turn, producing reply text and contexts to persist.
    async fn handle(&self, turn: &WebhookRequest) -> Result<Reply, FulfillmentError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::address_confirmed;

    #[test]
    fn test_reply_text_only() {
        let reply = Reply::text_only("hello");
        assert_eq!(reply.text, "hello");
        assert!(reply.contexts.is_empty());
    }

    #[test]
    fn test_reply_with_context() {
        let reply = Reply::with_context("hello", address_confirmed("s", "3002920001"));
        assert_eq!(reply.contexts.len(), 1);
        assert_eq!(reply.contexts[0].name, "s/contexts/address-confirmed");
    }
}
