//! Intent classification.
//!
//! Maps the opaque intent display name assigned by the dialogue platform to
//! one of the three handled categories. Classification is by literal
//! suffix/substring match, first rule wins.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The three handled intent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentKind {
    ConfirmAddress,
    PredictHousingType,
    GetLandlordInfo,
}

impl IntentKind {
    /// Classify an intent display name.
    ///
    /// Rules in priority order:
    /// 1. Ends with `"ConfirmAddress"` -> [`IntentKind::ConfirmAddress`].
    /// 2. Contains `"HousingTypeUnsure"` and ends with
    ///    `"ConfirmAddress - yes"` -> [`IntentKind::PredictHousingType`].
    /// 3. Anything else -> [`IntentKind::GetLandlordInfo`].
    ///
    /// Rules 1 and 2 cannot both match: `"ConfirmAddress - yes"` is never a
    /// true `"ConfirmAddress"` suffix, so the ordering is safe. The default
    /// branch is a deliberate catch-all; it is logged so unrecognized names
    /// stay observable.
    pub fn classify(display_name: &str) -> Self {
        if display_name.ends_with("ConfirmAddress") {
            IntentKind::ConfirmAddress
        } else if display_name.contains("HousingTypeUnsure")
            && display_name.ends_with("ConfirmAddress - yes")
        {
            IntentKind::PredictHousingType
        } else {
            debug!(intent = display_name, "unrecognized intent name, routing to landlord info");
            IntentKind::GetLandlordInfo
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::ConfirmAddress => write!(f, "confirm-address"),
            IntentKind::PredictHousingType => write!(f, "predict-housing-type"),
            IntentKind::GetLandlordInfo => write!(f, "get-landlord-info"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Rule 1: ConfirmAddress suffix ----

    #[test]
    fn test_confirm_address_suffix() {
        assert_eq!(
            IntentKind::classify("Default Welcome Intent - ConfirmAddress"),
            IntentKind::ConfirmAddress
        );
    }

    #[test]
    fn test_bare_confirm_address() {
        assert_eq!(
            IntentKind::classify("ConfirmAddress"),
            IntentKind::ConfirmAddress
        );
    }

    #[test]
    fn test_housing_type_unsure_confirm_address_suffix_is_rule_one() {
        // Ends with the bare suffix, so rule 1 wins even though it contains
        // the housing-type-unsure marker.
        assert_eq!(
            IntentKind::classify("HousingTypeUnsure - ConfirmAddress"),
            IntentKind::ConfirmAddress
        );
    }

    // ---- Rule 2: housing-type-unsure follow-up ----

    #[test]
    fn test_predict_housing_type() {
        assert_eq!(
            IntentKind::classify("HousingTypeUnsure - ConfirmAddress - yes"),
            IntentKind::PredictHousingType
        );
    }

    #[test]
    fn test_confirm_address_yes_without_unsure_marker_is_default() {
        // Suffix matches rule 2 but the substring does not: falls through.
        assert_eq!(
            IntentKind::classify("Somewhere - ConfirmAddress - yes"),
            IntentKind::GetLandlordInfo
        );
    }

    #[test]
    fn test_unsure_marker_without_yes_suffix_is_default() {
        assert_eq!(
            IntentKind::classify("HousingTypeUnsure - ConfirmAddress - no"),
            IntentKind::GetLandlordInfo
        );
    }

    // ---- Rule 3: catch-all ----

    #[test]
    fn test_landlord_info_intent() {
        assert_eq!(
            IntentKind::classify("GetLandlordInfo"),
            IntentKind::GetLandlordInfo
        );
    }

    #[test]
    fn test_unrecognized_intent_defaults_to_landlord_info() {
        assert_eq!(
            IntentKind::classify("Default Fallback Intent"),
            IntentKind::GetLandlordInfo
        );
    }

    #[test]
    fn test_empty_name_defaults_to_landlord_info() {
        assert_eq!(IntentKind::classify(""), IntentKind::GetLandlordInfo);
    }

    #[test]
    fn test_confirm_address_not_as_suffix_is_default() {
        assert_eq!(
            IntentKind::classify("ConfirmAddress - followup"),
            IntentKind::GetLandlordInfo
        );
    }

    // ---- Display ----

    #[test]
    fn test_display_names() {
        assert_eq!(IntentKind::ConfirmAddress.to_string(), "confirm-address");
        assert_eq!(
            IntentKind::PredictHousingType.to_string(),
            "predict-housing-type"
        );
        assert_eq!(IntentKind::GetLandlordInfo.to_string(), "get-landlord-info");
    }
}
