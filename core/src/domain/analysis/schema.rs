//! Wire schema for semantic-analyzer responses.
//!
//! The collaborator contract is a versioned schema, not a free-form map:
//! every field is optional with a named default, so schema drift surfaces at
//! this boundary instead of deep inside aggregation.

use serde::{Deserialize, Serialize};

/// Raw semantic-analysis response as received from the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysisResponse {
    #[serde(default)]
    pub overall_verdict: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub risk_flags: Vec<RawRiskFlag>,
    #[serde(default)]
    pub deception_alerts: Vec<RawDeceptionAlert>,
    #[serde(default)]
    pub uncertainty_flags: Vec<RawUncertaintyFlag>,
    #[serde(default)]
    pub safe_for_general_public: Option<bool>,
    #[serde(default)]
    pub user_specific_warning: Option<bool>,
    #[serde(default)]
    pub smart_swaps: Vec<RawSmartSwap>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRiskFlag {
    #[serde(default)]
    pub ingredient: Option<String>,
    #[serde(default)]
    pub risk_type: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub relevant_profiles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDeceptionAlert {
    #[serde(default)]
    pub claim: Option<String>,
    #[serde(default)]
    pub reality: Option<String>,
    #[serde(default)]
    pub concern_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUncertaintyFlag {
    #[serde(default)]
    pub ingredient: Option<String>,
    #[serde(default)]
    pub possible_concerns: Vec<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSmartSwap {
    #[serde(default)]
    pub avoid: Option<String>,
    #[serde(default)]
    pub try_instead: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_named_defaults() {
        let raw: RawAnalysisResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.overall_verdict, None);
        assert!(raw.risk_flags.is_empty());
        assert!(!raw.error);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let raw: RawAnalysisResponse = serde_json::from_str(
            r#"{"overall_verdict": "SAFE", "brand_new_field": 42}"#,
        )
        .unwrap();
        assert_eq!(raw.overall_verdict.as_deref(), Some("SAFE"));
    }

    #[test]
    fn partial_risk_flags_deserialize() {
        let raw: RawRiskFlag =
            serde_json::from_str(r#"{"ingredient": "Sugar", "severity": "high"}"#).unwrap();
        assert_eq!(raw.ingredient.as_deref(), Some("Sugar"));
        assert_eq!(raw.risk_type, None);
        assert!(raw.relevant_profiles.is_empty());
    }
}
