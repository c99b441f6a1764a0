//! Normalization of raw collaborator records into typed entities.
//!
//! Malformed fields are defaulted rather than rejected, favoring availability
//! over strict validation.

use super::entities::{
    ConcernLevel, DeceptionAlert, RiskFlag, Severity, SmartSwap, UncertaintyFlag, Verdict,
};
use super::schema::{RawDeceptionAlert, RawRiskFlag, RawSmartSwap, RawUncertaintyFlag};

pub fn normalize_verdict(raw: Option<&str>) -> Verdict {
    Verdict::from_raw(raw)
}

/// Clamp the collaborator confidence into [0, 1], defaulting to 0.5.
pub fn clamp_confidence(raw: Option<f64>) -> f64 {
    raw.unwrap_or(0.5).clamp(0.0, 1.0)
}

pub fn risk_flag_from_raw(raw: RawRiskFlag) -> RiskFlag {
    RiskFlag {
        ingredient: raw.ingredient.unwrap_or_else(|| "Unknown".to_string()),
        risk_type: raw.risk_type.unwrap_or_else(|| "unknown".to_string()),
        severity: Severity::from_raw(raw.severity.as_deref()),
        explanation: raw.explanation.unwrap_or_default(),
        relevant_profiles: raw.relevant_profiles,
    }
}

pub fn deception_alert_from_raw(raw: RawDeceptionAlert) -> DeceptionAlert {
    DeceptionAlert {
        claim: raw.claim.unwrap_or_default(),
        reality: raw.reality.unwrap_or_default(),
        concern_level: ConcernLevel::from_raw(raw.concern_level.as_deref()),
    }
}

pub fn uncertainty_flag_from_raw(raw: RawUncertaintyFlag) -> UncertaintyFlag {
    UncertaintyFlag {
        ingredient: raw.ingredient.unwrap_or_else(|| "Unknown".to_string()),
        possible_concerns: raw.possible_concerns,
        recommendation: raw.recommendation.unwrap_or_default(),
    }
}

pub fn smart_swap_from_raw(raw: RawSmartSwap) -> SmartSwap {
    SmartSwap {
        avoid: raw.avoid.unwrap_or_default(),
        try_instead: raw.try_instead.unwrap_or_default(),
        reason: raw.reason.unwrap_or_default(),
    }
}
