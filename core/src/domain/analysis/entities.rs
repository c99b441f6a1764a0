use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline outcome of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    #[default]
    Caution,
    Avoid,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE",
            Verdict::Caution => "CAUTION",
            Verdict::Avoid => "AVOID",
        }
    }

    /// Coerce a collaborator-supplied verdict string, defaulting to CAUTION
    /// for anything outside the valid set.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("SAFE") => Verdict::Safe,
            Some("CAUTION") => Verdict::Caution,
            Some("AVOID") => Verdict::Avoid,
            _ => Verdict::Caution,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a single risk flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Malformed or missing severities default to medium.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("low") => Severity::Low,
            Some("medium") => Severity::Medium,
            Some("high") => Severity::High,
            Some("critical") => Severity::Critical,
            _ => Severity::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConcernLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ConcernLevel {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("low") => ConcernLevel::Low,
            Some("medium") => ConcernLevel::Medium,
            Some("high") => ConcernLevel::High,
            _ => ConcernLevel::Medium,
        }
    }
}

/// A single risk finding against one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskFlag {
    pub ingredient: String,
    pub risk_type: String,
    pub severity: Severity,
    pub explanation: String,
    pub relevant_profiles: Vec<String>,
}

/// A deceptive-marketing finding, passed through from the semantic analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeceptionAlert {
    pub claim: String,
    pub reality: String,
    pub concern_level: ConcernLevel,
}

/// An ambiguous ingredient the analyzer could not settle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UncertaintyFlag {
    pub ingredient: String,
    pub possible_concerns: Vec<String>,
    pub recommendation: String,
}

/// A safer-alternative suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SmartSwap {
    pub avoid: String,
    pub try_instead: String,
    pub reason: String,
}

/// The terminal, immutable artifact of one analysis request.
///
/// Constructed exactly once per request and read-only afterwards; consumers
/// that keep bookkeeping (e.g. a history snapshot) copy from it rather than
/// alias it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub overall_verdict: Verdict,
    pub confidence_score: f64,
    pub risk_flags: Vec<RiskFlag>,
    pub deception_alerts: Vec<DeceptionAlert>,
    pub uncertainty_flags: Vec<UncertaintyFlag>,
    pub safe_for_general_public: bool,
    pub user_specific_warning: bool,
    pub smart_swaps: Vec<SmartSwap>,
    pub summary: String,
    pub analyzed_profiles: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub ingredient_count: usize,
    pub error: bool,
    pub error_message: Option<String>,
}

impl AnalysisResult {
    /// A well-formed failure result. Every failure path of the engine ends
    /// here instead of raising past the public boundary.
    pub fn failure(
        summary: impl Into<String>,
        error_message: impl Into<String>,
        analyzed_profiles: Vec<String>,
        ingredient_count: usize,
    ) -> Self {
        Self {
            overall_verdict: Verdict::Caution,
            confidence_score: 0.0,
            risk_flags: Vec::new(),
            deception_alerts: Vec::new(),
            uncertainty_flags: Vec::new(),
            safe_for_general_public: true,
            user_specific_warning: false,
            smart_swaps: Vec::new(),
            summary: summary.into(),
            analyzed_profiles,
            timestamp: Utc::now(),
            ingredient_count,
            error: true,
            error_message: Some(error_message.into()),
        }
    }

    /// Count risk flags per severity level; every level is present in the map.
    pub fn risk_counts_by_severity(&self) -> HashMap<Severity, usize> {
        let mut counts: HashMap<Severity, usize> =
            Severity::ALL.into_iter().map(|s| (s, 0)).collect();
        for flag in &self.risk_flags {
            if let Some(count) = counts.get_mut(&flag.severity) {
                *count += 1;
            }
        }
        counts
    }

    pub fn has_critical_risks(&self) -> bool {
        self.risk_flags
            .iter()
            .any(|flag| flag.severity == Severity::Critical)
    }
}
