//! Report rendering and the derived health score.
//!
//! Pure formatting over a finished `AnalysisResult`: no field is truncated
//! and no business decision is made here.

use crate::domain::analysis::entities::{AnalysisResult, Severity, Verdict};

use super::entities::{HealthScore, ReportFormat};

/// Compute the presentation health score for a result.
///
/// Starts at 100 and deducts 25/15/8/3 points per critical/high/medium/low
/// risk flag and 5 points per deception alert, clamped to [0, 100].
pub fn health_score(result: &AnalysisResult) -> HealthScore {
    let mut score: i32 = 100;

    for flag in &result.risk_flags {
        score -= match flag.severity {
            Severity::Critical => 25,
            Severity::High => 15,
            Severity::Medium => 8,
            Severity::Low => 3,
        };
    }

    score -= result.deception_alerts.len() as i32 * 5;

    let score = score.clamp(0, 100) as u8;
    let (grade, label) = match score {
        80..=100 => ('A', "Excellent"),
        60..=79 => ('B', "Good"),
        40..=59 => ('C', "Fair"),
        20..=39 => ('D', "Poor"),
        _ => ('F', "Avoid"),
    };

    HealthScore { score, grade, label }
}

/// Render a human-readable report in the requested format.
pub fn generate_report(result: &AnalysisResult, format: ReportFormat) -> String {
    match format {
        ReportFormat::Markdown => markdown_report(result),
        ReportFormat::Plain => plain_report(result),
    }
}

fn verdict_symbol(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Safe => "✅",
        Verdict::Caution => "⚠️",
        Verdict::Avoid => "🚫",
    }
}

fn severity_symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴",
        Severity::High => "🟠",
        Severity::Medium => "🟡",
        Severity::Low => "🟢",
    }
}

fn title_case_tag(tag: &str) -> String {
    tag.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn markdown_report(result: &AnalysisResult) -> String {
    let mut lines = vec![
        "# LabelLens Analysis Report".to_string(),
        String::new(),
        format!(
            "## Overall Verdict: {} {}",
            verdict_symbol(result.overall_verdict),
            result.overall_verdict
        ),
        String::new(),
        format!("**Confidence:** {:.0}%", result.confidence_score * 100.0),
        String::new(),
        format!("**Analyzed for:** {}", result.analyzed_profiles.join(", ")),
        String::new(),
        "### Summary".to_string(),
        result.summary.clone(),
        String::new(),
    ];

    if !result.risk_flags.is_empty() {
        lines.push("## ⚠️ Risk Flags".to_string());
        lines.push(String::new());
        for severity in Severity::ALL {
            for flag in result.risk_flags.iter().filter(|f| f.severity == severity) {
                lines.push(format!("### {} {}", severity_symbol(severity), flag.ingredient));
                lines.push(format!("- **Risk Type:** {}", title_case_tag(&flag.risk_type)));
                lines.push(format!("- **Severity:** {}", title_case_tag(severity.as_str())));
                lines.push(format!("- **Explanation:** {}", flag.explanation));
                if !flag.relevant_profiles.is_empty() {
                    lines.push(format!("- **Affects:** {}", flag.relevant_profiles.join(", ")));
                }
                lines.push(String::new());
            }
        }
    }

    if !result.deception_alerts.is_empty() {
        lines.push("## 🎭 Deception Alerts".to_string());
        lines.push(String::new());
        for alert in &result.deception_alerts {
            lines.push(format!("- **Claim:** {}", alert.claim));
            lines.push(format!("  - **Reality:** {}", alert.reality));
            lines.push(String::new());
        }
    }

    if !result.uncertainty_flags.is_empty() {
        lines.push("## ❓ Uncertainty Flags".to_string());
        lines.push(String::new());
        for flag in &result.uncertainty_flags {
            lines.push(format!("- **{}**", flag.ingredient));
            if !flag.possible_concerns.is_empty() {
                lines.push(format!(
                    "  - Possible concerns: {}",
                    flag.possible_concerns.join(", ")
                ));
            }
            if !flag.recommendation.is_empty() {
                lines.push(format!("  - Recommendation: {}", flag.recommendation));
            }
            lines.push(String::new());
        }
    }

    if !result.smart_swaps.is_empty() {
        lines.push("## 💡 Smart Swaps".to_string());
        lines.push(String::new());
        for swap in &result.smart_swaps {
            lines.push(format!("- **Instead of:** {}", swap.avoid));
            lines.push(format!("  - **Try:** {}", swap.try_instead));
            lines.push(format!("  - **Why:** {}", swap.reason));
            lines.push(String::new());
        }
    }

    lines.push("---".to_string());
    lines.push(format!("*Analysis performed at {}*", result.timestamp.to_rfc3339()));
    lines.push(String::new());
    lines.push(
        "*Disclaimer: This analysis is for informational purposes only and does not constitute medical advice.*"
            .to_string(),
    );

    lines.join("\n")
}

fn plain_report(result: &AnalysisResult) -> String {
    let mut lines = vec![
        "LABELLENS ANALYSIS REPORT".to_string(),
        "=".repeat(30),
        String::new(),
        format!("VERDICT: {}", result.overall_verdict),
        format!("Confidence: {:.0}%", result.confidence_score * 100.0),
        format!("Profiles: {}", result.analyzed_profiles.join(", ")),
        String::new(),
        "SUMMARY:".to_string(),
        result.summary.clone(),
        String::new(),
    ];

    if !result.risk_flags.is_empty() {
        lines.push("RISK FLAGS:".to_string());
        lines.push("-".repeat(20));
        for severity in Severity::ALL {
            for flag in result.risk_flags.iter().filter(|f| f.severity == severity) {
                lines.push(format!("* {} [{}]", flag.ingredient, severity.as_str()));
                lines.push(format!("  Type: {}", flag.risk_type));
                lines.push(format!("  {}", flag.explanation));
                lines.push(String::new());
            }
        }
    }

    if !result.deception_alerts.is_empty() {
        lines.push("DECEPTION ALERTS:".to_string());
        lines.push("-".repeat(20));
        for alert in &result.deception_alerts {
            lines.push(format!("* Claim: {}", alert.claim));
            lines.push(format!("  Reality: {}", alert.reality));
            lines.push(String::new());
        }
    }

    if !result.uncertainty_flags.is_empty() {
        lines.push("UNCERTAIN INGREDIENTS:".to_string());
        lines.push("-".repeat(20));
        for flag in &result.uncertainty_flags {
            lines.push(format!("* {}", flag.ingredient));
            if !flag.possible_concerns.is_empty() {
                lines.push(format!("  Possible concerns: {}", flag.possible_concerns.join(", ")));
            }
            if !flag.recommendation.is_empty() {
                lines.push(format!("  Recommendation: {}", flag.recommendation));
            }
            lines.push(String::new());
        }
    }

    if !result.smart_swaps.is_empty() {
        lines.push("SMART SWAPS:".to_string());
        lines.push("-".repeat(20));
        for swap in &result.smart_swaps {
            lines.push(format!("* Instead of {}, try {}", swap.avoid, swap.try_instead));
            lines.push(format!("  ({})", swap.reason));
            lines.push(String::new());
        }
    }

    lines.push(format!(
        "Analysis performed at {}. For informational purposes only; not medical advice.",
        result.timestamp.to_rfc3339()
    ));

    lines.join("\n")
}
