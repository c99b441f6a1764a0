use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Plain,
}

/// Derived 0-100 summary of an analysis, for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthScore {
    pub score: u8,
    pub grade: char,
    pub label: &'static str,
}
