use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::rules::RiskType;

/// One deterministic pre-screen hit.
///
/// Advisory output: preliminary flags are logged ahead of semantic analysis
/// and are not merged into the final result's risk flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreliminaryFlag {
    pub ingredient: String,
    pub risk_type: RiskType,
    pub matched_keyword: String,
}
