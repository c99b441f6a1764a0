use std::future::Future;

use crate::domain::{
    analysis::{entities::AnalysisResult, schema::RawAnalysisResponse},
    common::entities::app_errors::CoreError,
    profile::value_objects::UserProfile,
};

/// Semantic-analysis collaborator (LLM-backed or rule-backed).
///
/// The engine only validates and normalizes what comes back; it never
/// re-derives the collaborator's fields. Retry and backoff policy belong to
/// the implementation behind this port.
#[cfg_attr(test, mockall::automock)]
pub trait SemanticAnalyzer: Send + Sync {
    fn analyze(
        &self,
        ingredients: &str,
        user_profile: &UserProfile,
    ) -> impl Future<Output = Result<RawAnalysisResponse, CoreError>> + Send;
}

/// Image-to-text collaborator upstream of the parser.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract_text(
        &self,
        image_data: &[u8],
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

/// Analysis engine entry point.
///
/// Infallible by contract: every failure path terminates in a well-formed
/// `AnalysisResult` with `error` set, never in an error return.
pub trait AnalysisService: Send + Sync {
    fn analyze_ingredients(
        &self,
        raw_ingredients: &str,
        user_profile: &UserProfile,
    ) -> impl Future<Output = AnalysisResult> + Send;
}
