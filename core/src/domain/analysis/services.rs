use chrono::Utc;

use crate::domain::{
    analysis::{
        entities::AnalysisResult,
        helpers,
        ports::{AnalysisService, SemanticAnalyzer, TextExtractor},
    },
    common::services::Service,
    ingredient::parser,
    profile::value_objects::UserProfile,
    screening::services::quick_screen,
};

impl<SA> AnalysisService for Service<SA>
where
    SA: SemanticAnalyzer,
{
    async fn analyze_ingredients(
        &self,
        raw_ingredients: &str,
        user_profile: &UserProfile,
    ) -> AnalysisResult {
        // 1. Parse ingredients
        let parsed = parser::parse(raw_ingredients);
        if parsed.is_empty() {
            return AnalysisResult::failure(
                "No ingredients could be parsed from the input.",
                "No ingredients found",
                Vec::new(),
                0,
            );
        }

        // 2. Validate profile selection
        if user_profile.is_empty() {
            return AnalysisResult::failure(
                "Please select at least one health profile to analyze ingredients.",
                "No profiles selected",
                Vec::new(),
                parsed.len(),
            );
        }

        // 3. Rule-based quick screen. Advisory only: the flags are logged for
        //    inspection but not merged into the final risk flags, which come
        //    solely from the semantic analyzer.
        let rule_flags = quick_screen(&parsed, user_profile);
        tracing::debug!(
            count = rule_flags.len(),
            "rule-based screening found potential issues"
        );

        // 4. Delegate to the semantic analyzer
        let raw = match self
            .semantic_analyzer
            .analyze(raw_ingredients, user_profile)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("semantic analysis failed: {e}");
                return AnalysisResult::failure(
                    format!("Analysis failed: {e}"),
                    e.to_string(),
                    user_profile.display_names(),
                    parsed.len(),
                );
            }
        };

        if raw.error {
            return AnalysisResult::failure(
                raw.summary.unwrap_or_else(|| "Analysis failed".to_string()),
                raw.error_message
                    .unwrap_or_else(|| "Unknown error".to_string()),
                user_profile.display_names(),
                parsed.len(),
            );
        }

        // 5. Normalize collaborator output, 6. assemble the final result
        AnalysisResult {
            overall_verdict: helpers::normalize_verdict(raw.overall_verdict.as_deref()),
            confidence_score: helpers::clamp_confidence(raw.confidence_score),
            risk_flags: raw
                .risk_flags
                .into_iter()
                .map(helpers::risk_flag_from_raw)
                .collect(),
            deception_alerts: raw
                .deception_alerts
                .into_iter()
                .map(helpers::deception_alert_from_raw)
                .collect(),
            uncertainty_flags: raw
                .uncertainty_flags
                .into_iter()
                .map(helpers::uncertainty_flag_from_raw)
                .collect(),
            safe_for_general_public: raw.safe_for_general_public.unwrap_or(true),
            user_specific_warning: raw.user_specific_warning.unwrap_or(false),
            smart_swaps: raw
                .smart_swaps
                .into_iter()
                .map(helpers::smart_swap_from_raw)
                .collect(),
            summary: raw
                .summary
                .unwrap_or_else(|| "Analysis complete.".to_string()),
            analyzed_profiles: user_profile.display_names(),
            timestamp: Utc::now(),
            ingredient_count: parsed.len(),
            error: false,
            error_message: None,
        }
    }
}

/// Run an analysis from a label photo instead of raw text.
///
/// Extraction failures yield no text and flow through the same empty-input
/// path as an empty label string.
pub async fn analyze_image<SA, TE>(
    service: &Service<SA>,
    extractor: &TE,
    image_data: &[u8],
    user_profile: &UserProfile,
) -> AnalysisResult
where
    SA: SemanticAnalyzer,
    TE: TextExtractor,
{
    let text = match extractor.extract_text(image_data).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            tracing::warn!("no text detected in image");
            String::new()
        }
        Err(e) => {
            tracing::error!("text extraction failed: {e}");
            String::new()
        }
    };

    service.analyze_ingredients(&text, user_profile).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::{Severity, Verdict};
    use crate::domain::analysis::ports::{MockSemanticAnalyzer, MockTextExtractor};
    use crate::domain::analysis::schema::{RawAnalysisResponse, RawRiskFlag};
    use crate::domain::common::entities::app_errors::CoreError;
    use crate::domain::profile::entities::ProfileType;

    fn diabetic_profile() -> UserProfile {
        UserProfile::new(vec![ProfileType::Type2Diabetes])
    }

    #[tokio::test]
    async fn empty_input_short_circuits_without_calling_the_analyzer() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer.expect_analyze().times(0);
        let service = Service::new(analyzer);

        let result = service.analyze_ingredients("", &diabetic_profile()).await;

        assert!(result.error);
        assert_eq!(result.overall_verdict, Verdict::Caution);
        assert_eq!(result.confidence_score, 0.0);
        assert_eq!(result.ingredient_count, 0);
        assert_eq!(result.error_message.as_deref(), Some("No ingredients found"));
    }

    #[tokio::test]
    async fn missing_profile_selection_short_circuits() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer.expect_analyze().times(0);
        let service = Service::new(analyzer);

        let result = service
            .analyze_ingredients("Water, Salt", &UserProfile::default())
            .await;

        assert!(result.error);
        assert!(result.summary.contains("select at least one"));
        assert_eq!(result.ingredient_count, 2);
    }

    #[tokio::test]
    async fn analyzer_failure_becomes_a_well_formed_error_result() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer.expect_analyze().returning(|_, _| {
            Err(CoreError::ExternalServiceError("LLM unreachable".to_string()))
        });
        let service = Service::new(analyzer);

        let result = service
            .analyze_ingredients("Water, Salt", &diabetic_profile())
            .await;

        assert!(result.error);
        assert_eq!(result.overall_verdict, Verdict::Caution);
        assert!(result.summary.contains("LLM unreachable"));
        assert_eq!(result.analyzed_profiles, vec!["Type 2 Diabetes".to_string()]);
    }

    #[tokio::test]
    async fn analyzer_error_response_is_surfaced() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer.expect_analyze().returning(|_, _| {
            Ok(RawAnalysisResponse {
                error: true,
                error_message: Some("rate limited".to_string()),
                summary: Some("Analysis failed".to_string()),
                ..RawAnalysisResponse::default()
            })
        });
        let service = Service::new(analyzer);

        let result = service
            .analyze_ingredients("Water", &diabetic_profile())
            .await;

        assert!(result.error);
        assert_eq!(result.error_message.as_deref(), Some("rate limited"));
    }

    #[tokio::test]
    async fn invalid_verdict_is_coerced_to_caution() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer.expect_analyze().returning(|_, _| {
            Ok(RawAnalysisResponse {
                overall_verdict: Some("MAYBE".to_string()),
                confidence_score: Some(0.9),
                ..RawAnalysisResponse::default()
            })
        });
        let service = Service::new(analyzer);

        let result = service
            .analyze_ingredients("Water", &diabetic_profile())
            .await;

        assert!(!result.error);
        assert_eq!(result.overall_verdict, Verdict::Caution);
        assert_eq!(result.confidence_score, 0.9);
    }

    #[tokio::test]
    async fn end_to_end_scenario_with_stubbed_analyzer() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer
            .expect_analyze()
            .withf(|ingredients, _| ingredients.contains("Sugar"))
            .returning(|_, _| {
                Ok(RawAnalysisResponse {
                    overall_verdict: Some("CAUTION".to_string()),
                    confidence_score: Some(0.85),
                    risk_flags: vec![RawRiskFlag {
                        ingredient: Some("Sugar".to_string()),
                        risk_type: Some("hidden_sugar".to_string()),
                        severity: Some("high".to_string()),
                        explanation: Some("Raises blood glucose quickly.".to_string()),
                        relevant_profiles: vec!["Type 2 Diabetes".to_string()],
                    }],
                    summary: Some("One problematic ingredient found.".to_string()),
                    ..RawAnalysisResponse::default()
                })
            });
        let service = Service::new(analyzer);

        let result = service
            .analyze_ingredients("Water, Sugar, Wheat Flour", &diabetic_profile())
            .await;

        assert!(!result.error);
        assert_eq!(result.ingredient_count, 3);
        assert_eq!(result.risk_flags.len(), 1);
        assert_eq!(result.risk_flags[0].ingredient, "Sugar");
        assert_eq!(result.risk_flags[0].severity, Severity::High);
        assert_eq!(result.analyzed_profiles, vec!["Type 2 Diabetes".to_string()]);
    }

    #[tokio::test]
    async fn missing_collaborator_fields_take_named_defaults() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer.expect_analyze().returning(|_, _| {
            Ok(RawAnalysisResponse {
                risk_flags: vec![RawRiskFlag::default()],
                ..RawAnalysisResponse::default()
            })
        });
        let service = Service::new(analyzer);

        let result = service
            .analyze_ingredients("Water", &diabetic_profile())
            .await;

        assert!(!result.error);
        assert_eq!(result.overall_verdict, Verdict::Caution);
        assert_eq!(result.confidence_score, 0.5);
        assert_eq!(result.summary, "Analysis complete.");
        assert_eq!(result.risk_flags[0].ingredient, "Unknown");
        assert_eq!(result.risk_flags[0].severity, Severity::Medium);
        assert!(result.safe_for_general_public);
        assert!(!result.user_specific_warning);
    }

    #[tokio::test]
    async fn image_analysis_feeds_extracted_text_through_the_pipeline() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer
            .expect_analyze()
            .withf(|ingredients, _| ingredients == "Water, Sugar")
            .returning(|_, _| Ok(RawAnalysisResponse::default()));
        let service = Service::new(analyzer);

        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract_text()
            .returning(|_| Ok(Some("Water, Sugar".to_string())));

        let result = analyze_image(&service, &extractor, b"jpeg bytes", &diabetic_profile()).await;

        assert!(!result.error);
        assert_eq!(result.ingredient_count, 2);
    }

    #[tokio::test]
    async fn failed_extraction_flows_through_the_empty_input_path() {
        let mut analyzer = MockSemanticAnalyzer::new();
        analyzer.expect_analyze().times(0);
        let service = Service::new(analyzer);

        let mut extractor = MockTextExtractor::new();
        extractor.expect_extract_text().returning(|_| Ok(None));

        let result = analyze_image(&service, &extractor, b"blurry", &diabetic_profile()).await;

        assert!(result.error);
        assert_eq!(result.error_message.as_deref(), Some("No ingredients found"));
    }
}
