use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::analysis::entities::{AnalysisResult, Verdict};
use crate::domain::common::generate_timestamp;

/// Most recent scans kept per session.
pub const HISTORY_LIMIT: usize = 20;

const PREVIEW_CHARS: usize = 100;

/// One remembered scan. Snapshots copy the fields they need from the
/// analysis result instead of aliasing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub ingredients_preview: String,
    pub full_ingredients: String,
    pub verdict: Verdict,
    pub confidence: f64,
    pub risk_count: usize,
    pub profiles: Vec<String>,
}

impl ScanRecord {
    pub fn from_result(ingredients: &str, result: &AnalysisResult) -> Self {
        let (now, timestamp) = generate_timestamp();

        let preview = if ingredients.chars().count() > PREVIEW_CHARS {
            let truncated: String = ingredients.chars().take(PREVIEW_CHARS).collect();
            format!("{truncated}...")
        } else {
            ingredients.to_string()
        };

        Self {
            id: Uuid::new_v7(timestamp),
            timestamp: now,
            ingredients_preview: preview,
            full_ingredients: ingredients.to_string(),
            verdict: result.overall_verdict,
            confidence: result.confidence_score,
            risk_count: result.risk_flags.len(),
            profiles: result.analyzed_profiles.clone(),
        }
    }
}

/// Session-scoped scan history, newest first, capped at `HISTORY_LIMIT`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScanHistory {
    records: Vec<ScanRecord>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ingredients: &str, result: &AnalysisResult) {
        self.records.insert(0, ScanRecord::from_result(ingredients, result));
        self.records.truncate(HISTORY_LIMIT);
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    /// Scan counts per verdict, for session statistics.
    pub fn verdict_counts(&self) -> HashMap<Verdict, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            *counts.entry(record.verdict).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_verdict(verdict: Verdict) -> AnalysisResult {
        let mut result = AnalysisResult::failure("s", "e", vec!["Keto".to_string()], 1);
        result.error = false;
        result.overall_verdict = verdict;
        result
    }

    #[test]
    fn records_are_newest_first_and_capped() {
        let mut history = ScanHistory::new();
        for i in 0..(HISTORY_LIMIT + 5) {
            let ingredients = format!("Ingredient {i}");
            history.record(&ingredients, &result_with_verdict(Verdict::Safe));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert!(
            history.records()[0]
                .ingredients_preview
                .contains(&format!("{}", HISTORY_LIMIT + 4))
        );
    }

    #[test]
    fn long_ingredient_lists_are_previewed() {
        let mut history = ScanHistory::new();
        let long_input = "x".repeat(250);
        history.record(&long_input, &result_with_verdict(Verdict::Caution));

        let record = &history.records()[0];
        assert_eq!(record.ingredients_preview.chars().count(), 103);
        assert!(record.ingredients_preview.ends_with("..."));
        assert_eq!(record.full_ingredients.len(), 250);
    }

    #[test]
    fn verdict_counts_aggregate_the_session() {
        let mut history = ScanHistory::new();
        history.record("A", &result_with_verdict(Verdict::Safe));
        history.record("B", &result_with_verdict(Verdict::Safe));
        history.record("C", &result_with_verdict(Verdict::Avoid));

        let counts = history.verdict_counts();
        assert_eq!(counts[&Verdict::Safe], 2);
        assert_eq!(counts[&Verdict::Avoid], 1);
        assert_eq!(counts.get(&Verdict::Caution), None);
    }

    #[test]
    fn snapshot_copies_result_fields() {
        let mut history = ScanHistory::new();
        let result = result_with_verdict(Verdict::Avoid);
        history.record("Water", &result);

        let record = &history.records()[0];
        assert_eq!(record.verdict, Verdict::Avoid);
        assert_eq!(record.profiles, vec!["Keto".to_string()]);
        assert_eq!(record.risk_count, 0);
    }
}
