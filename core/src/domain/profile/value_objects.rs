use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::{ProfileType, SeverityLevel};
use super::registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityPreference {
    Strict,
    #[default]
    Balanced,
    Lenient,
}

/// A single caller's health configuration for one analysis request.
///
/// Request-scoped and owned by the caller; a profile with neither active
/// profile types nor custom restrictions is invalid for analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub active_profiles: Vec<ProfileType>,
    pub custom_restrictions: Vec<String>,
    pub severity_preference: SeverityPreference,
}

impl UserProfile {
    pub fn new(active_profiles: Vec<ProfileType>) -> Self {
        Self {
            active_profiles,
            ..Self::default()
        }
    }

    /// True when there is nothing to analyze against.
    pub fn is_empty(&self) -> bool {
        self.active_profiles.is_empty() && self.custom_restrictions.is_empty()
    }

    /// Combined clinical context for all active profiles, for prompt assembly.
    pub fn combined_context(&self) -> String {
        let mut contexts: Vec<String> = self
            .active_profiles
            .iter()
            .map(|&pt| {
                let profile = registry::lookup(pt);
                format!(
                    "**{}:**\n{}",
                    profile.display_name, profile.clinical_context
                )
            })
            .collect();

        if !self.custom_restrictions.is_empty() {
            contexts.push(format!(
                "**Additional Restrictions:**\n{}",
                self.custom_restrictions.join(", ")
            ));
        }

        contexts.join("\n\n")
    }

    /// Union of the avoid-keywords of every active profile, sorted for
    /// deterministic output.
    pub fn all_avoid_keywords(&self) -> Vec<String> {
        self.active_profiles
            .iter()
            .flat_map(|&pt| registry::lookup(pt).avoid_keywords.iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Human-readable names for all active profiles, including custom
    /// restrictions in `"Name: avoid [...]"` form.
    pub fn display_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .active_profiles
            .iter()
            .map(|&pt| registry::lookup(pt).display_name.clone())
            .collect();

        for restriction in &self.custom_restrictions {
            match restriction.split_once(':') {
                Some((name, _)) => names.push(format!("Custom: {}", name.trim())),
                None => names.push("Custom Profile".to_string()),
            }
        }

        names
    }

    /// Whether any active profile is safety-critical (e.g. allergies).
    pub fn has_high_severity_profile(&self) -> bool {
        self.active_profiles
            .iter()
            .any(|&pt| registry::lookup(pt).severity_level == SeverityLevel::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_is_invalid_for_analysis() {
        assert!(UserProfile::default().is_empty());
        assert!(!UserProfile::new(vec![ProfileType::Celiac]).is_empty());

        let custom_only = UserProfile {
            custom_restrictions: vec!["Histamine: avoid [aged cheese]".to_string()],
            ..UserProfile::default()
        };
        assert!(!custom_only.is_empty());
    }

    #[test]
    fn display_names_extract_custom_profile_names() {
        let profile = UserProfile {
            active_profiles: vec![ProfileType::Type2Diabetes],
            custom_restrictions: vec![
                "Histamine: avoid [aged cheese], watch [vinegar]".to_string(),
                "no artificial colors".to_string(),
            ],
            severity_preference: SeverityPreference::Balanced,
        };

        assert_eq!(
            profile.display_names(),
            vec![
                "Type 2 Diabetes".to_string(),
                "Custom: Histamine".to_string(),
                "Custom Profile".to_string(),
            ]
        );
    }

    #[test]
    fn avoid_keywords_are_deduplicated_across_profiles() {
        // "sugar" appears in both keyword sets.
        let profile = UserProfile::new(vec![ProfileType::Type2Diabetes, ProfileType::Keto]);
        let keywords = profile.all_avoid_keywords();

        assert_eq!(
            keywords.iter().filter(|k| k.as_str() == "sugar").count(),
            1
        );
        assert!(keywords.contains(&"maltodextrin".to_string()));
    }

    #[test]
    fn high_severity_detection() {
        assert!(UserProfile::new(vec![ProfileType::NutAllergy]).has_high_severity_profile());
        assert!(!UserProfile::new(vec![ProfileType::Keto]).has_high_severity_profile());
    }

    #[test]
    fn combined_context_includes_custom_restrictions() {
        let profile = UserProfile {
            active_profiles: vec![ProfileType::Celiac],
            custom_restrictions: vec!["no annatto".to_string()],
            severity_preference: SeverityPreference::Strict,
        };

        let context = profile.combined_context();
        assert!(context.contains("Celiac Disease (Gluten-Free)"));
        assert!(context.contains("Additional Restrictions"));
        assert!(context.contains("no annatto"));
    }
}
