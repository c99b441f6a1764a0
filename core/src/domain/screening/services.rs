//! Rule-based pre-screening ahead of semantic analysis.
//!
//! Pure and synchronous: identical input always yields identical flags, with
//! no I/O and no external calls.

use crate::domain::ingredient::parser;
use crate::domain::profile::entities::ProfileType;
use crate::domain::profile::value_objects::UserProfile;

use super::entities::PreliminaryFlag;
use super::rules::{GLUTEN_SOURCES, HIGH_FODMAP, RiskType, SEED_OILS, SUGAR_ALIASES};

/// Screen parsed ingredients against the keyword rule sets relevant to the
/// caller's active profiles.
///
/// Within one category the first matching keyword wins, so an ingredient gets
/// at most one flag per category; it may still collect flags from different
/// categories.
pub fn quick_screen(ingredients: &[String], user_profile: &UserProfile) -> Vec<PreliminaryFlag> {
    let watches_sugar = user_profile.active_profiles.iter().any(|pt| {
        matches!(
            pt,
            ProfileType::Type2Diabetes | ProfileType::Pcos | ProfileType::Keto
        )
    });
    let watches_seed_oils = user_profile
        .active_profiles
        .contains(&ProfileType::AvoidSeedOils);
    let watches_fodmap = user_profile
        .active_profiles
        .contains(&ProfileType::IbsLowFodmap);
    let watches_gluten = user_profile.active_profiles.contains(&ProfileType::Celiac);

    let mut flags = Vec::new();

    for ingredient in ingredients {
        let normalized = parser::normalize(ingredient);

        if watches_sugar {
            push_first_match(&mut flags, ingredient, &normalized, RiskType::HiddenSugar, SUGAR_ALIASES);
        }
        if watches_seed_oils {
            push_first_match(&mut flags, ingredient, &normalized, RiskType::SeedOil, SEED_OILS);
        }
        if watches_fodmap {
            push_first_match(&mut flags, ingredient, &normalized, RiskType::HighFodmap, HIGH_FODMAP);
        }
        if watches_gluten {
            push_first_match(&mut flags, ingredient, &normalized, RiskType::ContainsGluten, GLUTEN_SOURCES);
        }
    }

    flags
}

fn push_first_match(
    flags: &mut Vec<PreliminaryFlag>,
    ingredient: &str,
    normalized: &str,
    risk_type: RiskType,
    keywords: &[&str],
) {
    if let Some(keyword) = keywords.iter().find(|k| normalized.contains(*k)) {
        flags.push(PreliminaryFlag {
            ingredient: ingredient.to_string(),
            risk_type,
            matched_keyword: (*keyword).to_string(),
        });
    }
}
