//! Helpers for cleaning and classifying label text before analysis.

use std::sync::LazyLock;

use regex::Regex;

static UNWANTED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    // Keep ingredient-relevant punctuation only.
    Regex::new(r"[^\w\s\-\(\),;\.%/&]").expect("valid character class")
});

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("valid percentage pattern"));

static ALLERGEN_WARNING: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"may contain",
        r"produced in a facility",
        r"processed in",
        r"made on.*equipment",
        r"contains:?\s*(milk|wheat|soy|eggs?|nuts?|peanuts?)",
        r"allergen",
        r"warning",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid warning pattern"))
    .collect()
});

/// Clean raw label text coming from OCR or user input.
pub fn clean_ingredient_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = UNWANTED_CHARS.replace_all(text, "");
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract a percentage value from ingredient text, if present.
pub fn extract_percentage(text: &str) -> Option<f64> {
    PERCENTAGE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Whether a segment looks like an allergen warning rather than an ingredient.
pub fn is_likely_allergen_warning(text: &str) -> bool {
    let lower = text.to_lowercase();
    ALLERGEN_WARNING.iter().any(|re| re.is_match(&lower))
}

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "sweetener",
        &[
            "sugar", "syrup", "sweetener", "dextrose", "fructose", "sucrose", "honey", "agave",
            "stevia", "aspartame",
        ],
    ),
    (
        "oil",
        &["oil", "fat", "butter", "shortening", "margarine", "lard"],
    ),
    (
        "protein",
        &["protein", "whey", "casein", "collagen", "gelatin"],
    ),
    (
        "fiber",
        &["fiber", "cellulose", "inulin", "pectin", "psyllium"],
    ),
    (
        "preservative",
        &[
            "sorbate",
            "benzoate",
            "nitrate",
            "nitrite",
            "sulfite",
            "bht",
            "bha",
            "preservative",
        ],
    ),
    (
        "color",
        &[
            "color",
            "colour",
            "dye",
            "caramel color",
            "red 40",
            "yellow 5",
            "blue 1",
        ],
    ),
    (
        "flavor",
        &["flavor", "flavour", "vanilla", "spice", "extract"],
    ),
    (
        "emulsifier",
        &["lecithin", "mono and diglycerides", "polysorbate"],
    ),
    (
        "thickener",
        &["starch", "gum", "carrageenan", "xanthan", "guar"],
    ),
];

/// Coarse ingredient categorization for grouping and statistics.
pub fn categorize_ingredient(ingredient: &str) -> &'static str {
    let lower = ingredient.to_lowercase();
    for (category, keywords) in CATEGORIES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return category;
        }
    }
    "other"
}

/// Format a list of profile names for display, truncating past `max_display`.
pub fn format_profile_list(profiles: &[String], max_display: usize) -> String {
    if profiles.is_empty() {
        return "None selected".to_string();
    }

    if profiles.len() <= max_display {
        return profiles.join(", ");
    }

    let shown = profiles[..max_display].join(", ");
    format!("{} +{} more", shown, profiles.len() - max_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_junk_and_collapses_whitespace() {
        assert_eq!(
            clean_ingredient_text("Sugar*,   Salt†  (iodized)"),
            "Sugar, Salt (iodized)"
        );
        assert_eq!(clean_ingredient_text(""), "");
    }

    #[test]
    fn percentage_extraction() {
        assert_eq!(extract_percentage("Cocoa solids 70%"), Some(70.0));
        assert_eq!(extract_percentage("Tomato Paste (28.5 %)"), Some(28.5));
        assert_eq!(extract_percentage("Salt"), None);
    }

    #[test]
    fn allergen_warnings_are_recognized() {
        assert!(is_likely_allergen_warning("May contain traces of peanuts"));
        assert!(is_likely_allergen_warning("Produced in a facility that handles milk"));
        assert!(!is_likely_allergen_warning("Whole wheat flour"));
    }

    #[test]
    fn categorization_picks_first_matching_category() {
        assert_eq!(categorize_ingredient("Brown Rice Syrup"), "sweetener");
        assert_eq!(categorize_ingredient("Sunflower Oil"), "oil");
        assert_eq!(categorize_ingredient("Xanthan Gum"), "thickener");
        assert_eq!(categorize_ingredient("Water"), "other");
    }

    #[test]
    fn profile_list_formatting_truncates() {
        let profiles: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(format_profile_list(&profiles, 3), "A, B, C +2 more");
        assert_eq!(format_profile_list(&profiles[..2], 3), "A, B");
        assert_eq!(format_profile_list(&[], 3), "None selected");
    }
}
