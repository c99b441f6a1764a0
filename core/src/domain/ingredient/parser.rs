//! Label text segmentation.
//!
//! `parse` is total and deterministic: any input, however malformed, yields a
//! (possibly empty) list of ingredient tokens without failing.

use std::sync::LazyLock;

use regex::Regex;

use super::helpers::clean_ingredient_text;

static LABEL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:ingredients?|contains?)\s*:\s*").expect("valid prefix pattern")
});

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical pattern"));

/// Split a raw label string into individual ingredient tokens.
///
/// Strips one recognized `Ingredients:`/`Contains:` prefix and cleans up
/// stray OCR artifacts, then splits on commas and semicolons at parenthesis
/// depth zero, so nested sub-ingredient lists like `Flour (Wheat, Niacin)`
/// stay attached to their parent token. Tokens keep their original casing;
/// normalization is a separate step.
pub fn parse(raw_ingredients: &str) -> Vec<String> {
    let text = raw_ingredients.trim();
    if text.is_empty() {
        return Vec::new();
    }

    // Cleanup runs after prefix stripping: it drops the colon the prefix
    // pattern matches on.
    let text = LABEL_PREFIX.replace(text, "");
    let text = clean_ingredient_text(&text);

    let mut ingredients = Vec::new();
    let mut current = String::new();
    let mut paren_depth: u32 = 0;

    for ch in text.chars() {
        match ch {
            '(' => {
                paren_depth += 1;
                current.push(ch);
            }
            ')' => {
                // Clamp at zero so a stray ')' never blocks later splits.
                paren_depth = paren_depth.saturating_sub(1);
                current.push(ch);
            }
            ',' | ';' if paren_depth == 0 => {
                let segment = current.trim();
                if !segment.is_empty() {
                    ingredients.push(segment.to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    // A trailing unterminated segment still counts.
    let segment = current.trim();
    if !segment.is_empty() {
        ingredients.push(segment.to_string());
    }

    ingredients
}

/// Normalize an ingredient token for keyword matching.
///
/// Removes parenthetical content, lowercases, and collapses whitespace. The
/// original-cased token is kept for display; this form is for matching only.
pub fn normalize(ingredient: &str) -> String {
    let stripped = PARENTHETICAL.replace_all(ingredient, "");
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_ingredients() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }

    #[test]
    fn strips_label_prefix_case_insensitively() {
        assert_eq!(parse("Ingredients: A, B"), vec!["A", "B"]);
        assert_eq!(parse("INGREDIENTS: A, B"), vec!["A", "B"]);
        assert_eq!(parse("Contains: Milk; Soy"), vec!["Milk", "Soy"]);
    }

    #[test]
    fn commas_inside_parentheses_do_not_split() {
        assert_eq!(
            parse("Flour (Wheat, Niacin), Water"),
            vec!["Flour (Wheat, Niacin)", "Water"]
        );
        assert_eq!(
            parse("Oil (Palm (Fractionated), Soy), Salt"),
            vec!["Oil (Palm (Fractionated), Soy)", "Salt"]
        );
    }

    #[test]
    fn unbalanced_parentheses_never_block_splitting() {
        // A stray closing paren clamps to depth zero instead of going negative.
        assert_eq!(parse("Water), Sugar, Salt"), vec!["Water)", "Sugar", "Salt"]);
        // An unterminated group still emits the trailing segment.
        assert_eq!(parse("Flour (Wheat, Water"), vec!["Flour (Wheat, Water"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(parse("A,, ,B;"), vec!["A", "B"]);
    }

    #[test]
    fn parse_keeps_original_casing() {
        assert_eq!(parse("Wheat FLOUR, Cane Sugar"), vec!["Wheat FLOUR", "Cane Sugar"]);
    }

    #[test]
    fn parse_drops_ocr_artifacts() {
        assert_eq!(
            parse("Ingredients: Sugar*, Salt† (iodized)"),
            vec!["Sugar", "Salt (iodized)"]
        );
    }

    #[test]
    fn normalize_removes_parentheticals_and_case() {
        assert_eq!(normalize("Wheat  FLOUR (enriched)"), "wheat flour");
        assert_eq!(normalize("Sugar"), "sugar");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Flour (Wheat, Niacin)", "  CANE   Sugar ", "salt", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
