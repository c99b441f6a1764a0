//! Prompt assembly for the Groq semantic analyzer.

use crate::domain::profile::value_objects::UserProfile;

const SAFETY_CRITICAL_NOTE: &str = "\
⚠️ SAFETY CRITICAL: This user has conditions where certain ingredients \
could cause severe allergic reactions or immediate health emergencies. \
Err on the side of extreme caution for these profiles.";

/// Build the profile-aware system prompt.
pub fn build_system_prompt(user_profile: &UserProfile) -> String {
    let profile_names = user_profile.display_names().join(", ");
    let combined_context = user_profile.combined_context();
    let severity_note = if user_profile.has_high_severity_profile() {
        SAFETY_CRITICAL_NOTE
    } else {
        ""
    };

    format!(
        "You are an expert clinical nutritionist and food scientist specializing in \
personalized dietary analysis for patients with the following conditions:\n\n\
**Active Health Profiles:** {profile_names}\n\n\
{combined_context}\n\n\
{severity_note}\n\n\
YOUR TASK:\n\
Analyze ingredient lists from food products and identify risks SPECIFIC to this patient's health profiles.\n\n\
CRITICAL INSTRUCTIONS:\n\
1. Focus ONLY on risks relevant to the specified health profiles\n\
2. Flag hidden ingredients that might not be obvious (e.g., \"natural flavors\" hiding garlic for IBS)\n\
3. Identify deceptive marketing terms (e.g., \"no added sugar\" but contains maltodextrin)\n\
4. Consider ingredient order (first ingredients are most prevalent)\n\
5. Handle uncertainty explicitly - if \"natural flavors\" or \"spices\" could contain problematic ingredients, flag with probability\n\
6. Provide smart swap suggestions that are SAFE for all active profiles\n\n\
IMPORTANT CONSTRAINTS:\n\
- Do NOT provide medical advice\n\
- Use evidence-based reasoning only\n\
- Explain risks in simple, grocery-aisle-friendly language\n\
- When uncertain, lean toward caution but acknowledge uncertainty\n\n\
OUTPUT FORMAT:\n\
You MUST respond with valid JSON only, no additional text or markdown code blocks."
    )
}

/// Build the per-request analysis prompt carrying the output contract.
pub fn build_analysis_prompt(ingredients: &str) -> String {
    format!(
        "Analyze the following ingredient list for this patient:\n\n\
INGREDIENTS:\n\
{ingredients}\n\n\
Respond with a JSON object in EXACTLY this format (no markdown, just raw JSON):\n\
{{\n\
    \"overall_verdict\": \"SAFE\" or \"CAUTION\" or \"AVOID\",\n\
    \"confidence_score\": 0.0 to 1.0,\n\
    \"risk_flags\": [\n\
        {{\n\
            \"ingredient\": \"exact ingredient name from list\",\n\
            \"risk_type\": \"hidden_sugar|allergen|metabolic_conflict|high_sodium|high_fodmap|contains_gluten|high_glycemic|seed_oil|high_protein|not_keto_friendly|uncertainty|deceptive_marketing\",\n\
            \"severity\": \"low|medium|high|critical\",\n\
            \"explanation\": \"Brief, clear explanation of why this is problematic for this patient\",\n\
            \"relevant_profiles\": [\"list of affected profile names\"]\n\
        }}\n\
    ],\n\
    \"deception_alerts\": [\n\
        {{\n\
            \"claim\": \"marketing claim or misleading term\",\n\
            \"reality\": \"what it actually means\",\n\
            \"concern_level\": \"low|medium|high\"\n\
        }}\n\
    ],\n\
    \"uncertainty_flags\": [\n\
        {{\n\
            \"ingredient\": \"ambiguous ingredient like 'natural flavors'\",\n\
            \"possible_concerns\": [\"list of possible hidden ingredients\"],\n\
            \"recommendation\": \"brief recommendation\"\n\
        }}\n\
    ],\n\
    \"safe_for_general_public\": true or false,\n\
    \"user_specific_warning\": true or false,\n\
    \"smart_swaps\": [\n\
        {{\n\
            \"avoid\": \"problematic ingredient or product type\",\n\
            \"try_instead\": \"safer alternative\",\n\
            \"reason\": \"why this swap works for this patient\"\n\
        }}\n\
    ],\n\
    \"summary\": \"2-3 sentence plain-English summary for the user\"\n\
}}\n\n\
Remember: Respond ONLY with the JSON object, no markdown formatting or code blocks."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::ProfileType;

    #[test]
    fn system_prompt_carries_profile_context() {
        let profile = UserProfile::new(vec![ProfileType::Celiac]);
        let prompt = build_system_prompt(&profile);
        assert!(prompt.contains("Celiac Disease (Gluten-Free)"));
        assert!(prompt.contains("valid JSON only"));
        assert!(!prompt.contains("SAFETY CRITICAL"));
    }

    #[test]
    fn high_severity_profiles_add_the_safety_note() {
        let profile = UserProfile::new(vec![ProfileType::NutAllergy]);
        assert!(build_system_prompt(&profile).contains("SAFETY CRITICAL"));
    }

    #[test]
    fn analysis_prompt_embeds_the_ingredients() {
        let prompt = build_analysis_prompt("Water, Sugar");
        assert!(prompt.contains("Water, Sugar"));
        assert!(prompt.contains("overall_verdict"));
    }
}
