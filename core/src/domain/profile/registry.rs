//! Static catalog of supported health profiles.
//!
//! Built once on first access and shared read-only by every request. Matching
//! against `avoid_keywords` is substring containment on the normalized
//! ingredient: recall is preferred over precision, since missing a trigger
//! ingredient is the costlier failure for a health-safety tool.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::entities::{HealthProfile, ProfileType, SeverityLevel};

static REGISTRY: LazyLock<HashMap<ProfileType, HealthProfile>> = LazyLock::new(|| {
    ProfileType::ALL
        .into_iter()
        .map(|pt| (pt, build_profile(pt)))
        .collect()
});

/// Total lookup over the closed profile set.
pub fn lookup(profile_type: ProfileType) -> &'static HealthProfile {
    // Total by construction: REGISTRY is seeded from ProfileType::ALL.
    &REGISTRY[&profile_type]
}

/// Display name → profile type, for selection UIs.
pub fn available_profiles() -> HashMap<&'static str, ProfileType> {
    REGISTRY
        .iter()
        .map(|(&pt, profile)| (profile.display_name.as_str(), pt))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn build_profile(profile_type: ProfileType) -> HealthProfile {
    match profile_type {
        ProfileType::Type2Diabetes => HealthProfile {
            profile_type,
            display_name: "Type 2 Diabetes".to_string(),
            description: "Blood sugar management focus".to_string(),
            primary_concerns: strings(&[
                "hidden sugars",
                "high glycemic ingredients",
                "refined carbohydrates",
                "sugar alcohols (in excess)",
                "fruit juice concentrates",
            ]),
            avoid_keywords: strings(&[
                "sugar",
                "syrup",
                "dextrose",
                "maltodextrin",
                "fructose",
                "corn syrup",
                "honey",
                "agave",
                "molasses",
                "sucrose",
                "glucose",
                "cane juice",
                "rice syrup",
                "malt",
            ]),
            clinical_context: concat!(
                "Patient has Type 2 Diabetes requiring careful blood glucose management. ",
                "Hidden sugars and high-glycemic ingredients can cause dangerous blood sugar spikes. ",
                "Even \"natural\" sugars like honey or agave are problematic. ",
                "Watch for sugar alcohols which may still affect blood sugar. ",
                "Maltodextrin has a higher glycemic index than table sugar."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::Pcos => HealthProfile {
            profile_type,
            display_name: "PCOS (Polycystic Ovary Syndrome)".to_string(),
            description: "Insulin resistance and hormonal balance focus".to_string(),
            primary_concerns: strings(&[
                "insulin-spiking ingredients",
                "inflammatory oils",
                "excess dairy",
                "refined carbohydrates",
                "endocrine disruptors",
            ]),
            avoid_keywords: strings(&[
                "sugar",
                "high fructose corn syrup",
                "refined flour",
                "soybean oil",
                "vegetable oil",
                "dairy",
                "whey",
            ]),
            clinical_context: concat!(
                "Patient has PCOS with associated insulin resistance and hormonal imbalance. ",
                "Blood sugar spikes worsen insulin resistance and hormonal symptoms. ",
                "Inflammatory seed oils may exacerbate inflammation. ",
                "Some evidence suggests dairy can affect hormonal balance in PCOS. ",
                "Focus on low-glycemic, anti-inflammatory ingredients."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::Hypertension => HealthProfile {
            profile_type,
            display_name: "Hypertension (High Blood Pressure)".to_string(),
            description: "Sodium and cardiovascular health focus".to_string(),
            primary_concerns: strings(&[
                "high sodium content",
                "hidden salts",
                "MSG",
                "processed ingredients",
                "saturated fats",
            ]),
            avoid_keywords: strings(&[
                "sodium",
                "salt",
                "msg",
                "monosodium glutamate",
                "sodium nitrate",
                "sodium phosphate",
                "soy sauce",
                "brine",
                "bouillon",
                "hydrolyzed",
            ]),
            clinical_context: concat!(
                "Patient has hypertension requiring strict sodium limitation. ",
                "Hidden sodium in processed foods is a major concern. ",
                "MSG and sodium phosphates add significant sodium load. ",
                "Even \"low sodium\" products may contain too much for strict diets. ",
                "Watch for sodium in unexpected places like baked goods and cereals."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::IbsLowFodmap => HealthProfile {
            profile_type,
            display_name: "IBS (Low-FODMAP Diet)".to_string(),
            description: "Digestive health and FODMAP restriction focus".to_string(),
            primary_concerns: strings(&[
                "high-FODMAP ingredients",
                "fermentable sugars",
                "lactose",
                "fructose in excess of glucose",
                "sugar alcohols",
                "garlic",
                "onion",
                "wheat",
            ]),
            avoid_keywords: strings(&[
                "onion",
                "garlic",
                "wheat",
                "lactose",
                "inulin",
                "chicory",
                "fructose",
                "honey",
                "agave",
                "apple",
                "pear",
                "mango",
                "sorbitol",
                "mannitol",
                "xylitol",
                "maltitol",
                "isomalt",
                "fructooligosaccharides",
                "galactooligosaccharides",
            ]),
            clinical_context: concat!(
                "Patient follows low-FODMAP diet for IBS symptom management. ",
                "FODMAPs (Fermentable Oligo-, Di-, Mono-saccharides And Polyols) trigger symptoms. ",
                "Even small amounts of garlic or onion powder can cause flare-ups. ",
                "Inulin and chicory root are HIGH FODMAP despite being marketed as fiber. ",
                "\"Natural flavors\" often contain hidden garlic or onion."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::Celiac => HealthProfile {
            profile_type,
            display_name: "Celiac Disease (Gluten-Free)".to_string(),
            description: "Strict gluten avoidance required".to_string(),
            primary_concerns: strings(&[
                "gluten-containing grains",
                "cross-contamination risks",
                "hidden gluten in additives",
                "malt-based ingredients",
            ]),
            avoid_keywords: strings(&[
                "wheat",
                "barley",
                "rye",
                "malt",
                "brewer's yeast",
                "triticale",
                "spelt",
                "kamut",
                "semolina",
                "durum",
                "farina",
                "bulgur",
                "couscous",
                "seitan",
                "fu",
            ]),
            clinical_context: concat!(
                "Patient has Celiac Disease - even trace gluten causes intestinal damage. ",
                "Cross-contamination is a serious concern with \"may contain\" warnings. ",
                "Malt flavoring, malt vinegar, and brewer's yeast contain gluten. ",
                "\"Modified food starch\" may be wheat-derived unless specified. ",
                "Oats must be certified gluten-free due to contamination risk."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::NutAllergy => HealthProfile {
            profile_type,
            display_name: "Nut Allergy".to_string(),
            description: "Tree nut and peanut avoidance (potentially life-threatening)"
                .to_string(),
            primary_concerns: strings(&[
                "tree nuts",
                "peanuts",
                "cross-contamination",
                "nut oils",
                "nut-derived ingredients",
            ]),
            avoid_keywords: strings(&[
                "peanut",
                "almond",
                "cashew",
                "walnut",
                "pecan",
                "pistachio",
                "hazelnut",
                "macadamia",
                "brazil nut",
                "pine nut",
                "chestnut",
                "praline",
                "marzipan",
                "nougat",
                "nut oil",
                "arachis",
            ]),
            clinical_context: concat!(
                "Patient has nut allergy - potential anaphylaxis risk. ",
                "This is a SAFETY-CRITICAL profile with zero tolerance. ",
                "Cross-contamination warnings (\"may contain\", \"processed in facility\") are serious. ",
                "\"Arachis oil\" is peanut oil. Some refined nut oils may be tolerated but err on caution. ",
                "Natural flavors and hydrolyzed proteins may contain nut derivatives."
            )
            .to_string(),
            severity_level: SeverityLevel::High,
        },

        ProfileType::KidneyDisease => HealthProfile {
            profile_type,
            display_name: "Kidney Disease (Renal Diet)".to_string(),
            description: "Protein, potassium, phosphorus, and sodium management".to_string(),
            primary_concerns: strings(&[
                "high protein content",
                "phosphate additives",
                "high potassium ingredients",
                "sodium",
            ]),
            avoid_keywords: strings(&[
                "phosphate",
                "phosphoric acid",
                "potassium chloride",
                "protein isolate",
                "protein concentrate",
                "sodium",
            ]),
            clinical_context: concat!(
                "Patient has kidney disease requiring careful management of protein ",
                "(excess burdens kidneys), phosphorus (phosphate additives are highly ",
                "bioavailable and harmful), potassium (can accumulate to dangerous levels), ",
                "and sodium (fluid retention and blood pressure). ",
                "Phosphate additives (sodium phosphate, calcium phosphate) are especially problematic."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::Keto => HealthProfile {
            profile_type,
            display_name: "Ketogenic Diet".to_string(),
            description: "Very low carbohydrate, high fat diet".to_string(),
            primary_concerns: strings(&[
                "hidden carbohydrates",
                "sugars",
                "starches",
                "maltodextrin",
                "high-carb thickeners",
            ]),
            avoid_keywords: strings(&[
                "sugar",
                "starch",
                "flour",
                "corn",
                "rice",
                "potato",
                "maltodextrin",
                "dextrin",
                "syrup",
                "honey",
                "molasses",
            ]),
            clinical_context: concat!(
                "Patient follows ketogenic diet requiring <20-50g net carbs per day. ",
                "Hidden carbs can kick them out of ketosis. ",
                "Maltodextrin is essentially sugar despite low \"sugar\" labeling. ",
                "Some sugar alcohols (maltitol) still significantly impact blood sugar. ",
                "\"Keto-friendly\" marketing doesn't guarantee actual keto compatibility."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::AvoidSeedOils => HealthProfile {
            profile_type,
            display_name: "Avoid Seed Oils".to_string(),
            description: "Avoiding industrial seed/vegetable oils".to_string(),
            primary_concerns: strings(&[
                "industrial seed oils",
                "vegetable oils",
                "high omega-6 oils",
                "refined oils",
            ]),
            avoid_keywords: strings(&[
                "soybean oil",
                "canola oil",
                "sunflower oil",
                "safflower oil",
                "corn oil",
                "cottonseed oil",
                "grapeseed oil",
                "rice bran oil",
                "vegetable oil",
                "margarine",
                "shortening",
            ]),
            clinical_context: concat!(
                "Patient avoids industrial seed oils due to concerns about the high ",
                "omega-6 to omega-3 ratio (potentially inflammatory), oxidation during ",
                "processing and cooking, and potential metabolic effects. ",
                "Preferred alternatives: olive oil, coconut oil, butter, avocado oil, tallow. ",
                "\"Vegetable oil\" is typically soybean or canola blend."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::ThyroidHypothyroid => HealthProfile {
            profile_type,
            display_name: "Thyroid (Hypothyroidism)".to_string(),
            description: "Thyroid function and metabolism support".to_string(),
            primary_concerns: strings(&[
                "goitrogens",
                "soy products",
                "excessive iodine",
                "gluten (for Hashimoto's)",
                "processed foods",
                "refined sugars",
            ]),
            avoid_keywords: strings(&[
                "soy",
                "soya",
                "soybean",
                "tofu",
                "edamame",
                "soy protein",
                "soy lecithin",
                "cabbage",
                "broccoli",
                "cauliflower",
                "kale",
                "millet",
                "pearl millet",
                "bajra",
                "ragi",
            ]),
            clinical_context: concat!(
                "Patient has hypothyroidism requiring careful dietary management. ",
                "Goitrogens (found in raw cruciferous vegetables, soy, millets) can interfere ",
                "with thyroid function. ",
                "Soy products may interfere with thyroid hormone absorption. ",
                "For Hashimoto's thyroiditis, gluten may trigger autoimmune response. ",
                "Processed foods and refined sugars can slow metabolism further. ",
                "Cooking reduces goitrogenic activity in vegetables. ",
                "Millets like bajra and ragi are commonly consumed in India but contain goitrogens."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::HeartDisease => HealthProfile {
            profile_type,
            display_name: "Heart Disease (Cardiovascular)".to_string(),
            description: "Heart health and cholesterol management".to_string(),
            primary_concerns: strings(&[
                "trans fats",
                "saturated fats",
                "high sodium",
                "cholesterol",
                "refined sugars",
                "processed meats",
            ]),
            avoid_keywords: strings(&[
                "hydrogenated",
                "partially hydrogenated",
                "trans fat",
                "vanaspati",
                "dalda",
                "margarine",
                "shortening",
                "palm oil",
                "coconut oil",
                "ghee",
                "butter",
                "cream",
                "lard",
                "sodium",
                "salt",
                "bacon",
                "sausage",
                "salami",
                "processed meat",
            ]),
            clinical_context: concat!(
                "Patient has cardiovascular disease or high cholesterol. ",
                "Trans fats (vanaspati/dalda common in Indian cooking) are extremely harmful. ",
                "Saturated fats should be limited for heart health. ",
                "High sodium increases blood pressure and cardiac strain. ",
                "Processed meats contain sodium, nitrates, and saturated fats. ",
                "In Indian context, watch for: vanaspati, excessive ghee, fried snacks (namkeen). ",
                "Refined sugars contribute to inflammation and metabolic issues."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::LactoseIntolerance => HealthProfile {
            profile_type,
            display_name: "Lactose Intolerance".to_string(),
            description: "Dairy and lactose avoidance".to_string(),
            primary_concerns: strings(&[
                "milk products",
                "hidden dairy",
                "lactose",
                "whey",
                "casein",
                "milk solids",
            ]),
            avoid_keywords: strings(&[
                "milk",
                "lactose",
                "whey",
                "casein",
                "curd",
                "dahi",
                "paneer",
                "cheese",
                "cream",
                "butter",
                "ghee",
                "khoya",
                "mawa",
                "milk powder",
                "skim milk",
                "buttermilk",
                "lassi",
                "chaas",
                "yogurt",
                "ice cream",
                "kulfi",
                "rabri",
                "condensed milk",
            ]),
            clinical_context: concat!(
                "Patient has lactose intolerance - cannot digest lactose in dairy. ",
                "Very common in India (60-70% of adult population). ",
                "Indian dairy products to watch: paneer, dahi/curd, khoya/mawa, lassi, chaas. ",
                "Ghee and butter have minimal lactose and may be tolerated. ",
                "Whey and casein in protein supplements and processed foods cause issues. ",
                "\"Milk solids\" and \"non-fat milk solids\" contain lactose. ",
                "Many Indian sweets (mithai) contain khoya, condensed milk, or milk powder."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::GoutHighUricAcid => HealthProfile {
            profile_type,
            display_name: "Gout / High Uric Acid".to_string(),
            description: "Purine restriction for uric acid management".to_string(),
            primary_concerns: strings(&[
                "high-purine foods",
                "organ meats",
                "seafood",
                "alcohol",
                "fructose",
                "yeast",
            ]),
            avoid_keywords: strings(&[
                "liver",
                "kidney",
                "brain",
                "organ meat",
                "offal",
                "sardine",
                "anchovy",
                "mackerel",
                "herring",
                "shellfish",
                "prawn",
                "shrimp",
                "crab",
                "lobster",
                "mussel",
                "yeast",
                "brewer's yeast",
                "beer",
                "wine",
                "alcohol",
                "high fructose corn syrup",
                "fructose",
            ]),
            clinical_context: concat!(
                "Patient has gout or hyperuricemia (high uric acid levels). ",
                "High-purine foods break down to uric acid, causing painful flare-ups. ",
                "Organ meats (common in Indian cuisine: liver, kidney, brain) are highest in purines. ",
                "Seafood, especially shellfish and certain fish, are high in purines. ",
                "Alcohol (especially beer) significantly raises uric acid levels. ",
                "Fructose increases uric acid production. ",
                "Moderate protein from plant sources and low-fat dairy are safer. ",
                "Stay hydrated to help flush uric acid."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::FattyLiver => HealthProfile {
            profile_type,
            display_name: "Fatty Liver (NAFLD)".to_string(),
            description: "Liver health and fat reduction focus".to_string(),
            primary_concerns: strings(&[
                "added sugars",
                "fructose",
                "refined carbohydrates",
                "saturated fats",
                "alcohol",
                "processed foods",
            ]),
            avoid_keywords: strings(&[
                "sugar",
                "fructose",
                "high fructose corn syrup",
                "corn syrup",
                "glucose syrup",
                "refined flour",
                "maida",
                "white bread",
                "alcohol",
                "beer",
                "wine",
                "spirits",
                "fried",
                "trans fat",
                "hydrogenated",
                "vanaspati",
            ]),
            clinical_context: concat!(
                "Patient has Non-Alcoholic Fatty Liver Disease (NAFLD). ",
                "Very common in urban India due to sedentary lifestyle and diet changes. ",
                "Fructose is directly metabolized by liver and promotes fat accumulation. ",
                "Refined carbohydrates (maida/refined flour) spike insulin and promote liver fat. ",
                "Alcohol must be completely avoided as it directly damages liver. ",
                "Fried foods and trans fats worsen liver inflammation. ",
                "In Indian context: avoid sweets, mithai, packaged snacks, maida-based foods. ",
                "Focus on whole grains, vegetables, and lean proteins."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },

        ProfileType::GastritisGerd => HealthProfile {
            profile_type,
            display_name: "Gastritis / Acid Reflux (GERD)".to_string(),
            description: "Stomach acid and digestive comfort management".to_string(),
            primary_concerns: strings(&[
                "acidic foods",
                "spicy foods",
                "caffeine",
                "fatty foods",
                "citrus",
                "trigger foods",
            ]),
            avoid_keywords: strings(&[
                "chili",
                "chilli",
                "pepper",
                "spice",
                "masala",
                "hot sauce",
                "tomato",
                "citrus",
                "lemon",
                "orange",
                "lime",
                "vinegar",
                "coffee",
                "caffeine",
                "chocolate",
                "cocoa",
                "mint",
                "peppermint",
                "garlic",
                "onion",
                "fried",
                "carbonated",
                "soda",
                "alcohol",
            ]),
            clinical_context: concat!(
                "Patient has gastritis or GERD (acid reflux). ",
                "Extremely common in India due to spicy food culture. ",
                "Spicy foods (chili, masala) directly irritate stomach lining. ",
                "Acidic foods (tomatoes, citrus, vinegar) worsen acid reflux. ",
                "Caffeine relaxes lower esophageal sphincter, allowing acid reflux. ",
                "Fatty and fried foods delay stomach emptying, increasing reflux. ",
                "Onion and garlic are common triggers (problematic in Indian cooking). ",
                "Mint/peppermint relaxes LES and worsens reflux despite feeling soothing. ",
                "Carbonated drinks increase stomach pressure. ",
                "Eating smaller meals and avoiding late-night eating helps."
            )
            .to_string(),
            severity_level: SeverityLevel::Moderate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_over_the_profile_set() {
        for pt in ProfileType::ALL {
            let profile = lookup(pt);
            assert_eq!(profile.profile_type, pt);
            assert!(!profile.display_name.is_empty());
            assert!(!profile.avoid_keywords.is_empty());
        }
    }

    #[test]
    fn avoid_keywords_are_lowercase() {
        for pt in ProfileType::ALL {
            for keyword in &lookup(pt).avoid_keywords {
                assert_eq!(keyword, &keyword.to_lowercase(), "keyword in {pt}");
            }
        }
    }

    #[test]
    fn available_profiles_maps_every_display_name() {
        let available = available_profiles();
        assert_eq!(available.len(), ProfileType::ALL.len());
        assert_eq!(available["Type 2 Diabetes"], ProfileType::Type2Diabetes);
        assert_eq!(available["Nut Allergy"], ProfileType::NutAllergy);
    }

    #[test]
    fn nut_allergy_is_the_only_high_severity_profile() {
        let high: Vec<_> = ProfileType::ALL
            .into_iter()
            .filter(|&pt| lookup(pt).severity_level == SeverityLevel::High)
            .collect();
        assert_eq!(high, vec![ProfileType::NutAllergy]);
    }
}
