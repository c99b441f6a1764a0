//! Keyword rule tables for the deterministic pre-screen.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical risk tags shared by the screener and the semantic analyzer's
/// response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskType {
    HiddenSugar,
    Allergen,
    MetabolicConflict,
    HighSodium,
    HighFodmap,
    ContainsGluten,
    HighGlycemic,
    SeedOil,
    HighProtein,
    NotKetoFriendly,
    Uncertainty,
    DeceptiveMarketing,
}

impl RiskType {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskType::HiddenSugar => "hidden_sugar",
            RiskType::Allergen => "allergen",
            RiskType::MetabolicConflict => "metabolic_conflict",
            RiskType::HighSodium => "high_sodium",
            RiskType::HighFodmap => "high_fodmap",
            RiskType::ContainsGluten => "contains_gluten",
            RiskType::HighGlycemic => "high_glycemic",
            RiskType::SeedOil => "seed_oil",
            RiskType::HighProtein => "high_protein",
            RiskType::NotKetoFriendly => "not_keto_friendly",
            RiskType::Uncertainty => "uncertainty",
            RiskType::DeceptiveMarketing => "deceptive_marketing",
        }
    }
}

/// Known sugar aliases.
pub const SUGAR_ALIASES: &[&str] = &[
    "sucrose",
    "glucose",
    "fructose",
    "dextrose",
    "maltose",
    "lactose",
    "corn syrup",
    "high fructose corn syrup",
    "hfcs",
    "cane sugar",
    "cane juice",
    "evaporated cane juice",
    "brown rice syrup",
    "malt syrup",
    "barley malt",
    "maltodextrin",
    "dextrin",
    "treacle",
    "molasses",
    "agave",
    "agave nectar",
    "honey",
    "maple syrup",
    "coconut sugar",
    "date sugar",
    "turbinado",
    "muscovado",
    "demerara",
    "panela",
    "jaggery",
    "sucanat",
    "fruit juice concentrate",
    "grape juice concentrate",
];

/// Known industrial seed oils.
pub const SEED_OILS: &[&str] = &[
    "soybean oil",
    "canola oil",
    "rapeseed oil",
    "sunflower oil",
    "safflower oil",
    "corn oil",
    "cottonseed oil",
    "grapeseed oil",
    "rice bran oil",
    "vegetable oil",
];

/// Known high-FODMAP ingredients.
pub const HIGH_FODMAP: &[&str] = &[
    "onion",
    "garlic",
    "wheat",
    "rye",
    "barley",
    "inulin",
    "chicory",
    "fructooligosaccharides",
    "fos",
    "galactooligosaccharides",
    "gos",
    "honey",
    "agave",
    "high fructose corn syrup",
    "apple",
    "pear",
    "mango",
    "watermelon",
    "sorbitol",
    "mannitol",
    "xylitol",
    "maltitol",
    "isomalt",
    "lactitol",
    "mushroom",
    "cauliflower",
    "artichoke",
];

/// Known gluten sources.
pub const GLUTEN_SOURCES: &[&str] = &[
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
];
