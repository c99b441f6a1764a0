use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// The closed set of health conditions the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProfileType {
    #[serde(rename = "type_2_diabetes")]
    Type2Diabetes,
    #[serde(rename = "pcos")]
    Pcos,
    #[serde(rename = "hypertension")]
    Hypertension,
    #[serde(rename = "ibs_low_fodmap")]
    IbsLowFodmap,
    #[serde(rename = "celiac")]
    Celiac,
    #[serde(rename = "nut_allergy")]
    NutAllergy,
    #[serde(rename = "kidney_disease")]
    KidneyDisease,
    #[serde(rename = "keto")]
    Keto,
    #[serde(rename = "avoid_seed_oils")]
    AvoidSeedOils,
    #[serde(rename = "thyroid_hypothyroid")]
    ThyroidHypothyroid,
    #[serde(rename = "heart_disease")]
    HeartDisease,
    #[serde(rename = "lactose_intolerance")]
    LactoseIntolerance,
    #[serde(rename = "gout_high_uric_acid")]
    GoutHighUricAcid,
    #[serde(rename = "fatty_liver")]
    FattyLiver,
    #[serde(rename = "gastritis_gerd")]
    GastritisGerd,
}

impl ProfileType {
    pub const ALL: [ProfileType; 15] = [
        ProfileType::Type2Diabetes,
        ProfileType::Pcos,
        ProfileType::Hypertension,
        ProfileType::IbsLowFodmap,
        ProfileType::Celiac,
        ProfileType::NutAllergy,
        ProfileType::KidneyDisease,
        ProfileType::Keto,
        ProfileType::AvoidSeedOils,
        ProfileType::ThyroidHypothyroid,
        ProfileType::HeartDisease,
        ProfileType::LactoseIntolerance,
        ProfileType::GoutHighUricAcid,
        ProfileType::FattyLiver,
        ProfileType::GastritisGerd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileType::Type2Diabetes => "type_2_diabetes",
            ProfileType::Pcos => "pcos",
            ProfileType::Hypertension => "hypertension",
            ProfileType::IbsLowFodmap => "ibs_low_fodmap",
            ProfileType::Celiac => "celiac",
            ProfileType::NutAllergy => "nut_allergy",
            ProfileType::KidneyDisease => "kidney_disease",
            ProfileType::Keto => "keto",
            ProfileType::AvoidSeedOils => "avoid_seed_oils",
            ProfileType::ThyroidHypothyroid => "thyroid_hypothyroid",
            ProfileType::HeartDisease => "heart_disease",
            ProfileType::LactoseIntolerance => "lactose_intolerance",
            ProfileType::GoutHighUricAcid => "gout_high_uric_acid",
            ProfileType::FattyLiver => "fatty_liver",
            ProfileType::GastritisGerd => "gastritis_gerd",
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileType::ALL
            .into_iter()
            .find(|pt| pt.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown profile type: {s}")))
    }
}

/// How strictly a profile's restrictions must be enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
}

/// A health condition together with its dietary rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthProfile {
    pub profile_type: ProfileType,
    pub display_name: String,
    pub description: String,
    pub primary_concerns: Vec<String>,
    pub avoid_keywords: Vec<String>,
    pub clinical_context: String,
    pub severity_level: SeverityLevel,
}
