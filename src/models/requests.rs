use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Country, Gender, Language, Skill};

/// Request to predict client satisfaction for a freelancer.
///
/// Every field starts unset (the form starts blank); completeness is checked
/// separately by the encoder so the caller gets a full list of missing fields
/// rather than a deserialization error. `clientRating` carries a default of
/// 0.0 and is not part of the completeness check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = 18, max = 80))]
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    #[serde(alias = "primary_language", rename = "primaryLanguage")]
    pub primary_language: Option<Language>,
    #[serde(default)]
    #[serde(alias = "primary_skill", rename = "primarySkill")]
    pub primary_skill: Option<Skill>,
    #[validate(range(min = 0, max = 50))]
    #[serde(default)]
    #[serde(alias = "years_experience", rename = "yearsExperience")]
    pub years_experience: Option<u8>,
    #[validate(range(min = 10, max = 500))]
    #[serde(default)]
    #[serde(alias = "hourly_rate", rename = "hourlyRate")]
    pub hourly_rate: Option<u16>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    #[serde(alias = "client_rating", rename = "clientRating")]
    pub client_rating: f64,
    #[serde(default)]
    #[serde(alias = "is_active", rename = "isActive")]
    pub is_active: Option<bool>,
}
