use thiserror::Error;

use crate::models::{
    Country, FeatureVector, FreelancerProfile, Gender, Language, PredictRequest, Skill,
};

/// Column names the regression model was trained on. The odd spelling of the
/// hourly rate column is the training data's; changing any of these silently
/// breaks alignment with the artifact.
pub const COL_AGE: &str = "age";
pub const COL_EXPERIENCE: &str = "years_of_experience";
pub const COL_HOURLY_RATE: &str = "hourly_rate (USD)";
pub const COL_RATING: &str = "rating";
pub const COL_IS_ACTIVE: &str = "is_active";
pub const COL_GENDER_FEMALE: &str = "gender_Female";

/// A prediction was requested before the form was complete.
#[derive(Debug, Clone, Error)]
#[error("incomplete profile, missing fields: {}", missing_fields.join(", "))]
pub struct ValidationError {
    pub missing_fields: Vec<String>,
}

/// Errors from feature-vector construction
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Check that every required field is set and produce the validated profile.
///
/// All missing fields are collected so the caller can report them in one go,
/// the way the form highlights everything at once. The client rating is not
/// required; it defaults to 0.0.
pub fn validate(request: &PredictRequest) -> Result<FreelancerProfile, ValidationError> {
    let mut missing = Vec::new();

    if request.age.is_none() {
        missing.push("age".to_string());
    }
    if request.gender.is_none() {
        missing.push("gender".to_string());
    }
    if request.country.is_none() {
        missing.push("country".to_string());
    }
    if request.primary_language.is_none() {
        missing.push("primaryLanguage".to_string());
    }
    if request.primary_skill.is_none() {
        missing.push("primarySkill".to_string());
    }
    if request.years_experience.is_none() {
        missing.push("yearsExperience".to_string());
    }
    if request.hourly_rate.is_none() {
        missing.push("hourlyRate".to_string());
    }
    if request.is_active.is_none() {
        missing.push("isActive".to_string());
    }

    if !missing.is_empty() {
        return Err(ValidationError {
            missing_fields: missing,
        });
    }

    // All None cases were rejected above.
    Ok(FreelancerProfile {
        age: request.age.unwrap_or_default(),
        gender: request.gender.unwrap_or(Gender::Male),
        country: request.country.unwrap_or(Country::REFERENCE),
        primary_language: request.primary_language.unwrap_or(Language::REFERENCE),
        primary_skill: request.primary_skill.unwrap_or(Skill::REFERENCE),
        years_experience: request.years_experience.unwrap_or_default(),
        hourly_rate: request.hourly_rate.unwrap_or_default(),
        client_rating: request.client_rating,
        is_active: request.is_active.unwrap_or_default(),
    })
}

/// Encode a raw request into a feature vector, validating completeness first.
///
/// When `schema` is supplied (the trained model's expected columns), the
/// constructed vector is reconciled against it: missing columns are
/// zero-filled, the result is reordered to the schema exactly, and columns the
/// model does not know are dropped.
pub fn encode(
    request: &PredictRequest,
    schema: Option<&[String]>,
) -> Result<FeatureVector, EncodeError> {
    let profile = validate(request)?;
    encode_profile(&profile, schema)
}

/// Encode an already-validated profile.
pub fn encode_profile(
    profile: &FreelancerProfile,
    schema: Option<&[String]>,
) -> Result<FeatureVector, EncodeError> {
    let capacity = 6 + Country::NON_REFERENCE.len()
        + Language::NON_REFERENCE.len()
        + Skill::NON_REFERENCE.len();
    let mut vector = FeatureVector::with_capacity(capacity);

    // Numeric features first, in training order.
    vector.push(COL_AGE, profile.age as f64);
    vector.push(COL_EXPERIENCE, profile.years_experience as f64);
    vector.push(COL_HOURLY_RATE, profile.hourly_rate as f64);
    vector.push(COL_RATING, profile.client_rating);
    vector.push(COL_IS_ACTIVE, if profile.is_active { 1.0 } else { 0.0 });

    // Dummy variables. Each categorical group contributes one indicator per
    // non-reference category; the reference (Male, USA, English,
    // Web Development) is the implicit baseline.
    vector.push(
        COL_GENDER_FEMALE,
        if profile.gender.is_female() { 1.0 } else { 0.0 },
    );

    for country in Country::NON_REFERENCE {
        let value = if profile.country == country { 1.0 } else { 0.0 };
        vector.push(country_column(country), value);
    }

    for language in Language::NON_REFERENCE {
        let value = if profile.primary_language == language {
            1.0
        } else {
            0.0
        };
        vector.push(language_column(language), value);
    }

    for skill in Skill::NON_REFERENCE {
        let value = if profile.primary_skill == skill { 1.0 } else { 0.0 };
        vector.push(skill_column(skill), value);
    }

    match schema {
        Some(schema) => align_to_schema(&vector, schema),
        None => Ok(vector),
    }
}

/// Dummy column name for a non-reference country.
pub fn country_column(country: Country) -> String {
    format!("country_{}", country.label())
}

/// Dummy column name for a non-reference language.
pub fn language_column(language: Language) -> String {
    format!("language_{}", language.label())
}

/// Dummy column name for a non-reference skill.
pub fn skill_column(skill: Skill) -> String {
    format!("primary_skill_{}", skill.label())
}

/// Reorder and select the constructed vector to match the model schema,
/// zero-filling columns the model expects but the encoder did not produce.
fn align_to_schema(vector: &FeatureVector, schema: &[String]) -> Result<FeatureVector, EncodeError> {
    if schema.is_empty() {
        return Err(EncodeError::SchemaMismatch(
            "model declares an empty feature schema".to_string(),
        ));
    }

    let mut aligned = FeatureVector::with_capacity(schema.len());
    for name in schema {
        aligned.push(name.clone(), vector.get(name).unwrap_or(0.0));
    }

    // Zero-filling makes alignment total; the guard is kept so a broken
    // artifact surfaces as a schema error rather than a short vector.
    if aligned.len() != schema.len() {
        return Err(EncodeError::SchemaMismatch(format!(
            "aligned vector has {} features, schema expects {}",
            aligned.len(),
            schema.len()
        )));
    }

    Ok(aligned)
}
