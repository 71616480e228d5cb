use serde::{Deserialize, Serialize};

use crate::models::domain::{FreelancerProfile, Tier};

/// Response for the predict endpoint
///
/// `percentage` is pre-rounded to one decimal; `profile` echoes the validated
/// input so clients can render a summary of what was scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub percentage: f64,
    pub tier: Tier,
    #[serde(rename = "estimatedViaFallback")]
    pub estimated_via_fallback: bool,
    pub profile: FreelancerProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "modelLoaded")]
    pub model_loaded: bool,
    #[serde(rename = "modelFeatures")]
    pub model_features: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Model metadata response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    #[serde(rename = "featureCount")]
    pub feature_count: usize,
    #[serde(rename = "featureNames")]
    pub feature_names: Vec<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
