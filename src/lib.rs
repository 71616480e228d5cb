//! CSAT Predict - Client satisfaction prediction service for freelancer profiles
//!
//! This library encodes a freelancer profile into the fixed feature vector a
//! pre-trained linear regression model expects, runs inference, and classifies
//! the clamped percentage into a satisfaction tier. When inference fails, a
//! deterministic heuristic estimate keeps the service available.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{encode, validate, Prediction, Predictor};
pub use crate::models::{
    Country, FeatureVector, FreelancerProfile, Gender, Language, PredictRequest, PredictResponse,
    PredictionSource, Skill, Tier,
};
pub use crate::services::{InferenceModel, LinearModel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let request = PredictRequest::default();
        assert!(validate(&request).is_err());
    }
}
