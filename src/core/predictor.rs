use thiserror::Error;

use crate::core::encoder::{self, EncodeError, ValidationError};
use crate::core::heuristic;
use crate::models::{FreelancerProfile, PredictRequest, PredictionSource, Tier};
use crate::services::{InferenceError, InferenceModel};

/// Result of a prediction
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Satisfaction percentage, clamped to [0, 100], full precision.
    pub percentage: f64,
    pub tier: Tier,
    pub source: PredictionSource,
    /// The validated profile the prediction was computed from.
    pub profile: FreelancerProfile,
}

impl Prediction {
    pub fn estimated_via_fallback(&self) -> bool {
        self.source == PredictionSource::Heuristic
    }

    /// Percentage rounded to one decimal, as rendered to clients.
    pub fn rounded_percentage(&self) -> f64 {
        (self.percentage * 10.0).round() / 10.0
    }
}

/// Why the model path was abandoned for a request. Never surfaced to the
/// caller; logged and replaced by the heuristic estimate.
#[derive(Debug, Error)]
enum ModelPathError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Prediction orchestrator
///
/// # Pipeline stages
/// 1. Completeness validation (the only hard failure)
/// 2. Feature encoding against the model's schema
/// 3. Inference
/// 4. Clamp to [0, 100] and tier classification
///
/// Encoding or inference failure switches the request to the heuristic
/// estimate rather than failing it: the fallback is designed degraded
/// service, not an error path. The pipeline is stateless, so identical
/// inputs against an unchanged model always produce identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Predictor;

impl Predictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(
        &self,
        request: &PredictRequest,
        model: &dyn InferenceModel,
    ) -> Result<Prediction, ValidationError> {
        // Stage 1: an incomplete profile never reaches the model.
        let profile = encoder::validate(request)?;

        let (percentage, source) = match self.model_percentage(&profile, model) {
            Ok(raw) => {
                // Unconstrained regression can overshoot the percentage
                // scale; clip, don't reject.
                (raw.clamp(0.0, 100.0), PredictionSource::Model)
            }
            Err(reason) => {
                tracing::warn!("Inference unavailable, using heuristic estimate: {}", reason);
                (heuristic::fallback_estimate(&profile), PredictionSource::Heuristic)
            }
        };

        let tier = Tier::from_percentage(percentage);

        Ok(Prediction {
            percentage,
            tier,
            source,
            profile,
        })
    }

    /// Stages 2 and 3: encode against the model schema and run inference.
    fn model_percentage(
        &self,
        profile: &FreelancerProfile,
        model: &dyn InferenceModel,
    ) -> Result<f64, ModelPathError> {
        let vector = encoder::encode_profile(profile, model.schema())?;
        let raw = model.infer(vector.values())?;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Gender, Language, Skill};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Model stub returning a fixed raw output.
    struct CannedModel {
        output: f64,
        calls: AtomicUsize,
    }

    impl CannedModel {
        fn new(output: f64) -> Self {
            Self {
                output,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl InferenceModel for CannedModel {
        fn infer(&self, _features: &[f64]) -> Result<f64, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.output)
        }

        fn schema(&self) -> Option<&[String]> {
            None
        }
    }

    /// Model stub whose inference always fails.
    struct BrokenModel;

    impl InferenceModel for BrokenModel {
        fn infer(&self, features: &[f64]) -> Result<f64, InferenceError> {
            Err(InferenceError::ShapeMismatch {
                expected: 99,
                got: features.len(),
            })
        }

        fn schema(&self) -> Option<&[String]> {
            None
        }
    }

    fn complete_request() -> PredictRequest {
        PredictRequest {
            age: Some(35),
            gender: Some(Gender::Male),
            country: Some(Country::Canada),
            primary_language: Some(Language::French),
            primary_skill: Some(Skill::ContentWriting),
            years_experience: Some(10),
            hourly_rate: Some(50),
            client_rating: 5.0,
            is_active: Some(true),
        }
    }

    #[test]
    fn test_model_output_clamped_high() {
        let model = CannedModel::new(150.0);
        let prediction = Predictor::new().predict(&complete_request(), &model).unwrap();

        assert_eq!(prediction.percentage, 100.0);
        assert_eq!(prediction.source, PredictionSource::Model);
        assert_eq!(prediction.tier, Tier::Excellent);
    }

    #[test]
    fn test_model_output_clamped_low() {
        let model = CannedModel::new(-20.0);
        let prediction = Predictor::new().predict(&complete_request(), &model).unwrap();

        assert_eq!(prediction.percentage, 0.0);
        assert_eq!(prediction.tier, Tier::Average);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let model = CannedModel::new(72.345);
        let prediction = Predictor::new().predict(&complete_request(), &model).unwrap();

        let rounded = prediction.rounded_percentage();
        assert!(rounded == 72.3 || rounded == 72.4);
    }

    #[test]
    fn test_validation_failure_never_calls_model() {
        let model = CannedModel::new(50.0);
        let request = PredictRequest::default();

        let err = Predictor::new().predict(&request, &model).unwrap_err();

        assert_eq!(err.missing_fields.len(), 8);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_broken_model_falls_back_to_heuristic() {
        // 65 + 5*8 + 10*0.5 - 50*0.1 + 5 = 110 -> clamped to 100
        let prediction = Predictor::new()
            .predict(&complete_request(), &BrokenModel)
            .unwrap();

        assert_eq!(prediction.percentage, 100.0);
        assert_eq!(prediction.source, PredictionSource::Heuristic);
        assert!(prediction.estimated_via_fallback());
        assert_eq!(prediction.tier, Tier::Excellent);
    }

    #[test]
    fn test_prediction_is_idempotent() {
        let model = CannedModel::new(73.2);
        let predictor = Predictor::new();
        let request = complete_request();

        let first = predictor.predict(&request, &model).unwrap();
        let second = predictor.predict(&request, &model).unwrap();

        assert_eq!(first.percentage, second.percentage);
        assert_eq!(first.tier, second.tier);
        assert_eq!(first.source, second.source);
        assert_eq!(first.profile, second.profile);
    }

    #[test]
    fn test_echoed_profile_matches_input() {
        let model = CannedModel::new(70.0);
        let prediction = Predictor::new().predict(&complete_request(), &model).unwrap();

        assert_eq!(prediction.profile.age, 35);
        assert_eq!(prediction.profile.country, Country::Canada);
        assert_eq!(prediction.profile.client_rating, 5.0);
    }
}
