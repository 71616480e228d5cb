use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no model artifact found, tried: {}", tried.join(", "))]
    NotFound { tried: Vec<String> },

    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed model artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("model has {coefficients} coefficients but {features} feature names")]
    DimensionMismatch {
        coefficients: usize,
        features: usize,
    },
}

/// Errors from a single inference call
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("feature vector has {got} values, model expects {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("model produced a non-finite output")]
    NonFinite,
}

/// An opaque regression capability: a numeric vector in, one scalar out.
///
/// The predictor only relies on this trait, so tests can substitute failing
/// or canned models and the artifact format can change without touching the
/// pipeline.
pub trait InferenceModel: Send + Sync {
    fn infer(&self, features: &[f64]) -> Result<f64, InferenceError>;

    /// The ordered feature names the model was trained on, when the artifact
    /// carries them.
    fn schema(&self) -> Option<&[String]>;
}

/// On-disk artifact layout (JSON)
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    intercept: f64,
    coefficients: Vec<f64>,
    feature_names: Vec<String>,
}

/// Trained linear regression model
///
/// Immutable after load; a single instance is shared across workers behind an
/// `Arc` and inference never mutates state.
#[derive(Debug, Clone)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
    feature_names: Vec<String>,
}

impl LinearModel {
    pub fn new(
        intercept: f64,
        coefficients: Vec<f64>,
        feature_names: Vec<String>,
    ) -> Result<Self, ModelError> {
        if coefficients.len() != feature_names.len() {
            return Err(ModelError::DimensionMismatch {
                coefficients: coefficients.len(),
                features: feature_names.len(),
            });
        }

        Ok(Self {
            intercept,
            coefficients,
            feature_names,
        })
    }

    /// Load the artifact from a specific path.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: ModelArtifact =
            serde_json::from_slice(&bytes).map_err(|source| ModelError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let model = Self::new(
            artifact.intercept,
            artifact.coefficients,
            artifact.feature_names,
        )?;

        tracing::debug!(
            "Loaded model artifact from {} ({} features)",
            path.display(),
            model.feature_count()
        );

        Ok(model)
    }

    /// Resolve the artifact against an ordered candidate list; the first
    /// existing file wins.
    pub fn load(candidates: &[PathBuf]) -> Result<(Self, PathBuf), ModelError> {
        for candidate in candidates {
            if candidate.exists() {
                let model = Self::from_file(candidate)?;
                return Ok((model, candidate.clone()));
            }
            tracing::debug!("No model artifact at {}", candidate.display());
        }

        Err(ModelError::NotFound {
            tried: candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        })
    }

    pub fn feature_count(&self) -> usize {
        self.coefficients.len()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

impl InferenceModel for LinearModel {
    fn infer(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.coefficients.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let output = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>();

        if !output.is_finite() {
            return Err(InferenceError::NonFinite);
        }

        Ok(output)
    }

    fn schema(&self) -> Option<&[String]> {
        Some(&self.feature_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_feature_model() -> LinearModel {
        LinearModel::new(
            10.0,
            vec![2.0, -1.0],
            vec!["a".to_string(), "b".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_infer_dot_product() {
        let model = two_feature_model();
        // 10 + 2*3 - 1*4 = 12
        let output = model.infer(&[3.0, 4.0]).unwrap();
        assert_eq!(output, 12.0);
    }

    #[test]
    fn test_infer_rejects_wrong_shape() {
        let model = two_feature_model();
        let err = model.infer(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::ShapeMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_infer_rejects_non_finite() {
        let model = two_feature_model();
        let err = model.infer(&[f64::INFINITY, 0.0]).unwrap_err();
        assert!(matches!(err, InferenceError::NonFinite));
    }

    #[test]
    fn test_new_rejects_dimension_mismatch() {
        let err = LinearModel::new(0.0, vec![1.0], vec![]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                coefficients: 1,
                features: 0
            }
        ));
    }

    #[test]
    fn test_schema_exposes_feature_names() {
        let model = two_feature_model();
        assert_eq!(model.schema().map(|s| s.len()), Some(2));
        assert_eq!(model.schema().and_then(|s| s.first()).map(String::as_str), Some("a"));
    }

    #[test]
    fn test_load_reports_all_tried_paths() {
        let candidates = vec![
            PathBuf::from("/nonexistent/one.json"),
            PathBuf::from("/nonexistent/two.json"),
        ];
        let err = LinearModel::load(&candidates).unwrap_err();
        match err {
            ModelError::NotFound { tried } => assert_eq!(tried.len(), 2),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
