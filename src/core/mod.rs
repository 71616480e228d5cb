// Core algorithm exports
pub mod encoder;
pub mod heuristic;
pub mod predictor;

pub use encoder::{encode, encode_profile, validate, EncodeError, ValidationError};
pub use heuristic::fallback_estimate;
pub use predictor::{Prediction, Predictor};
