// Service exports
pub mod model;

pub use model::{InferenceError, InferenceModel, LinearModel, ModelError};
