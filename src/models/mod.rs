// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Country, FeatureVector, FreelancerProfile, Gender, Language, PredictionSource, Skill, Tier,
};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, ModelInfoResponse, PredictResponse};
