use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Predictor;
use crate::models::{
    ErrorResponse, HealthResponse, ModelInfoResponse, PredictRequest, PredictResponse,
};
use crate::services::LinearModel;

/// Application state shared across all handlers
///
/// The model is loaded once at startup and never mutated, so workers share a
/// single instance without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<LinearModel>,
    pub predictor: Predictor,
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict))
        .route("/model", web::get().to(model_info));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Startup refuses to serve without an artifact, so a reachable handler
    // always has a loaded model; the field is kept explicit for monitors.
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_loaded: true,
        model_features: state.model.feature_count(),
        timestamp: chrono::Utc::now(),
    })
}

/// Model metadata endpoint
///
/// GET /api/v1/model
///
/// Returns the loaded artifact's coefficient count and feature schema, for
/// operational sanity checks.
async fn model_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ModelInfoResponse {
        feature_count: state.model.feature_count(),
        feature_names: state.model.feature_names().to_vec(),
    })
}

/// Predict endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "age": 30,
///   "gender": "Female",
///   "country": "Germany",
///   "primaryLanguage": "German",
///   "primarySkill": "Data Analysis",
///   "yearsExperience": 7,
///   "hourlyRate": 45,
///   "clientRating": 4.2,
///   "isActive": true
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    // Range validation first; values outside the form's bounds were never in
    // the training data.
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.predictor.predict(&req, state.model.as_ref()) {
        Ok(prediction) => {
            tracing::info!(
                "Prediction: {:.1}% ({:?}, source: {:?})",
                prediction.percentage,
                prediction.tier,
                prediction.source
            );

            HttpResponse::Ok().json(PredictResponse {
                percentage: prediction.rounded_percentage(),
                tier: prediction.tier,
                estimated_via_fallback: prediction.estimated_via_fallback(),
                profile: prediction.profile,
            })
        }
        Err(e) => {
            tracing::info!("Incomplete predict request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Incomplete profile".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}
