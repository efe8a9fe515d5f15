/// Recommendation API Handlers
///
/// HTTP endpoints over a resident artifact bundle
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::error::{AppError, Result};
use crate::models::{RecommendationRequest, UserId};
use crate::services::RecommendationService;

/// Query parameters for GET /api/v1/recommendations/{user_id}
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub top_n: Option<i64>,
    pub min_rating: Option<f64>,
}

/// Handler state for recommendation service
pub struct RecommendationHandlerState {
    pub service: Arc<RecommendationService>,
    pub default_top_n: usize,
    pub default_min_rating: f64,
    pub max_top_n: usize,
}

impl RecommendationHandlerState {
    fn request_for(
        &self,
        user_id: UserId,
        query: &RecommendationQuery,
    ) -> Result<RecommendationRequest> {
        let top_n = query.top_n.unwrap_or(self.default_top_n as i64);
        let min_rating = query.min_rating.unwrap_or(self.default_min_rating);

        let mut request = RecommendationRequest::new(user_id, top_n, min_rating)?;
        request.top_n = request.top_n.min(self.max_top_n);
        Ok(request)
    }
}

/// GET /api/v1/recommendations/model-info
#[get("/api/v1/recommendations/model-info")]
pub async fn get_model_info(state: web::Data<RecommendationHandlerState>) -> HttpResponse {
    debug!("Getting model info");
    HttpResponse::Ok().json(state.service.model_info())
}

/// GET /api/v1/recommendations/{user_id}
#[get("/api/v1/recommendations/{user_id}")]
pub async fn get_recommendations(
    path: web::Path<UserId>,
    query: web::Query<RecommendationQuery>,
    state: web::Data<RecommendationHandlerState>,
) -> Result<HttpResponse> {
    let request = state.request_for(path.into_inner(), &query)?;

    debug!(
        user_id = request.user_id,
        top_n = request.top_n,
        min_rating = request.min_rating,
        "Getting recommendations"
    );

    match state.service.recommend(&request) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(err) => {
            error!("Failed to get recommendations: {:?}", err);
            Err(err)
        }
    }
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

/// Register every route on an actix `App`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::InputValidation(format!("user_id must be an integer: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::InputValidation(err.to_string()).into()
    }))
    .route("/health", web::get().to(health))
    .service(get_model_info)
    .service(get_recommendations);
}
