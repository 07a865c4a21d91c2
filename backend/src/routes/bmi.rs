//! BMI calculator API routes

use crate::error::{ApiError, ApiResult};
use crate::services::BmiService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use bmi_calculator_shared::types::{
    BmiRequest, BmiResponse, CategoryBandResponse, HealthyRangeQuery, HealthyRangeResponse,
};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate_bmi))
        .route("/categories", get(get_categories))
        .route("/healthy-range", get(get_healthy_range))
}

/// POST /api/v1/bmi - Evaluate a calculator submission
///
/// Accepts weight in kg or lb and height in cm or in. Units default to
/// kg and cm when omitted.
async fn calculate_bmi(
    State(state): State<AppState>,
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> ApiResult<Json<BmiResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let response = BmiService::calculate(&req, state.evaluation_options())?;
    Ok(Json(response))
}

/// GET /api/v1/bmi/categories - The category reference table
async fn get_categories() -> Json<Vec<CategoryBandResponse>> {
    Json(BmiService::categories())
}

/// GET /api/v1/bmi/healthy-range?height=175&unit=cm
async fn get_healthy_range(
    State(state): State<AppState>,
    query: Result<Query<HealthyRangeQuery>, QueryRejection>,
) -> ApiResult<Json<HealthyRangeResponse>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let response = BmiService::healthy_range(&query, state.evaluation_options())?;
    Ok(Json(response))
}
