//! Route definitions for the BMI Calculator API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod bmi;
mod health;

/// Calculator payloads are a handful of numbers
const MAX_BODY_BYTES: usize = 16 * 1024;

pub use bmi::bmi_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().http.request_timeout_secs);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
///
/// The banner answers with and without the trailing slash; a nested "/"
/// route would only match the bare prefix.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1", get(api_banner))
        .route("/api/v1/", get(api_banner))
        .nest("/api/v1/bmi", bmi::bmi_routes())
}

async fn api_banner() -> &'static str {
    "BMI Calculator API v1"
}
