//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::ValidationError;
use crate::mapper::{CoordinateDto, DistanceDto};
use crate::server::state::AppState;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/coordinates",
            get(generate_handler).post(total_distance_handler),
        )
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
///
/// Every error the API reports is caused by client input, so all map to 400.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn bad_request(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        info!(code = err.code(), "Rejected request: {}", err);
        ApiError::bad_request(err.to_string(), err.code())
    }
}

/// Generate query string
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Number of coordinates to generate
    pub count: Option<i64>,
}

/// Generate random coordinates
///
/// GET /coordinates?count=N
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<Vec<CoordinateDto>>, ApiError> {
    let Query(query) = query.map_err(|e| {
        info!("Rejected generate query: {}", e.body_text());
        ApiError::bad_request(e.body_text(), "INVALID_COUNT")
    })?;

    let max_count = state.config.limits.max_count;
    let count = query
        .count
        .ok_or_else(|| ApiError::bad_request("Query parameter 'count' is required", "INVALID_COUNT"))?;
    let count = usize::try_from(count)
        .ok()
        .filter(|&c| (1..=max_count).contains(&c))
        .ok_or_else(|| {
            info!(count, max_count, "Rejected generate count");
            ApiError::bad_request(
                format!("count must be between 1 and {}, got {}", max_count, count),
                "INVALID_COUNT",
            )
        })?;

    let coordinates = state.service.generate_coordinates(count)?;
    debug!(count, source = state.service.source_name(), "Generated coordinates");

    Ok(Json(coordinates.into_iter().map(CoordinateDto::from).collect()))
}

/// Total distance along a sequence of coordinates
///
/// POST /coordinates
async fn total_distance_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<CoordinateDto>>, JsonRejection>,
) -> Result<Json<DistanceDto>, ApiError> {
    let Json(coordinates) = payload.map_err(|e| {
        info!("Rejected coordinates body: {}", e.body_text());
        ApiError::bad_request(e.body_text(), "INVALID_JSON")
    })?;

    let distance = state.service.calculate_total_distance(&coordinates)?;
    debug!(
        points = coordinates.len(),
        metres = distance.in_meters(),
        "Calculated total distance"
    );

    Ok(Json(distance.into()))
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub source: String,
}

/// Health check
///
/// GET /health
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.service.source_name().to_string(),
    })
}
