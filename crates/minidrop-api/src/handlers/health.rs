//! Liveness probe.

use axum::{http::StatusCode, response::IntoResponse, Json};
use minidrop_core::models::HealthResponse;

/// Liveness probe. Does not touch storage.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is operational", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}
