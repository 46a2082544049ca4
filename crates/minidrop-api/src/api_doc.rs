use crate::error::ErrorResponse;
use axum::Json;
use minidrop_core::models::{HealthResponse, SubmitReportResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "minidrop",
        description = "Crash report ingestion endpoint (Crashpad-compatible minidump uploads)"
    ),
    paths(
        crate::handlers::report_submit::submit_report,
        crate::handlers::health::health_check,
    ),
    components(schemas(SubmitReportResponse, HealthResponse, ErrorResponse)),
    tags(
        (name = "reports", description = "Crash report submission"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
