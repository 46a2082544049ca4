//! Route configuration and setup.

use crate::api_doc::openapi_json;
use crate::handlers::{health_check, submit_report};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use minidrop_core::constants::{HEALTH_PATH, OPENAPI_PATH, SUBMIT_PATH};
use minidrop_infra::{request_id_middleware, RequestSpan};
use std::sync::Arc;
use tower_http::decompression::RequestDecompressionLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// Upload size is not limited, so axum's default body limit is disabled. Gzip request
/// bodies (Crashpad's default upload encoding) are decompressed before extraction;
/// bodies in any other encoding reach the multipart parser as they are, so a body
/// that cannot be read ends in the usual JSON error. The request id middleware is outermost so the
/// trace span can read the id.
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    Router::new()
        .route(SUBMIT_PATH, post(submit_report))
        .route(HEALTH_PATH, get(health_check))
        .route(OPENAPI_PATH, get(openapi_json))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestDecompressionLayer::new().pass_through_unaccepted(true))
        .layer(TraceLayer::new_for_http().make_span_with(RequestSpan))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}
