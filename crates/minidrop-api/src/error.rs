//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`; every failure is logged once here and
//! rendered as `{"error": "<client message>"}` with the status its `ErrorMetadata`
//! prescribes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use minidrop_core::{AppError, ErrorMetadata, LogLevel};
use minidrop_storage::StorageError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "No file part")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rule: IntoResponse and AppError both live in other crates)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(storage_error(err))
    }
}

/// Map a storage failure onto the application taxonomy.
pub fn storage_error(err: StorageError) -> AppError {
    match err {
        StorageError::WriteFailed(msg) => AppError::Storage(msg),
        StorageError::AlreadyExists(key) => {
            AppError::Storage(format!("Refusing to overwrite existing object {}", key))
        }
        StorageError::InvalidKey(msg) => AppError::Internal(msg),
        StorageError::ConfigError(msg) => AppError::Internal(msg),
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    let recoverable = error.is_recoverable();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, recoverable, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, recoverable, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, Json(ErrorResponse::new(app_error.client_message()))).into_response()
    }
}
