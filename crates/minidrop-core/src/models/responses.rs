use crate::constants::{HEALTH_STATUS_OK, UPLOAD_SUCCESS_MESSAGE};
use crate::models::ReportId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned after a report was stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReportResponse {
    #[schema(example = "File uploaded successfully")]
    pub message: String,
    /// Generated report identifier, also the stored file name
    #[schema(example = "crash_20240309_070542_0a1b2c3d.dmp")]
    pub id: String,
}

impl SubmitReportResponse {
    pub fn stored(id: &ReportId) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            id: id.to_string(),
        }
    }
}

/// Liveness probe body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
        }
    }
}
