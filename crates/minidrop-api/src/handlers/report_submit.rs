use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::extract_report_form;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use minidrop_core::constants::REPORT_FILE_FIELD;
use minidrop_core::models::SubmitReportResponse;
use minidrop_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/submit",
    tag = "reports",
    request_body(
        content = inline(Object),
        content_type = "multipart/form-data",
        description = "Report file under `upload_file_minidump`; every other field is stored as metadata"
    ),
    responses(
        (status = 200, description = "Report stored", body = SubmitReportResponse),
        (status = 400, description = "No file part, or the file part has an empty filename", body = ErrorResponse),
        (status = 500, description = "Upload failed", body = ErrorResponse)
    )
)]
pub async fn submit_report(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SubmitReportResponse>, HttpAppError> {
    // A body that is not multipart/form-data cannot carry a file part
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection.body_text(), "Submission is not multipart");
        AppError::MissingFilePart {
            field: REPORT_FILE_FIELD,
        }
    })?;

    let submission = extract_report_form(multipart).await?;

    tracing::debug!(
        original_filename = %submission.original_filename,
        size_bytes = submission.data.len(),
        metadata_fields = submission.metadata.len(),
        "Crash report received"
    );

    let id = state.ingest.ingest(submission).await?;

    Ok(Json(SubmitReportResponse::stored(&id)))
}
