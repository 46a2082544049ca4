//! Crash report form extraction
//!
//! Crashpad posts a `multipart/form-data` body with the minidump under
//! `upload_file_minidump` and every annotation as a plain text field.

use axum::extract::Multipart;
use bytes::Bytes;
use minidrop_core::constants::REPORT_FILE_FIELD;
use minidrop_core::{AppError, ReportMetadata};

/// A fully buffered crash report upload
#[derive(Debug)]
pub struct ReportSubmission {
    /// Filename sent by the client; only used to derive the stored extension.
    pub original_filename: String,
    pub data: Bytes,
    pub metadata: ReportMetadata,
}

/// Read the whole multipart body into a `ReportSubmission`.
///
/// A part is a file part when it carries a `filename` attribute. Only the first file
/// part named `upload_file_minidump` is kept; file parts under other names are
/// ignored. Parts without a filename become metadata, in submission order.
///
/// Nothing is written while reading, so a rejected submission leaves no trace.
pub async fn extract_report_form(mut multipart: Multipart) -> Result<ReportSubmission, AppError> {
    let mut report: Option<(String, Bytes)> = None;
    let mut metadata = ReportMetadata::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            tracing::debug!("Skipping unnamed multipart part");
            continue;
        };

        match field.file_name().map(str::to_string) {
            Some(file_name) if name == REPORT_FILE_FIELD => {
                if report.is_some() {
                    tracing::debug!(file_name = %file_name, "Skipping additional report file part");
                    continue;
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.body_text()))?;
                report = Some((file_name, data));
            }
            Some(file_name) => {
                tracing::debug!(
                    field = %name,
                    file_name = %file_name,
                    "Skipping unexpected file part"
                );
            }
            None => {
                let value = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.body_text()))?;
                if !metadata.insert(name.clone(), String::from_utf8_lossy(&value).into_owned()) {
                    tracing::debug!(field = %name, "Ignoring repeated metadata field");
                }
            }
        }
    }

    let (original_filename, data) = report.ok_or(AppError::MissingFilePart {
        field: REPORT_FILE_FIELD,
    })?;

    if original_filename.is_empty() {
        return Err(AppError::EmptyFilename);
    }

    Ok(ReportSubmission {
        original_filename,
        data,
        metadata,
    })
}
