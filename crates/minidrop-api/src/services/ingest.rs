//! Crash report ingestion service
//!
//! Workflow: generate id → write report (exclusive create) → write metadata sidecar.

use crate::error::storage_error;
use crate::utils::ReportSubmission;
use bytes::Bytes;
use chrono::Local;
use minidrop_core::{AppError, ReportId};
use minidrop_storage::{ReportStore, StorageError};
use std::sync::Arc;

/// Identifier generations tried before giving up on a colliding name.
const MAX_ID_ATTEMPTS: usize = 3;

/// Persists crash reports and their metadata
#[derive(Clone)]
pub struct ReportIngestService {
    store: Arc<dyn ReportStore>,
}

impl ReportIngestService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// Store a submission and return its generated identifier.
    ///
    /// The report is written first and must succeed before the sidecar is attempted.
    /// A report written before a sidecar failure is left in place.
    pub async fn ingest(&self, submission: ReportSubmission) -> Result<ReportId, AppError> {
        let ReportSubmission {
            original_filename,
            data,
            metadata,
        } = submission;

        let size_bytes = data.len();
        let id = self.store_report(&original_filename, data).await?;

        self.store
            .put_metadata(&id, &metadata)
            .await
            .map_err(storage_error)?;

        tracing::info!(
            report_id = %id,
            original_filename = %original_filename,
            size_bytes,
            metadata_fields = metadata.len(),
            "Crash report stored"
        );

        Ok(id)
    }

    /// Write the report under a fresh identifier, regenerating it when the name is taken.
    async fn store_report(&self, original_filename: &str, data: Bytes) -> Result<ReportId, AppError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = ReportId::generate(original_filename, Local::now().naive_local());

            match self.store.put_report(&id, data.clone()).await {
                Ok(_) => return Ok(id),
                Err(StorageError::AlreadyExists(key)) => {
                    tracing::warn!(
                        key = %key,
                        attempt,
                        "Report identifier collision, generating a new one"
                    );
                }
                Err(e) => return Err(storage_error(e)),
            }
        }

        Err(AppError::Storage(format!(
            "No free report identifier after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }
}
