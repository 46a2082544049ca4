//! Storage backend setup

use anyhow::{Context, Result};
use minidrop_core::Config;
use minidrop_storage::{LocalReportStore, ReportStore};
use std::sync::Arc;

/// Create the report store, creating the upload directory if it is missing.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn ReportStore>> {
    let upload_dir = config.upload_dir();

    let store = LocalReportStore::new(upload_dir)
        .await
        .with_context(|| format!("Failed to initialize upload directory {}", upload_dir.display()))?;

    tracing::info!(upload_dir = %upload_dir.display(), "Local report storage initialized");

    Ok(Arc::new(store))
}
