use crate::traits::{ReportStore, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use minidrop_core::{ReportId, ReportMetadata};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem report store
#[derive(Clone, Debug)]
pub struct LocalReportStore {
    base_path: PathBuf,
}

impl LocalReportStore {
    /// Create a new LocalReportStore, creating the upload directory if it is missing.
    ///
    /// # Arguments
    /// * `base_path` - Directory receiving reports (e.g., "uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %base_path.display(), "Upload directory ready");

        Ok(LocalReportStore { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert a storage key to a filesystem path.
    ///
    /// Keys are flat file names; anything that could address a location outside the
    /// upload directory is rejected.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty()
            || key.contains("..")
            || key.contains('/')
            || key.contains('\\')
            || key.contains('\0')
        {
            return Err(StorageError::InvalidKey(format!(
                "Storage key '{}' is not a plain file name",
                key
            )));
        }

        Ok(self.base_path.join(key))
    }

    /// Create `key` exclusively and write `data` to it.
    async fn write_new(&self, key: &str, data: &[u8]) -> StorageResult<PathBuf> {
        let path = self.key_to_path(key)?;
        let start = std::time::Instant::now();

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StorageError::AlreadyExists(key.to_string()),
                _ => StorageError::WriteFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                )),
            })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage write successful"
        );

        Ok(path)
    }
}

#[async_trait]
impl ReportStore for LocalReportStore {
    async fn put_report(&self, id: &ReportId, data: Bytes) -> StorageResult<String> {
        let path = self.write_new(id.as_str(), &data).await?;
        Ok(path.display().to_string())
    }

    async fn put_metadata(
        &self,
        id: &ReportId,
        metadata: &ReportMetadata,
    ) -> StorageResult<String> {
        let contents = metadata.to_sidecar_string();
        let path = self
            .write_new(&id.metadata_file_name(), contents.as_bytes())
            .await?;
        Ok(path.display().to_string())
    }
}
