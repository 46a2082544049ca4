//! Storage abstraction trait
//!
//! This module defines the ReportStore trait that storage backends implement.

use async_trait::async_trait;
use bytes::Bytes;
use minidrop_core::{ReportId, ReportMetadata};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Write-once storage for crash reports and their metadata sidecars.
///
/// Implementations must never overwrite an existing object: writing to a key that
/// already exists fails with `StorageError::AlreadyExists`, which lets callers pick
/// a fresh identifier instead.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Store the raw report bytes under `id`. Returns the location written.
    async fn put_report(&self, id: &ReportId, data: Bytes) -> StorageResult<String>;

    /// Store the metadata sidecar for `id` (empty file when there is no metadata).
    /// Returns the location written.
    async fn put_metadata(&self, id: &ReportId, metadata: &ReportMetadata)
        -> StorageResult<String>;
}
