//! Minidrop Storage Library
//!
//! This crate provides the `ReportStore` abstraction and its local filesystem
//! implementation.
//!
//! # Storage layout
//!
//! Keys are flat file names inside a single upload directory:
//!
//! - **Report**: `{report_id}`
//! - **Metadata sidecar**: `{report_id}.meta`
//!
//! Keys must not contain path separators or `..`. Files are created exclusively and
//! never overwritten, updated or deleted.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalReportStore;
pub use traits::{ReportStore, StorageError, StorageResult};
