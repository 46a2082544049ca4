//! Minidrop Core Library
//!
//! This crate provides the domain models, error types and configuration shared by
//! the storage backend and the HTTP API: report identifiers, report metadata,
//! response payloads and the `AppError` taxonomy.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{report_extension, ReportId, ReportMetadata};
