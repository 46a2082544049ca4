//! Error types module
//!
//! All failures of the ingestion path are unified under `AppError`. Each variant
//! self-describes how it is rendered over HTTP through the `ErrorMetadata` trait:
//! client input errors map to 400 with a short fixed message, everything else is
//! an opaque 500 `Upload failed`.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_FILE_PART")
    fn error_code(&self) -> &'static str;

    /// Whether the caller may retry the same request unchanged
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file part named '{field}' in request")]
    MissingFilePart { field: &'static str },

    #[error("File part has an empty filename")]
    EmptyFilename,

    #[error("Failed to read multipart body: {0}")]
    Multipart(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// Server-side failure that is not a storage write, such as an invalid storage key.
    #[error("Internal error: {0}")]
    Internal(String),
}

const UPLOAD_FAILED: &str = "Upload failed";

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingFilePart { .. } => "MissingFilePart",
            AppError::EmptyFilename => "EmptyFilename",
            AppError::Multipart(_) => "Multipart",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Whether the error was caused by the client's request rather than by the server
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status_code())
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFilePart { .. } | AppError::EmptyFilename => 400,
            AppError::Multipart(_) | AppError::Storage(_) | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFilePart { .. } => "MISSING_FILE_PART",
            AppError::EmptyFilename => "EMPTY_FILENAME",
            AppError::Multipart(_) => "MULTIPART_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        !self.is_client_error()
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFilePart { .. } => "No file part".to_string(),
            AppError::EmptyFilename => "No selected file".to_string(),
            _ => UPLOAD_FAILED.to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingFilePart { .. } | AppError::EmptyFilename => LogLevel::Debug,
            AppError::Multipart(_) => LogLevel::Warn,
            AppError::Storage(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REPORT_FILE_FIELD;

    #[test]
    fn test_error_metadata_missing_file_part() {
        let err = AppError::MissingFilePart {
            field: REPORT_FILE_FIELD,
        };
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "MISSING_FILE_PART");
        assert_eq!(err.client_message(), "No file part");
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert!(err.to_string().contains(REPORT_FILE_FIELD));
    }

    #[test]
    fn test_error_metadata_empty_filename() {
        let err = AppError::EmptyFilename;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.client_message(), "No selected file");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_server_errors_are_opaque() {
        let errors = [
            AppError::Storage("disk full".to_string()),
            AppError::Multipart("stream reset".to_string()),
            AppError::Internal("boom".to_string()),
        ];
        for err in errors {
            assert_eq!(err.http_status_code(), 500);
            assert_eq!(err.client_message(), "Upload failed");
            assert!(err.is_recoverable());
        }
    }
}
