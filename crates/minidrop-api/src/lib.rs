//! Minidrop API Library
//!
//! HTTP surface of the crash report ingestion service: handlers, error rendering
//! and application setup.

mod api_doc;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod utils;

// Re-exports
pub use api_doc::ApiDoc;
pub use error::{ErrorResponse, HttpAppError};
pub use services::ReportIngestService;
pub use state::AppState;
