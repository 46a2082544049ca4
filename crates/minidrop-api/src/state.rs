//! Application state shared by all handlers.

use crate::services::ReportIngestService;
use minidrop_storage::ReportStore;
use std::sync::Arc;

/// Immutable per-process state; requests share nothing else but the filesystem.
#[derive(Clone)]
pub struct AppState {
    pub ingest: ReportIngestService,
}

impl AppState {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self {
            ingest: ReportIngestService::new(store),
        }
    }
}
