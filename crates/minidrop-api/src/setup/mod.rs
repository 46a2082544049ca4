//! Application setup and initialization
//!
//! Everything `main` needs besides telemetry, kept out of the binary so tests can
//! build the same router against a temporary upload directory.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use minidrop_core::Config;
use std::sync::Arc;

/// Initialize the entire application: validate config, create storage, build routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    let store = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(store));

    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
