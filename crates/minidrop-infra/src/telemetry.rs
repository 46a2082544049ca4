//! Tracing initialization

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "minidrop=debug,minidrop_api=debug,minidrop_storage=debug,tower_http=debug";

/// Initialize tracing with an `EnvFilter` taken from `RUST_LOG`.
///
/// JSON output is used when `json` is true (production), human-readable output
/// otherwise. Calling this twice returns an error instead of panicking.
pub fn init_telemetry(
    service_name: &str,
    environment: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    }

    tracing::info!(
        service = %service_name,
        environment = %environment,
        "Tracing initialized"
    );
    Ok(())
}

/// Shutdown telemetry gracefully
///
/// The fmt subscriber writes synchronously and holds no exporter or buffer, so
/// there is nothing to flush; this only marks the end of the log stream.
pub async fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}
