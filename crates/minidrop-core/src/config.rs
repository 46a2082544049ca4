//! Configuration module
//!
//! Configuration is read from the environment (optionally seeded from a `.env` file).
//! Every setting has a default, so a bare `minidrop` invocation listens on
//! `0.0.0.0:5100` and writes into `./uploads`.

use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 5100;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Process-level settings shared by every service
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_host: String,
    pub server_port: u16,
    pub environment: String,
}

/// Ingestion configuration
#[derive(Clone, Debug)]
pub struct IngestConfig {
    pub base: BaseConfig,
    /// Directory receiving report files and their metadata sidecars.
    pub upload_dir: PathBuf,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<IngestConfig>);

impl Config {
    /// Build a configuration with default server settings and the given upload directory.
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Config(Box::new(IngestConfig {
            base: BaseConfig {
                server_host: DEFAULT_SERVER_HOST.to_string(),
                server_port: DEFAULT_SERVER_PORT,
                environment: DEFAULT_ENVIRONMENT.to_string(),
            },
            upload_dir: upload_dir.into(),
        }))
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = IngestConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.0.validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.0.base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn server_host(&self) -> &str {
        &self.0.base.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.0.base.server_port
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host(), self.server_port())
    }

    pub fn environment(&self) -> &str {
        &self.0.base.environment
    }

    pub fn upload_dir(&self) -> &Path {
        &self.0.upload_dir
    }
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());

        let server_port = match env::var("SERVER_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                anyhow::anyhow!("SERVER_PORT must be a valid port number, got '{}': {}", raw, e)
            })?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());

        Ok(IngestConfig {
            base: BaseConfig {
                server_host,
                server_port,
                environment,
            },
            upload_dir: PathBuf::from(upload_dir),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base.server_host.trim().is_empty() {
            return Err(anyhow::anyhow!("SERVER_HOST cannot be empty"));
        }

        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR cannot be empty"));
        }

        Ok(())
    }
}
