//! Configuration validation
//!
//! Validates configuration at startup to catch misconfigurations early.

use anyhow::Result;
use minidrop_core::Config;

/// Validate configuration values.
///
/// Fails when the configuration itself is invalid or when the upload directory path
/// exists but is not a directory.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    let upload_dir = config.upload_dir();
    if upload_dir.exists() && !upload_dir.is_dir() {
        return Err(anyhow::anyhow!(
            "UPLOAD_DIR {} exists but is not a directory",
            upload_dir.display()
        ));
    }

    if upload_dir.is_relative() {
        tracing::debug!(
            upload_dir = %upload_dir.display(),
            "UPLOAD_DIR is relative to the working directory"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_upload_dir_is_valid() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path().join("not-yet-created"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_upload_dir_pointing_at_file_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("uploads");
        std::fs::write(&file, b"").unwrap();

        let config = Config::new(&file);
        assert!(validate_config(&config).is_err());
    }
}
