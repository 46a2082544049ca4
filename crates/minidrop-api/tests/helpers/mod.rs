//! Test helpers: build the router against a temporary upload directory.
//!
//! Run from workspace root: `cargo test -p minidrop-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use minidrop_api::setup;
use minidrop_core::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application: server plus the upload directory it writes into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Names of every file in the upload directory, sorted.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .expect("Failed to read upload directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .into_string()
                    .expect("Non UTF-8 file name")
            })
            .collect();
        names.sort();
        names
    }

    pub fn read_report(&self, id: &str) -> Vec<u8> {
        std::fs::read(self.upload_dir.join(id)).expect("Report file missing")
    }

    pub fn read_sidecar(&self, id: &str) -> String {
        std::fs::read_to_string(self.upload_dir.join(format!("{}.meta", id)))
            .expect("Metadata sidecar missing")
    }
}

/// Setup test app with an isolated upload directory (created by the app itself).
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");

    let config = Config::new(&upload_dir);
    let (_state, router) = setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}
