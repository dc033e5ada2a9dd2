//! Common test utilities for precedence integration tests

#![allow(dead_code, clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use precedence::config::{MANIFEST_FILE, Manifest};
use tempfile::TempDir;

/// A temporary directory holding a manifest
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Workspace with `precedence.yaml` copied from a fixture
    pub fn from_fixture(fixture_name: &str) -> Self {
        let workspace = Self::new();
        workspace.write_manifest(&fixture(fixture_name));
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write `precedence.yaml` in workspace
    pub fn write_manifest(&self, content: &str) {
        self.write_file(MANIFEST_FILE, content);
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_FILE)
    }

    /// Binary running inside the workspace, isolated from the caller's
    /// environment overrides
    pub fn cmd(&self) -> Command {
        let mut cmd = precedence_cmd();
        cmd.current_dir(&self.path)
            .env_remove("PRECEDENCE_MANIFEST")
            .env_remove("PRECEDENCE_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn precedence_cmd() -> Command {
    Command::cargo_bin("precedence").expect("binary should be built")
}

/// Contents of `tests/common/fixtures/manifests/<name>.yaml`
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("manifests")
        .join(format!("{name}.yaml"));
    std::fs::read_to_string(&path).expect("Failed to read fixture manifest")
}

/// Parsed fixture manifest
pub fn fixture_manifest(name: &str) -> Manifest {
    Manifest::from_yaml(&fixture(name)).expect("fixture manifest should parse")
}
