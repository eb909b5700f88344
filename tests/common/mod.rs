//! Shared testing utilities for verpin CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `verpin` binary within the
    /// project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("verpin").expect("Failed to locate verpin binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write `verpin.toml` into the project directory.
    pub fn write_manifest(&self, content: &str) {
        fs::write(self.work_dir.join("verpin.toml"), content).expect("Failed to write manifest");
    }

    /// Default location of the derived properties file.
    pub fn properties_path(&self) -> PathBuf {
        self.work_dir.join("versions.properties")
    }

    /// Read the derived properties file.
    pub fn read_properties(&self) -> String {
        fs::read_to_string(self.properties_path()).expect("Failed to read versions.properties")
    }
}
