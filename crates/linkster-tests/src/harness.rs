//! Test harness for file-driven CLI command tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory for request and plan files.
pub struct TestHarness {
    /// Working directory for test inputs.
    pub work_dir: TempDir,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a JSON value to `name` inside the work dir and return its path.
    pub fn write_json(&self, name: &str, value: &serde_json::Value) -> PathBuf {
        let path = self.path().join(name);
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Write raw text to `name` inside the work dir and return its path.
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}
