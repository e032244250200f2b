//! CLI test suite for assetref
//!
//! Runs the `assetref` binary against manifests and page templates in temporary
//! directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **render**: `assetref render`
//! - **url**: `assetref url`
//! - **list**: `assetref list`
//! - **errors**: exit codes and error display

mod errors;
mod render;
mod url;

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use assetref::constants::MANIFEST_FILE_NAME;
use assetref::test_utils::SAMPLE_MANIFEST;

/// A temporary project directory holding a manifest and page templates.
pub struct TestProject {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl TestProject {
    /// A project with [`SAMPLE_MANIFEST`] as `assetref.toml`.
    pub fn new() -> Self {
        let project = Self::empty();
        project.write_file(MANIFEST_FILE_NAME, SAMPLE_MANIFEST);
        project
    }

    /// A project with no files.
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            project_dir,
        }
    }

    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.project_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// An `assetref` command running in the project directory.
    pub fn assetref(&self) -> Command {
        let mut cmd = Command::cargo_bin("assetref").unwrap();
        cmd.current_dir(&self.project_dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }
}
