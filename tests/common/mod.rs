//! Common test utilities and fixtures for jsplice integration tests
//!
//! Consolidates the project-directory setup used across test files.

// Allow dead code because these utilities are shared across test files and
// not every helper is used in every file
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary project directory holding source documents and partials.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project in a fresh temporary directory.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self { dir })
    }

    /// Root of the project directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file within the project.
    pub fn file(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a document at a project-relative path, creating parents.
    pub fn write_doc(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.file(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {relative}"))?;
        Ok(path)
    }

    /// Read a project-relative file to a string.
    pub fn read(&self, relative: &str) -> Result<String> {
        fs::read_to_string(self.file(relative))
            .with_context(|| format!("Failed to read {relative}"))
    }

    /// A `jsplice` command with its working directory set to the project.
    pub fn jsplice(&self) -> Command {
        let mut cmd = Command::cargo_bin("jsplice").expect("jsplice binary should build");
        cmd.current_dir(self.dir.path());
        cmd
    }
}
