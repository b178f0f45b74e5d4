//! # Treeforge CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `treeforge` binary inside its own temporary working directory
//! with an explicit (empty unless written) configuration file, so user and
//! project configuration on the host never leak into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Creates an `assert_cmd::Command` for the compiled `treeforge` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn treeforge_cmd() -> Command {
    Command::cargo_bin("treeforge").expect("Failed to find treeforge binary for testing")
}

/// A temporary working directory plus an isolated config file.
pub struct Workspace {
    pub dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp workspace");
        let config = dir.path().join("test-config.toml");
        fs::write(&config, "").expect("Failed to write empty config");
        Workspace { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Replaces the configuration file content.
    pub fn config(&self, toml: &str) {
        fs::write(&self.config, toml).expect("Failed to write config");
    }

    /// Writes a file (creating parents) relative to the workspace.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn dir(&self, rel: &str) {
        fs::create_dir_all(self.path().join(rel)).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e))
    }

    /// `treeforge` running inside the workspace with the isolated config.
    pub fn cmd(&self) -> Command {
        let mut cmd = treeforge_cmd();
        cmd.current_dir(self.path())
            .env("TREEFORGE_CONFIG", &self.config)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Relative paths (with `/`) of everything below `rel`, sorted.
    pub fn tree(&self, rel: &str) -> Vec<String> {
        let root = self.path().join(rel);
        let mut out: Vec<String> = WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .map(|e| e.expect("walk failed"))
            .map(|e| {
                let rel = e.path().strip_prefix(&root).unwrap();
                let mut s = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                if e.file_type().is_dir() {
                    s.push('/');
                }
                s
            })
            .collect();
        out.sort();
        out
    }
}
