//! # Treeforge Storage Collaborator (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The tree engine never touches the filesystem directly. It talks to a
//! `Storage` implementation through six primitives (stat, read, list,
//! create file, create directory, write), each of which is an await point.
//!
//! ## Architecture
//!
//! - **`local`**: `LocalStorage`, backed by `tokio::fs` and rooted at a base
//!   directory. Used by the CLI.
//! - **`memory`** (tests only): `MemoryStorage`, an in-memory map that also
//!   records every mutating call so tests can assert on ordering.
//!
//! ## Contracts
//!
//! | Primitive          | Contract                                                          |
//! |--------------------|-------------------------------------------------------------------|
//! | `stat_kind`        | Never fails; I/O errors and missing paths are `EntryKind::Absent` |
//! | `read_content`     | `NoSuchFile` unless the path is a regular file                    |
//! | `list_directory`   | `NoSuchDirectory` unless the path is a directory                  |
//! | `create_file`      | Creates an empty file (and parents) if absent; no-op otherwise    |
//! | `create_directory` | Creates the directory and ancestors if absent; no-op otherwise    |
//! | `write_content`    | Overwrites an existing file; `NoSuchFile` if it was not created   |
//!
use crate::core::error::CoreResult;
use async_trait::async_trait;

/// Contains `LocalStorage`, the `tokio::fs` implementation.
pub mod local;
/// Contains `MemoryStorage`, the recording in-memory implementation used by tests.
#[cfg(test)]
pub mod memory;

pub use local::{ListingOptions, LocalStorage};

/// What a path points at, as far as storage can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Absent,
}

/// Storage primitives consumed by `TreeNode`.
///
/// All paths are canonical relative paths produced by `core::path`.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn stat_kind(&self, path: &str) -> EntryKind;

    async fn read_content(&self, path: &str) -> CoreResult<String>;

    /// Entry names (not paths) of the immediate children of `path`.
    /// Order is implementation-defined but stable for one call.
    async fn list_directory(&self, path: &str) -> CoreResult<Vec<String>>;

    async fn create_file(&self, path: &str) -> CoreResult<()>;

    async fn create_directory(&self, path: &str) -> CoreResult<()>;

    async fn write_content(&self, path: &str, content: &str) -> CoreResult<()>;
}
