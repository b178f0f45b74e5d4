//! # Treeforge Local Filesystem Storage
//!
//! File: cli/src/common/fs/local.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `LocalStorage` implements the `Storage` primitives on top of `tokio::fs`.
//! Every relative path is resolved against a base directory: the process
//! working directory when run from the CLI, a temporary directory in tests.
//!
//! Directory listings can be shaped by `ListingOptions` (loaded from the
//! `[listing]` configuration section): hidden entries and named entries can
//! be skipped, and entries can be sorted by name. Symbolic links inside a
//! listed directory are never reported.
//!
use super::{EntryKind, Storage};
use crate::core::error::{CoreResult, TreeforgeError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Controls which directory entries `list_directory` reports, and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Sort entry names lexicographically instead of using the OS order.
    pub sort_entries: bool,
    /// Skip entries whose name starts with `.`.
    pub skip_hidden: bool,
    /// Entry names skipped wherever they appear in the tree.
    pub ignore: Vec<String>,
}

impl ListingOptions {
    fn keeps(&self, name: &str) -> bool {
        if self.skip_hidden && name.starts_with('.') {
            return false;
        }
        !self.ignore.iter().any(|ignored| ignored == name)
    }
}

/// `Storage` backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base: PathBuf,
    listing: ListingOptions,
}

impl LocalStorage {
    /// Creates a storage rooted at `base` with default listing options.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        LocalStorage {
            base: base.into(),
            listing: ListingOptions::default(),
        }
    }

    /// Replaces the listing options.
    pub fn with_listing(mut self, listing: ListingOptions) -> Self {
        self.listing = listing;
        self
    }

    /// Absolute location of a relative storage path.
    pub fn full_path(&self, path: &str) -> PathBuf {
        self.base.join(path)
    }

    async fn kind_of(full: &Path) -> EntryKind {
        match fs::metadata(full).await {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            _ => EntryKind::Absent,
        }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn stat_kind(&self, path: &str) -> EntryKind {
        Self::kind_of(&self.full_path(path)).await
    }

    async fn read_content(&self, path: &str) -> CoreResult<String> {
        let full = self.full_path(path);
        if Self::kind_of(&full).await != EntryKind::File {
            return Err(TreeforgeError::NoSuchFile {
                path: path.to_string(),
            });
        }
        let bytes = fs::read(&full)
            .await
            .map_err(|e| TreeforgeError::io(path, e))?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!("File {:?} is not valid UTF-8; invalid bytes are replaced", full);
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }

    async fn list_directory(&self, path: &str) -> CoreResult<Vec<String>> {
        let full = self.full_path(path);
        if Self::kind_of(&full).await != EntryKind::Directory {
            return Err(TreeforgeError::NoSuchDirectory {
                path: path.to_string(),
            });
        }

        let mut reader = fs::read_dir(&full)
            .await
            .map_err(|e| TreeforgeError::io(path, e))?;
        let mut names = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| TreeforgeError::io(path, e))?
        {
            let is_symlink = entry
                .file_type()
                .await
                .map(|t| t.is_symlink())
                .map_err(|e| TreeforgeError::io(path, e))?;
            if is_symlink {
                warn!("Skipping symbolic link {:?}", entry.path());
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) if self.listing.keeps(&name) => names.push(name),
                Ok(name) => debug!("Skipping entry {:?} in {:?}", name, full),
                Err(raw) => warn!("Skipping non UTF-8 entry {:?} in {:?}", raw, full),
            }
        }

        if self.listing.sort_entries {
            names.sort();
        }
        Ok(names)
    }

    async fn create_file(&self, path: &str) -> CoreResult<()> {
        let full = self.full_path(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| TreeforgeError::io(path, e))?;
        }
        // Opening without truncate leaves an existing file untouched.
        fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&full)
            .await
            .map_err(|e| TreeforgeError::io(path, e))?;
        debug!("Ensured file {:?}", full);
        Ok(())
    }

    async fn create_directory(&self, path: &str) -> CoreResult<()> {
        let full = self.full_path(path);
        fs::create_dir_all(&full)
            .await
            .map_err(|e| TreeforgeError::io(path, e))?;
        debug!("Ensured directory {:?}", full);
        Ok(())
    }

    async fn write_content(&self, path: &str, content: &str) -> CoreResult<()> {
        let full = self.full_path(path);
        if Self::kind_of(&full).await != EntryKind::File {
            return Err(TreeforgeError::NoSuchFile {
                path: path.to_string(),
            });
        }
        fs::write(&full, content)
            .await
            .map_err(|e| TreeforgeError::io(path, e))?;
        debug!("Wrote {} bytes to {:?}", content.len(), full);
        Ok(())
    }
}
