//! # Treeforge In-Memory Storage (tests)
//!
//! File: cli/src/common/fs/memory.rs
//! Author: Christi Mahu
//!
//! `MemoryStorage` keeps files and directories in an ordered map keyed by
//! canonical path and appends every mutating call to an operation log.
//! Listings come back in key order.
//!
use super::{EntryKind, Storage};
use crate::core::error::{CoreResult, TreeforgeError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::MAIN_SEPARATOR;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    File(String),
    Dir,
}

/// A mutating storage call, as recorded by `MemoryStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    CreateFile(String),
    CreateDirectory(String),
    Write(String, String),
}

#[derive(Debug, Default)]
struct State {
    entries: BTreeMap<String, Entry>,
    ops: Vec<Op>,
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
    /// When set, writes to this path fail with an I/O error.
    fail_writes_to: Option<String>,
}

fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once(MAIN_SEPARATOR).map(|(parent, _)| parent)
}

fn ancestors(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = parent_of(path);
    while let Some(p) = current {
        if !p.is_empty() {
            out.push(p.to_string());
        }
        current = parent_of(p);
    }
    out
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose `write_content` fails for `path`.
    pub fn failing_writes_to(path: &str) -> Self {
        MemoryStorage {
            fail_writes_to: Some(path.to_string()),
            ..Self::default()
        }
    }

    /// Seeds a file (and its ancestor directories) without logging an op.
    pub async fn seed_file(&self, path: &str, content: &str) {
        let mut state = self.state.lock().await;
        for dir in ancestors(path) {
            state.entries.insert(dir, Entry::Dir);
        }
        state
            .entries
            .insert(path.to_string(), Entry::File(content.to_string()));
    }

    /// Seeds an empty directory (and its ancestors) without logging an op.
    pub async fn seed_dir(&self, path: &str) {
        let mut state = self.state.lock().await;
        for dir in ancestors(path) {
            state.entries.insert(dir, Entry::Dir);
        }
        state.entries.insert(path.to_string(), Entry::Dir);
    }

    pub async fn ops(&self) -> Vec<Op> {
        self.state.lock().await.ops.clone()
    }

    pub async fn file(&self, path: &str) -> Option<String> {
        match self.state.lock().await.entries.get(path) {
            Some(Entry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn stat_kind(&self, path: &str) -> EntryKind {
        match self.state.lock().await.entries.get(path) {
            Some(Entry::File(_)) => EntryKind::File,
            Some(Entry::Dir) => EntryKind::Directory,
            None => EntryKind::Absent,
        }
    }

    async fn read_content(&self, path: &str) -> CoreResult<String> {
        self.file(path).await.ok_or_else(|| TreeforgeError::NoSuchFile {
            path: path.to_string(),
        })
    }

    async fn list_directory(&self, path: &str) -> CoreResult<Vec<String>> {
        let state = self.state.lock().await;
        if state.entries.get(path) != Some(&Entry::Dir) {
            return Err(TreeforgeError::NoSuchDirectory {
                path: path.to_string(),
            });
        }
        Ok(state
            .entries
            .keys()
            .filter(|key| parent_of(key) == Some(path))
            .filter_map(|key| key.rsplit(MAIN_SEPARATOR).next())
            .map(str::to_string)
            .collect())
    }

    async fn create_file(&self, path: &str) -> CoreResult<()> {
        let mut state = self.state.lock().await;
        state.ops.push(Op::CreateFile(path.to_string()));
        for dir in ancestors(path) {
            state.entries.entry(dir).or_insert(Entry::Dir);
        }
        state
            .entries
            .entry(path.to_string())
            .or_insert_with(|| Entry::File(String::new()));
        Ok(())
    }

    async fn create_directory(&self, path: &str) -> CoreResult<()> {
        let mut state = self.state.lock().await;
        state.ops.push(Op::CreateDirectory(path.to_string()));
        for dir in ancestors(path) {
            state.entries.entry(dir).or_insert(Entry::Dir);
        }
        state.entries.entry(path.to_string()).or_insert(Entry::Dir);
        Ok(())
    }

    async fn write_content(&self, path: &str, content: &str) -> CoreResult<()> {
        if self.fail_writes_to.as_deref() == Some(path) {
            return Err(TreeforgeError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "write refused"),
            ));
        }
        let mut state = self.state.lock().await;
        match state.entries.get_mut(path) {
            Some(Entry::File(existing)) => *existing = content.to_string(),
            _ => {
                return Err(TreeforgeError::NoSuchFile {
                    path: path.to_string(),
                })
            }
        }
        state
            .ops
            .push(Op::Write(path.to_string(), content.to_string()));
        Ok(())
    }
}
