//! # Treeforge Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout treeforge. The tree
//! engine (path resolution, tree construction, refactoring, materialization)
//! reports failures through a closed set of kinds so callers can switch on
//! them; command handlers wrap those kinds with `anyhow` context.
//!
//! ## Architecture
//!
//! The error system consists of three components:
//! - `TreeforgeError`: A custom error enum using `thiserror`
//! - `CoreResult<T>`: `std::result::Result<T, TreeforgeError>`, returned by the core
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for application code
//!
//! ## Examples
//!
//! ```rust
//! // Core code returns a specific kind
//! let canonical = path::resolve(Some(raw))?;
//!
//! // Application code adds context
//! let tree = TreeNode::new(&args.source, None)
//!     .with_context(|| format!("Invalid source path '{}'", args.source))?;
//!
//! // Pattern matching on the kind after it crossed an anyhow boundary
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<TreeforgeError>(), Some(TreeforgeError::PathInvalid { .. })) => {
//!         println!("Path contains forbidden characters");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for treeforge.
#[derive(Error, Debug)]
pub enum TreeforgeError {
    #[error("Path is empty.")]
    PathEmpty,

    #[error("Path '{path}' contains a forbidden character (one of ? < > \" :).")]
    PathInvalid { path: String },

    #[error("There is no file at '{path}'.")]
    NoSuchFile { path: String },

    #[error("There is no directory at '{path}'.")]
    NoSuchDirectory { path: String },

    #[error("Storage operation failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Target '{path}' already exists. Use --force to write into it.")]
    TargetExists { path: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TreeforgeError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        TreeforgeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type returned by the tree engine; the error is always a `TreeforgeError` kind.
pub type CoreResult<T> = std::result::Result<T, TreeforgeError>;

/// Type alias for Result using anyhow::Error for application-level code.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
