//! # Treeforge Core
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core of treeforge: the in-memory file tree and
//! everything it is built from, plus configuration and error handling.
//!
//! ## Architecture
//!
//! - `path`: Validation and canonicalization of relative node paths
//! - `case`: Case variants of identifiers and the placeholder substitution
//! - `tree`: `TreeNode`, with `init`, `refactor_to` and `materialize`
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{TreeforgeError, Result}; // For error handling
//! use crate::core::tree::TreeNode; // The tree engine
//! ```
//!
pub mod case;
pub mod config;
pub mod error;
pub mod path;
pub mod tree;
