//! # Treeforge Common Utilities
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared infrastructure used by the core and the commands:
//!
//! - **`fs`**: The `Storage` collaborator trait and its filesystem implementation.
//! - **`ui`**: Terminal rendering helpers (tree printer).
//!

/// Storage primitives (stat, read, list, create, write) used by the tree engine.
pub mod fs;
/// Terminal output helpers.
pub mod ui;
