//! # Treeforge Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the command handlers that make up the treeforge
//! CLI. Each command defines its own arguments structure and handler
//! function; `main.rs` routes to them.
//!
//! ## Commands
//!
//! - `refactor`: Copy a template tree to a new path, renaming its placeholder identifier
//!

/// Handler and arguments for `treeforge refactor`.
pub mod refactor;
