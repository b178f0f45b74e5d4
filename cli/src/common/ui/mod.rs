//! # Treeforge UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal presentation helpers. Currently holds the tree renderer used for
//! `--dry-run` output and for debugging refactored trees.
//!

/// Renders a `TreeNode` as an indented `tree`-style listing.
pub mod tree_printer;
