//! # Treeforge Refactor Command
//!
//! File: cli/src/commands/refactor.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `treeforge refactor`, which copies a template tree to a new
//! location while renaming a placeholder identifier in file names, folder
//! names and file contents.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration (listing options for the template walk)
//! 2. Work out the placeholder and replacement identifiers
//! 3. Read the source tree from storage (`TreeNode::init`)
//! 4. Build the refactored tree under the target path
//! 5. Print it (`--dry-run`) or write it to storage (`TreeNode::materialize`)
//!
//! ## Examples
//!
//! ```bash
//! # templates/product -> src/order, replacing "product" with "order"
//! treeforge refactor templates/product src/order
//!
//! # Explicit identifiers
//! treeforge refactor templates/crud src/invoices crud-item invoice-line
//!
//! # Show the resulting tree without writing anything
//! treeforge refactor --dry-run templates/product src/order
//! ```
//!
use crate::common::fs::{EntryKind, LocalStorage, Storage};
use crate::common::ui::tree_printer;
use crate::core::case::{CaseVariants, Substitution};
use crate::core::config;
use crate::core::error::{Result, TreeforgeError};
use crate::core::path;
use crate::core::tree::TreeNode;
use anyhow::Context;
use clap::Parser;
use std::env;
use std::io::IsTerminal;
use tracing::{debug, info, warn};

/// # Refactor Arguments (`RefactorArgs`)
///
/// Command-line arguments accepted by `treeforge refactor`.
#[derive(Parser, Debug)]
pub struct RefactorArgs {
    /// Template folder (or file) to read, relative to the current directory.
    source: String,

    /// Where the refactored copy is written, relative to the current directory.
    target: String,

    /// Identifier to replace. Defaults to the last segment of SOURCE.
    placeholder: Option<String>,

    /// Identifier to put in its place. Defaults to the last segment of TARGET.
    replacement: Option<String>,

    /// Print the resulting tree instead of writing it.
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Write even if TARGET already exists (existing files are overwritten).
    #[arg(long, short = 'f')]
    force: bool,
}

/// Result of a refactor run, before anything is printed.
#[derive(Debug)]
pub(crate) enum Outcome {
    Planned(TreeNode),
    Written(TreeNode),
}

/// # Handle Refactor Command (`handle_refactor`)
///
/// Loads configuration, builds a `LocalStorage` rooted at the current
/// directory and runs the refactor against it.
pub async fn handle_refactor(args: RefactorArgs) -> Result<()> {
    info!("Handling refactor command...");
    let cfg = config::load_config().context("Failed to load treeforge configuration")?;
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let storage = LocalStorage::new(cwd).with_listing(cfg.listing.to_options());

    match run_refactor(&args, &storage).await? {
        Outcome::Planned(tree) => {
            let styled = std::io::stdout().is_terminal();
            print!("{}", tree_printer::render(&tree, styled));
        }
        Outcome::Written(tree) => {
            println!(
                "Created '{}' ({} files, {} directories)",
                tree.relative_path(),
                tree.file_count(),
                tree.dir_count()
            );
        }
    }
    Ok(())
}

/// Runs the refactor against any storage. Writes only when not a dry run.
pub(crate) async fn run_refactor(args: &RefactorArgs, storage: &dyn Storage) -> Result<Outcome> {
    let (placeholder, replacement) = resolve_identifiers(args)?;
    if Substitution::new(&placeholder, &replacement).is_identity() {
        warn!(
            "'{}' and '{}' render identically; names and contents are copied unchanged",
            placeholder, replacement
        );
    }
    info!(
        "Refactoring '{}' -> '{}' ({} -> {})",
        args.source, args.target, placeholder, replacement
    );

    let mut tree = TreeNode::new(&args.source, None)
        .with_context(|| format!("Invalid source path '{}'", args.source))?;
    if storage.stat_kind(tree.relative_path()).await == EntryKind::Absent {
        return Err(TreeforgeError::NoSuchDirectory {
            path: tree.relative_path().to_string(),
        })
        .context("Source template not found");
    }
    tree.init(storage)
        .await
        .with_context(|| format!("Failed to read template tree '{}'", args.source))?;
    debug!("Source tree:\n{}", tree);

    let refactored = tree
        .refactored(&args.target, &placeholder, &replacement)
        .with_context(|| format!("Failed to refactor into '{}'", args.target))?;

    if args.dry_run {
        return Ok(Outcome::Planned(refactored));
    }

    if !args.force && storage.stat_kind(refactored.relative_path()).await != EntryKind::Absent {
        return Err(TreeforgeError::TargetExists {
            path: refactored.relative_path().to_string(),
        }
        .into());
    }

    refactored
        .materialize(storage)
        .await
        .with_context(|| format!("Failed to write '{}'", refactored.relative_path()))?;
    info!(
        "Materialized {} files into {}",
        refactored.file_count(),
        refactored.relative_path()
    );
    Ok(Outcome::Written(refactored))
}

/// Placeholder and replacement, defaulting to the last segment of source and target.
fn resolve_identifiers(args: &RefactorArgs) -> Result<(String, String)> {
    let placeholder = match &args.placeholder {
        Some(p) => p.clone(),
        None => path::last_segment(Some(&args.source))
            .with_context(|| format!("Invalid source path '{}'", args.source))?,
    };
    let replacement = match &args.replacement {
        Some(r) => r.clone(),
        None => path::last_segment(Some(&args.target))
            .with_context(|| format!("Invalid target path '{}'", args.target))?,
    };

    for (label, identifier) in [("placeholder", &placeholder), ("replacement", &replacement)] {
        if CaseVariants::of(identifier).is_none() {
            anyhow::bail!(
                "The {} '{}' has no letters or digits to substitute.",
                label,
                identifier
            );
        }
        // Substituted names are joined under their parent; they must stay one segment.
        if identifier == "." || identifier == ".." || identifier.contains(['/', '\\']) {
            anyhow::bail!(
                "The {} '{}' must be a single name, not a path.",
                label,
                identifier
            );
        }
    }
    Ok((placeholder, replacement))
}
