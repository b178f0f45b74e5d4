//! # Treeforge File Tree
//!
//! File: cli/src/core/tree.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `TreeNode` is an in-memory mirror of a directory subtree. A node holds a
//! canonical relative path, the display name derived from it, the text
//! content when it is a file, and its children in storage order when it is a
//! directory.
//!
//! ## Lifecycle
//!
//! 1. `TreeNode::new` validates and canonicalizes the path. No storage access.
//! 2. `init` walks storage once, classifying each node and building children.
//! 3. `refactored` / `refactor_to` rename the tree under a new root,
//!    substituting placeholder case variants in names and contents.
//! 4. `materialize` writes the tree back to storage.
//!
//! Storage calls are awaited one at a time in pre-order (self before
//! children, children in order), for both `init` and `materialize`.
//!
//! ## Example
//!
//! ```rust
//! let storage = LocalStorage::new(std::env::current_dir()?);
//! let mut tree = TreeNode::new("templates/product", None)?;
//! tree.init(&storage).await?;
//! tree.refactor_to("src/order", "product", "order")?;
//! tree.materialize(&storage).await?;
//! ```
//!
use crate::common::fs::{EntryKind, Storage};
use crate::common::ui::tree_printer;
use crate::core::case::Substitution;
use crate::core::error::CoreResult;
use crate::core::path;
use futures_util::future::{BoxFuture, FutureExt};
use std::fmt;
use tracing::{debug, trace, warn};

/// A file or directory in the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    relative_path: String,
    name: String,
    content: Option<String>,
    children: Vec<TreeNode>,
    is_file: bool,
}

/// Where a node lands when the tree is refactored.
enum Placement<'p> {
    /// The caller-supplied root path, used verbatim.
    Root(String),
    /// Below an already-placed parent; the node's own name is substituted.
    Under(&'p str),
}

impl TreeNode {
    /// Creates a node at `relative_path`.
    ///
    /// Passing `content` makes a synthetic file node that needs no storage.
    /// Fails with `PathEmpty` / `PathInvalid` if the path does not resolve.
    pub fn new(relative_path: &str, content: Option<String>) -> CoreResult<Self> {
        let relative_path = path::resolve(Some(relative_path))?;
        let name = path::segment_of(&relative_path).to_string();
        Ok(TreeNode {
            relative_path,
            name,
            is_file: content.is_some(),
            content,
            children: Vec::new(),
        })
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File content; `None` for directories and uninitialized nodes.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    /// Populates this node and its whole subtree from storage.
    ///
    /// A path that is neither a file nor a directory leaves the node
    /// uninitialized (no content, no children); that is not an error.
    pub fn init<'a>(&'a mut self, storage: &'a dyn Storage) -> BoxFuture<'a, CoreResult<()>> {
        async move {
            match storage.stat_kind(&self.relative_path).await {
                EntryKind::File => {
                    let content = storage.read_content(&self.relative_path).await?;
                    trace!("Read {} bytes from {}", content.len(), self.relative_path);
                    self.content = Some(content);
                    self.is_file = true;
                    self.children.clear();
                }
                EntryKind::Directory => {
                    let entries = storage.list_directory(&self.relative_path).await?;
                    let mut children = Vec::with_capacity(entries.len());
                    for entry in entries {
                        let child_path = path::join(&self.relative_path, &entry)?;
                        let mut child = TreeNode::new(&child_path, None)?;
                        child.init(storage).await?;
                        children.push(child);
                    }
                    debug!(
                        "Initialized directory {} ({} entries)",
                        self.relative_path,
                        children.len()
                    );
                    self.content = None;
                    self.is_file = false;
                    self.children = children;
                }
                EntryKind::Absent => {
                    warn!(
                        "Nothing found at {}; node stays uninitialized",
                        self.relative_path
                    );
                }
            }
            Ok(())
        }
        .boxed()
    }

    /// Returns a copy of this tree rooted at `new_path`, with every case
    /// variant of `placeholder` replaced by the matching variant of
    /// `replacement`.
    ///
    /// The root takes `new_path` verbatim; only its content is substituted.
    /// Each descendant is placed at `parent_new_path/<substituted name>` and
    /// has its content substituted. `self` is not modified.
    pub fn refactored(
        &self,
        new_path: &str,
        placeholder: &str,
        replacement: &str,
    ) -> CoreResult<TreeNode> {
        let root = path::resolve(Some(new_path))?;
        let substitution = Substitution::new(placeholder, replacement);
        debug!(
            "Refactoring {} -> {} ({:?} -> {:?})",
            self.relative_path, root, placeholder, replacement
        );
        self.place(Placement::Root(root), &substitution)
    }

    /// In-place form of `refactored`. On error the node is left unchanged.
    ///
    /// Calling this twice applies the second substitution to the already
    /// refactored tree; re-run `init` to start again from storage.
    pub fn refactor_to(
        &mut self,
        new_path: &str,
        placeholder: &str,
        replacement: &str,
    ) -> CoreResult<()> {
        *self = self.refactored(new_path, placeholder, replacement)?;
        Ok(())
    }

    fn place(&self, placement: Placement<'_>, substitution: &Substitution) -> CoreResult<TreeNode> {
        let relative_path = match placement {
            Placement::Root(root) => root,
            Placement::Under(parent) => path::join(parent, &substitution.apply(&self.name))?,
        };
        let name = path::segment_of(&relative_path).to_string();
        let content = self.content.as_deref().map(|c| substitution.apply(c));

        let children = self
            .children
            .iter()
            .map(|child| child.place(Placement::Under(&relative_path), substitution))
            .collect::<CoreResult<Vec<_>>>()?;

        trace!("Placed {} at {}", self.relative_path, relative_path);
        Ok(TreeNode {
            relative_path,
            name,
            content,
            children,
            is_file: self.is_file,
        })
    }

    /// Writes this tree to storage in pre-order.
    ///
    /// Files are created then overwritten with their content; directories are
    /// created if absent. There is no rollback: on failure, everything written
    /// before the failing node stays in storage.
    pub fn materialize<'a>(&'a self, storage: &'a dyn Storage) -> BoxFuture<'a, CoreResult<()>> {
        async move {
            if self.is_file {
                storage.create_file(&self.relative_path).await?;
                storage
                    .write_content(&self.relative_path, self.content.as_deref().unwrap_or_default())
                    .await?;
                debug!("Materialized file {}", self.relative_path);
            } else {
                storage.create_directory(&self.relative_path).await?;
                debug!("Materialized directory {}", self.relative_path);
            }
            for child in &self.children {
                child.materialize(storage).await?;
            }
            Ok(())
        }
        .boxed()
    }

    /// Pre-order iterator over this node and all descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    pub fn file_count(&self) -> usize {
        self.walk().filter(|n| n.is_file).count()
    }

    pub fn dir_count(&self) -> usize {
        self.walk().filter(|n| !n.is_file).count()
    }

    #[cfg(test)]
    pub(crate) fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.is_file = false;
        self.content = None;
        self.children = children;
        self
    }
}

/// Pre-order traversal returned by `TreeNode::walk`.
pub struct Walk<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tree_printer::render(self, false))
    }
}
