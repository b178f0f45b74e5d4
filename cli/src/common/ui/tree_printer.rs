//! # Treeforge Tree Printer
//!
//! File: cli/src/common/ui/tree_printer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders an in-memory `TreeNode` the way the `tree` utility prints a
//! directory. Used by `treeforge refactor --dry-run` to show what would be
//! written, and by `TreeNode`'s `Display` implementation.
//!
//! Entries are printed in tree order (the order storage listed them), not
//! re-sorted. Directory names get a trailing `/`; with `styled` they are
//! also bold.
//!
//! Example output:
//!
//! ```text
//! order/
//! ├── lib/
//! │   └── order.service.ts
//! └── README.md
//! ```
//!
use crate::core::tree::TreeNode;
use std::fmt::Write as FmtWrite;

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a directory listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a directory listing ("L" shape).
const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels after the last item has been printed.
const SPACER: &str = "    ";
/// ANSI escape code to start bold text formatting (for directories).
const BOLD_START: &str = "\x1b[1m";
/// ANSI escape code to reset text formatting (ends bolding).
const BOLD_END: &str = "\x1b[0m";

/// Renders `root` and its descendants as a multi-line string.
pub fn render(root: &TreeNode, styled: bool) -> String {
    let mut output = String::new();
    write_label(&mut output, root, styled);
    walk(root, &mut String::new(), styled, &mut output);
    output
}

fn write_label(output: &mut String, node: &TreeNode, styled: bool) {
    // Writing into a String cannot fail.
    let _ = if node.is_file() {
        writeln!(output, "{}", node.name())
    } else if styled {
        writeln!(output, "{}{}/{}", BOLD_START, node.name(), BOLD_END)
    } else {
        writeln!(output, "{}/", node.name())
    };
}

fn walk(node: &TreeNode, prefix: &mut String, styled: bool, output: &mut String) {
    let count = node.children().len();
    for (index, child) in node.children().iter().enumerate() {
        let is_last = index + 1 == count;

        output.push_str(prefix);
        output.push_str(if is_last { ELBOW } else { TEE });
        write_label(output, child, styled);

        if !child.children().is_empty() {
            let component = if is_last { SPACER } else { PIPE };
            prefix.push_str(component);
            walk(child, prefix, styled, output);
            // Backtrack the indentation for the next sibling.
            prefix.truncate(prefix.len() - component.len());
        }
    }
}
