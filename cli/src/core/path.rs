//! # Treeforge Path Resolution
//!
//! File: cli/src/core/path.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Validation and canonicalization of the relative path strings that identify
//! tree nodes. Every path held by a `TreeNode` went through `resolve`, so two
//! spellings of the same location (`src/users`, `src\users`, `./src/users/`)
//! compare equal once canonical.
//!
//! ## Rules
//!
//! - An absent or empty path fails with `TreeforgeError::PathEmpty`.
//! - A path containing any of `? < > " :` fails with `TreeforgeError::PathInvalid`.
//! - Both `/` and `\` are accepted as input separators; the output uses the
//!   platform separator (`std::path::MAIN_SEPARATOR`).
//! - `.` segments, empty segments and trailing separators are dropped, `..`
//!   cancels the preceding segment. A path that collapses to nothing becomes `.`.
//!
//! Canonicalization is idempotent: `resolve(resolve(p)) == resolve(p)`.
//!
use crate::core::error::{CoreResult, TreeforgeError};
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Characters that may never appear in a node path.
pub const FORBIDDEN_CHARS: [char; 5] = ['?', '<', '>', '"', ':'];

/// Separators accepted on input.
const INPUT_SEPARATORS: [char; 2] = ['/', '\\'];

/// Checks that `path` is present, non-empty and free of forbidden characters.
///
/// Performs no normalization. Returns the validated slice so callers can chain.
pub fn validate(path: Option<&str>) -> CoreResult<&str> {
    let path = match path {
        Some(p) if !p.is_empty() => p,
        _ => return Err(TreeforgeError::PathEmpty),
    };
    if path.contains(FORBIDDEN_CHARS) {
        return Err(TreeforgeError::PathInvalid {
            path: path.to_string(),
        });
    }
    Ok(path)
}

/// Validates `path` and rewrites it into canonical form.
pub fn resolve(path: Option<&str>) -> CoreResult<String> {
    let path = validate(path)?;
    Ok(normalize(path))
}

/// Returns the final segment of the canonical form of `path` (the "working name").
///
/// `last_segment(Some("src/users")) == "users"`.
pub fn last_segment(path: Option<&str>) -> CoreResult<String> {
    let canonical = resolve(path)?;
    Ok(segment_of(&canonical).to_string())
}

/// Joins an already-canonical base with a single child entry name.
///
/// The result is re-validated, so an entry name carrying a forbidden
/// character surfaces as `PathInvalid` here.
pub fn join(base: &str, entry: &str) -> CoreResult<String> {
    resolve(Some(&format!("{}{}{}", base, MAIN_SEPARATOR, entry)))
}

/// Last segment of a path that is already canonical.
pub(crate) fn segment_of(canonical: &str) -> &str {
    canonical
        .rsplit(MAIN_SEPARATOR)
        .next()
        .unwrap_or(canonical)
}

fn normalize(raw: &str) -> String {
    let absolute = raw.starts_with(INPUT_SEPARATORS);
    let mut parts: Vec<&str> = Vec::new();

    for segment in raw.split(INPUT_SEPARATORS) {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above the root of an absolute path stays at the root.
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let body = parts.join(MAIN_SEPARATOR_STR);
    if absolute {
        format!("{}{}", MAIN_SEPARATOR, body)
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
