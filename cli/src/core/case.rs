//! # Treeforge Case Variants
//!
//! File: cli/src/core/case.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Derives the five spellings of an identifier that the refactor engine
//! searches for and replaces:
//!
//! | Variant       | `user-model`  |
//! |---------------|---------------|
//! | `upper_snake` | `USER_MODEL`  |
//! | `lower`       | `usermodel`   |
//! | `pascal`      | `UserModel`   |
//! | `camel`       | `userModel`   |
//! | `snake`       | `user_model`  |
//!
//! The identifier is split into lowercase words first: a word boundary is
//! placed before every uppercase letter and at every `-`. So `UserModel`,
//! `userModel` and `user-model` all yield `["user", "model"]` and therefore
//! the same variants. `_` is an ordinary character: `user_model` is a single
//! word and renders as `USER_MODEL`, `user_model`, `User_model`, `user_model`,
//! `user_model`.
//!
//! `Substitution` pairs the variants of a placeholder with the variants of a
//! replacement, index for index, and applies them to text in that fixed order.
//!
use tracing::trace;

/// The five renderings of one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseVariants {
    pub upper_snake: String,
    pub lower: String,
    pub pascal: String,
    pub camel: String,
    pub snake: String,
}

impl CaseVariants {
    /// Derives the variants of `identifier`.
    ///
    /// Returns `None` when the identifier has no words (empty, or only
    /// `-`); callers decide what that means.
    pub fn of(identifier: &str) -> Option<Self> {
        let words = split_words(identifier);
        if words.is_empty() {
            return None;
        }

        let pascal: String = words.iter().map(|w| capitalize(w)).collect();
        let camel = lowercase_first(&pascal);

        Some(CaseVariants {
            upper_snake: words.join("_").to_uppercase(),
            lower: words.concat(),
            pascal,
            camel,
            snake: words.join("_"),
        })
    }

    /// Variants in substitution order. Placeholder and replacement variants
    /// are always paired through this order.
    pub fn ordered(&self) -> [&str; 5] {
        [
            &self.upper_snake,
            &self.lower,
            &self.pascal,
            &self.camel,
            &self.snake,
        ]
    }
}

/// Splits an identifier into lowercase words.
fn split_words(identifier: &str) -> Vec<String> {
    let mut marked = String::with_capacity(identifier.len() * 2);
    for c in identifier.chars() {
        if c.is_uppercase() {
            marked.push('-');
        }
        marked.push(c);
    }

    marked
        .split('-')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Placeholder → replacement mapping across all case variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pairs: Vec<(String, String)>,
}

impl Substitution {
    /// Pairs variant *i* of `placeholder` with variant *i* of `replacement`.
    ///
    /// If either identifier has no words the substitution is empty and
    /// `apply` returns its input unchanged. All five pairs are kept, even
    /// when they repeat (single-word identifiers render `lower`, `camel` and
    /// `snake` identically), so a repeated pair is applied once per variant.
    pub fn new(placeholder: &str, replacement: &str) -> Self {
        let (Some(from), Some(to)) = (CaseVariants::of(placeholder), CaseVariants::of(replacement))
        else {
            return Substitution::default();
        };

        let pairs: Vec<(String, String)> = from
            .ordered()
            .into_iter()
            .zip(to.ordered())
            .map(|(f, t)| (f.to_string(), t.to_string()))
            .collect();
        trace!("Substitution pairs: {:?}", pairs);
        Substitution { pairs }
    }

    /// True when applying this substitution can never change any text.
    pub fn is_identity(&self) -> bool {
        self.pairs.iter().all(|(f, t)| f == t)
    }

    /// Replaces every occurrence of each placeholder variant, in order.
    ///
    /// Later pairs see the output of earlier ones; a replacement that contains
    /// a later placeholder variant is substituted again.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (from, to) in &self.pairs {
            if from != to && out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        out
    }
}
