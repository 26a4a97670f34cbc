//! Comment stripping
//!
//! A pure text transform: given file content and a file-type tag (a
//! leading-dot extension such as `.py`), remove that type's comment syntax.
//!
//! The rules are lexical. They do not know about string literals, so a `#`,
//! `//` or `/*` inside a quoted string is treated as a comment marker and
//! stripped along with everything after it on that line.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub mod rules;


pub use rules::{BUILTIN_TAGS, CommentRule, CommentSyntax, RuleSpec};

/// Registry from file-type tag to comment syntax
#[derive(Debug, Clone)]
pub struct CommentStripper {
    registry: HashMap<String, CommentSyntax>,
}

impl Default for CommentStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentStripper {
    /// Stripper with the built-in tag table
    pub fn new() -> Self {
        let registry = BUILTIN_TAGS
            .iter()
            .map(|(tag, syntax)| (tag.to_string(), *syntax))
            .collect();
        Self { registry }
    }

    /// Stripper with extra tags layered over the built-ins
    pub fn with_extra_tags(extra: &BTreeMap<String, CommentSyntax>) -> Self {
        let mut stripper = Self::new();
        for (tag, syntax) in extra {
            stripper.register(normalize_tag(tag), *syntax);
        }
        stripper
    }

    pub fn register(&mut self, tag: impl Into<String>, syntax: CommentSyntax) {
        self.registry.insert(tag.into(), syntax);
    }

    pub fn syntax_for(&self, file_type: &str) -> Option<CommentSyntax> {
        self.registry.get(file_type).copied()
    }

    /// Strip comments for `file_type`. Unknown tags return the content as is;
    /// known tags run their rules in order, then the result is trimmed once.
    pub fn strip(&self, content: &str, file_type: &str) -> String {
        let Some(syntax) = self.syntax_for(file_type) else {
            tracing::trace!("No comment rules for '{}'", file_type);
            return content.to_string();
        };

        let mut stripped = content.to_string();
        for rule in syntax.rules().iter() {
            let replaced = match rule.apply(&stripped) {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            if let Some(replaced) = replaced {
                tracing::trace!("Rule '{}' changed {} content", rule.pattern(), file_type);
                stripped = replaced;
            }
        }

        stripped.trim().to_string()
    }

    /// Strip comments using the tag derived from `path`
    pub fn strip_for_path(&self, content: &str, path: &Path) -> String {
        match file_type_tag(path) {
            Some(tag) => self.strip(content, &tag),
            None => content.to_string(),
        }
    }
}

/// Leading-dot extension of the final path component (`src/a.py` -> `.py`).
/// Dotfiles without a further dot and extensionless names have no tag.
pub fn file_type_tag(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

fn normalize_tag(tag: &str) -> String {
    if tag.starts_with('.') {
        tag.to_string()
    } else {
        format!(".{}", tag)
    }
}
