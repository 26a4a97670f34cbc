//! Path-or-content inclusion filter
//!
//! The only selection step that can read a file. It runs last, so the read
//! happens only for files that already passed the path-based checks.

use std::fs;
use std::path::Path;

use super::path::path_text;
use super::{Filter, FilterDecision, SkipReason};

/// Includes a file whose path contains a `path_contains` entry, or failing
/// that, whose text content contains a `content_contains` entry
#[derive(Debug, Clone)]
pub struct InclusionFilter {
    path_contains: Vec<String>,
    content_contains: Vec<String>,
}

impl InclusionFilter {
    pub fn new(path_contains: Vec<String>, content_contains: Vec<String>) -> Self {
        Self { path_contains, content_contains }
    }

    /// No criteria configured: every file passes without a read
    pub fn is_empty(&self) -> bool {
        self.path_contains.is_empty() && self.content_contains.is_empty()
    }

    fn path_matches(&self, path: &Path) -> bool {
        let text = path_text(path);
        self.path_contains.iter().any(|needle| text.contains(needle.as_str()))
    }

    fn content_decision(&self, path: &Path) -> FilterDecision {
        if self.content_contains.is_empty() {
            return FilterDecision::Skip(SkipReason::NoInclusionMatch);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Content check could not read {}: {}", path.display(), e);
                return FilterDecision::Skip(SkipReason::Unreadable);
            }
        };

        if self.content_contains.iter().any(|needle| content.contains(needle.as_str())) {
            FilterDecision::Process
        } else {
            FilterDecision::Skip(SkipReason::NoInclusionMatch)
        }
    }
}

impl Filter for InclusionFilter {
    fn filter(&self, path: &Path) -> FilterDecision {
        if self.is_empty() || self.path_matches(path) {
            return FilterDecision::Process;
        }
        self.content_decision(path)
    }

    fn name(&self) -> &'static str {
        "InclusionFilter"
    }
}
