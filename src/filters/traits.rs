//! Core filter traits for the selection pipeline
//!
//! Every selection step is a [`Filter`]; the steps that also decide whether a
//! directory is entered implement [`DirectoryFilter`].

use std::fmt;
use std::path::Path;

/// Why an item was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Name starts with the hidden marker
    Hidden,
    /// Path ends with none of the allowed file types
    FileType,
    /// Path (or directory name) contains an ignore substring
    Ignored(String),
    /// Neither path nor content matched the inclusion lists
    NoInclusionMatch,
    /// Content could not be read as text for the content check
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Hidden => write!(f, "hidden"),
            SkipReason::FileType => write!(f, "file type not allowed"),
            SkipReason::Ignored(pattern) => write!(f, "matches ignore string '{}'", pattern),
            SkipReason::NoInclusionMatch => write!(f, "no path or content match"),
            SkipReason::Unreadable => write!(f, "unreadable during content check"),
        }
    }
}

/// Decision for whether to process or skip a file/directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// Continue processing this item
    Process,
    /// Skip this item with a reason
    Skip(SkipReason),
}

impl FilterDecision {
    pub fn is_process(&self) -> bool {
        matches!(self, FilterDecision::Process)
    }
}

/// A single file selection step
pub trait Filter {
    /// Decide for a candidate file path
    fn filter(&self, path: &Path) -> FilterDecision;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}

/// A selection step that also prunes directories before they are entered
pub trait DirectoryFilter: Filter {
    /// Decide for a directory, given its own name (not its full path)
    fn filter_directory(&self, dir_name: &str) -> FilterDecision;

    /// Returns true if the directory should not be descended into
    fn should_prune(&self, dir_name: &str) -> bool {
        !self.filter_directory(dir_name).is_process()
    }
}
