//! Path-based filters: hidden names, file-type allowlist, ignore substrings

use std::path::Path;

use super::{DirectoryFilter, Filter, FilterDecision, SkipReason};

/// Filename-start convention for hidden files and directories
pub const HIDDEN_MARKER: char = '.';

/// Lossy UTF-8 rendering of a path, the same text the start marker prints
pub fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Skips names that start with [`HIDDEN_MARKER`]
#[derive(Debug, Clone)]
pub struct HiddenFilter {
    enabled: bool,
}

impl HiddenFilter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn check_name(&self, name: &str) -> FilterDecision {
        if self.enabled && name.starts_with(HIDDEN_MARKER) {
            FilterDecision::Skip(SkipReason::Hidden)
        } else {
            FilterDecision::Process
        }
    }
}

impl Filter for HiddenFilter {
    /// Only the base name is checked; hidden parent directories are the
    /// walker's concern.
    fn filter(&self, path: &Path) -> FilterDecision {
        match path.file_name() {
            Some(name) => self.check_name(&name.to_string_lossy()),
            None => FilterDecision::Process,
        }
    }

    fn name(&self) -> &'static str {
        "HiddenFilter"
    }
}

impl DirectoryFilter for HiddenFilter {
    fn filter_directory(&self, dir_name: &str) -> FilterDecision {
        self.check_name(dir_name)
    }
}

/// Allows only paths ending with one of the configured suffixes
#[derive(Debug, Clone)]
pub struct FileTypeFilter {
    file_types: Vec<String>,
}

impl FileTypeFilter {
    pub fn new(file_types: Vec<String>) -> Self {
        Self { file_types }
    }
}

impl Filter for FileTypeFilter {
    fn filter(&self, path: &Path) -> FilterDecision {
        if self.file_types.is_empty() {
            return FilterDecision::Process;
        }

        let text = path_text(path);
        if self.file_types.iter().any(|suffix| text.ends_with(suffix.as_str())) {
            FilterDecision::Process
        } else {
            FilterDecision::Skip(SkipReason::FileType)
        }
    }

    fn name(&self) -> &'static str {
        "FileTypeFilter"
    }
}

/// Excludes paths containing any ignore substring
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    ignore: Vec<String>,
}

impl IgnoreFilter {
    pub fn new(ignore: Vec<String>) -> Self {
        Self { ignore }
    }

    fn check_text(&self, text: &str) -> FilterDecision {
        match self.ignore.iter().find(|pattern| text.contains(pattern.as_str())) {
            Some(pattern) => FilterDecision::Skip(SkipReason::Ignored(pattern.clone())),
            None => FilterDecision::Process,
        }
    }
}

impl Filter for IgnoreFilter {
    /// Matches anywhere in the full path, root prefix included
    fn filter(&self, path: &Path) -> FilterDecision {
        self.check_text(&path_text(path))
    }

    fn name(&self) -> &'static str {
        "IgnoreFilter"
    }
}

impl DirectoryFilter for IgnoreFilter {
    fn filter_directory(&self, dir_name: &str) -> FilterDecision {
        self.check_text(dir_name)
    }
}
