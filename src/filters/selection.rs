use std::path::Path;

use super::content::InclusionFilter;
use super::path::{FileTypeFilter, HiddenFilter, IgnoreFilter};
use super::{DirectoryFilter, Filter, FilterDecision};
use crate::config::FilterConfig;

/// Selection predicate composed from the individual filters
///
/// File evaluation order is fixed and every step can only exclude:
///
/// ```text
/// hidden base name -> file-type allowlist -> ignore substrings -> path-or-content inclusion
/// ```
///
/// Directory pruning uses the hidden and ignore filters against the
/// directory's own name, before the walker descends into it.
#[derive(Debug, Clone)]
pub struct SelectionPredicate {
    hidden: HiddenFilter,
    file_type: FileTypeFilter,
    ignore: IgnoreFilter,
    inclusion: InclusionFilter,
}

impl SelectionPredicate {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            hidden: HiddenFilter::new(config.ignore_hidden),
            file_type: FileTypeFilter::new(config.file_types.clone()),
            ignore: IgnoreFilter::new(config.ignore.clone()),
            inclusion: InclusionFilter::new(config.path_contains.clone(), config.content_contains.clone()),
        }
    }

    /// Evaluate a candidate file, reporting which step excluded it
    pub fn evaluate(&self, path: &Path) -> FilterDecision {
        let steps: [&dyn Filter; 4] = [&self.hidden, &self.file_type, &self.ignore, &self.inclusion];

        for step in steps {
            let decision = step.filter(path);
            if let FilterDecision::Skip(reason) = &decision {
                tracing::debug!("{} skipped {}: {}", step.name(), path.display(), reason);
                return decision;
            }
        }

        FilterDecision::Process
    }

    pub fn should_include(&self, path: &Path) -> bool {
        self.evaluate(path).is_process()
    }

    /// Decide whether the walker may enter a directory with this name
    pub fn evaluate_directory(&self, dir_name: &str) -> FilterDecision {
        let steps: [&dyn DirectoryFilter; 2] = [&self.hidden, &self.ignore];

        for step in steps {
            let decision = step.filter_directory(dir_name);
            if let FilterDecision::Skip(reason) = &decision {
                tracing::debug!("{} pruned directory {}: {}", step.name(), dir_name, reason);
                return decision;
            }
        }

        FilterDecision::Process
    }
}
