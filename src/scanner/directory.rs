use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::types::WalkEvent;
use crate::config::WalkConfig;
use crate::filters::{FilterDecision, SelectionPredicate};

/// Top-down tree walker with directory pruning
///
/// Within each directory, files come before subdirectories and each group is
/// sorted by name, so all of a directory's files are handled before the walk
/// descends. A subdirectory rejected by the predicate is skipped with
/// `skip_current_dir`. walkdir has already read and sorted its listing by
/// then, but none of those entries are yielded, opened or evaluated.
///
/// The root itself is never pruned, so walking `.` or a hidden root works.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'a> {
    predicate: &'a SelectionPredicate,
    follow_symlinks: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(predicate: &'a SelectionPredicate, config: &WalkConfig) -> Self {
        Self {
            predicate,
            follow_symlinks: config.follow_symlinks,
        }
    }

    /// Lazily walk `root`. A file root yields exactly that file.
    pub fn walk(&self, root: &Path) -> Walk<'a> {
        let inner = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .sort_by(files_first)
            .into_iter();

        Walk {
            inner,
            predicate: self.predicate,
        }
    }
}

/// Iterator over the events of one root's walk
pub struct Walk<'a> {
    inner: walkdir::IntoIter,
    predicate: &'a SelectionPredicate,
}

impl Iterator for Walk<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Walk error: {}", e);
                    return Some(WalkEvent::Error(e));
                }
            };

            if entry.file_type().is_dir() {
                if entry.depth() == 0 {
                    continue;
                }

                let decision = self.predicate.evaluate_directory(&entry.file_name().to_string_lossy());
                if let FilterDecision::Skip(reason) = decision {
                    self.inner.skip_current_dir();
                    return Some(WalkEvent::Pruned {
                        path: entry.into_path(),
                        reason,
                    });
                }
                continue;
            }

            if is_candidate_file(&entry) {
                return Some(WalkEvent::File(entry.into_path()));
            }
        }
    }
}

/// Regular files, plus symlinks that resolve to one when links are not followed
fn is_candidate_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
