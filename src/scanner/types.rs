use std::path::{Path, PathBuf};

use crate::filters::SkipReason;

/// Statistics from a dump run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DumpStats {
    pub files_emitted: usize,
    pub files_skipped: usize,
    pub directories_pruned: usize,
    pub walk_errors: usize,
    pub duration_ms: u64,
}

/// One step of a directory walk
#[derive(Debug)]
pub enum WalkEvent {
    /// A candidate file, not yet evaluated by the selection predicate
    File(PathBuf),
    /// A directory that was not entered
    Pruned { path: PathBuf, reason: SkipReason },
    /// A directory or entry that could not be read; siblings are unaffected
    Error(walkdir::Error),
}

/// Receives per-item notifications during a run, e.g. for verbose reporting
pub trait DumpObserver {
    fn file_emitted(&mut self, _path: &Path) {}

    fn file_skipped(&mut self, _path: &Path, _reason: &SkipReason) {}

    fn directory_pruned(&mut self, _path: &Path, _reason: &SkipReason) {}

    fn walk_error(&mut self, _error: &walkdir::Error) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl DumpObserver for SilentObserver {}
