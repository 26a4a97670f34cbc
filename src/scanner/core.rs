use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::directory::TreeWalker;
use super::types::{DumpObserver, DumpStats, WalkEvent};
use crate::config::DumpConfig;
use crate::emit::Emitter;
use crate::error::{DumpError, Result};
use crate::filters::{FilterDecision, SelectionPredicate};
use crate::strip::CommentStripper;

/// Dumps files under one or more roots as delimited records
#[derive(Debug, Clone)]
pub struct Dumper {
    config: DumpConfig,
    predicate: SelectionPredicate,
}

impl Dumper {
    pub fn new(config: &DumpConfig) -> Self {
        Self {
            config: config.clone(),
            predicate: SelectionPredicate::new(&config.filter),
        }
    }

    /// Build an emitter for `writer` configured from this dumper's output and comment settings
    pub fn emitter<W: Write>(&self, writer: W) -> Emitter<W> {
        let stripper = CommentStripper::with_extra_tags(&self.config.comment_syntax);
        Emitter::new(writer, &self.config.output, stripper)
    }

    /// Dump every root in order
    ///
    /// Stops at the first root that is neither a file nor a directory, and at
    /// the first selected file that fails to read or decode. Records written
    /// before the failure stay in the output; the emitter is flushed either way.
    pub fn dump_paths<W: Write>(
        &self,
        roots: &[PathBuf],
        emitter: &mut Emitter<W>,
        observer: &mut dyn DumpObserver,
    ) -> Result<DumpStats> {
        let start_time = Instant::now();
        let mut stats = DumpStats::default();

        let mut result = Ok(());
        for root in roots {
            result = self.dump_root(root, &mut *emitter, &mut *observer, &mut stats);
            if result.is_err() {
                break;
            }
        }
        let flushed = emitter.flush();
        result?;
        flushed?;

        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        tracing::info!(
            "Dumped {} files ({} skipped, {} directories pruned) in {}ms",
            stats.files_emitted,
            stats.files_skipped,
            stats.directories_pruned,
            stats.duration_ms
        );
        Ok(stats)
    }

    fn dump_root<W: Write>(
        &self,
        root: &Path,
        emitter: &mut Emitter<W>,
        observer: &mut dyn DumpObserver,
        stats: &mut DumpStats,
    ) -> Result<()> {
        if root.is_dir() {
            tracing::debug!("Walking directory root {}", root.display());
            self.dump_directory(root, emitter, observer, stats)
        } else if root.is_file() {
            tracing::debug!("Processing file root {}", root.display());
            self.dump_file(root, emitter, observer, stats)
        } else {
            Err(DumpError::InvalidPath {
                path: root.to_path_buf(),
            })
        }
    }

    fn dump_directory<W: Write>(
        &self,
        root: &Path,
        emitter: &mut Emitter<W>,
        observer: &mut dyn DumpObserver,
        stats: &mut DumpStats,
    ) -> Result<()> {
        let walker = TreeWalker::new(&self.predicate, &self.config.walk);

        for event in walker.walk(root) {
            match event {
                WalkEvent::File(path) => self.dump_file(&path, emitter, observer, stats)?,
                WalkEvent::Pruned { path, reason } => {
                    stats.directories_pruned += 1;
                    observer.directory_pruned(&path, &reason);
                }
                WalkEvent::Error(e) => {
                    stats.walk_errors += 1;
                    observer.walk_error(&e);
                }
            }
        }

        Ok(())
    }

    fn dump_file<W: Write>(
        &self,
        path: &Path,
        emitter: &mut Emitter<W>,
        observer: &mut dyn DumpObserver,
        stats: &mut DumpStats,
    ) -> Result<()> {
        match self.predicate.evaluate(path) {
            FilterDecision::Process => {
                emitter.emit_file(path)?;
                stats.files_emitted += 1;
                observer.file_emitted(path);
            }
            FilterDecision::Skip(reason) => {
                stats.files_skipped += 1;
                observer.file_skipped(path, &reason);
            }
        }
        Ok(())
    }
}
