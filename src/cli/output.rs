//! Diagnostic output for srcdump
//!
//! Standard output carries the records, so every message here goes to
//! standard error. Styling is applied only when stderr is a terminal.

use console::style;
use std::path::Path;

use crate::error::DumpError;
use crate::filters::SkipReason;
use crate::scanner::{DumpObserver, DumpStats};

/// Output handler for consistent CLI diagnostics
#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("Error:").red().bold().for_stderr(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", style("Warning:").yellow().for_stderr(), message);
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{}", style(message).dim().for_stderr());
        }
    }

    /// Report the error that ended a run
    ///
    /// A decode failure is reported as a warning naming the file; everything
    /// else is an error with its full cause chain.
    pub fn failure(&self, error: &anyhow::Error) {
        match error.downcast_ref::<DumpError>() {
            Some(decode @ DumpError::Decode { .. }) => self.warning(&decode.to_string()),
            _ => self.error(&format!("{:#}", error)),
        }
    }

    /// Print run statistics in verbose mode
    pub fn summary(&self, stats: &DumpStats) {
        if !self.verbose || self.quiet {
            return;
        }
        eprintln!(
            "{} {} {}",
            style("✔").green().for_stderr(),
            style("Dumped files").dim().for_stderr(),
            style(format!("({})", stats.files_emitted)).yellow().bold().for_stderr()
        );
        self.breakdown("skipped files", stats.files_skipped);
        self.breakdown("pruned directories", stats.directories_pruned);
        if stats.walk_errors > 0 {
            self.breakdown("unreadable entries", stats.walk_errors);
        }
        eprintln!("  {} {}ms", style("took").dim().for_stderr(), stats.duration_ms);
    }

    fn breakdown(&self, label: &str, count: usize) {
        eprintln!(
            "  {} {} {}",
            style("•").cyan().for_stderr(),
            style(count.to_string()).yellow().bold().for_stderr(),
            style(label).dim().for_stderr()
        );
    }
}

impl DumpObserver for Output {
    fn file_skipped(&mut self, path: &Path, reason: &SkipReason) {
        self.verbose(&format!("Skipped file: {} ({})", path.display(), reason));
    }

    fn directory_pruned(&mut self, path: &Path, reason: &SkipReason) {
        self.verbose(&format!("Skipped directory: {} ({})", path.display(), reason));
    }

    fn walk_error(&mut self, error: &walkdir::Error) {
        self.verbose(&format!("Could not read directory entry: {}", error));
    }
}
