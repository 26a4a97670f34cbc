//! # srcdump - dump a source tree as delimited text records
//!
//! Walks one or more roots, selects files through an ordered predicate
//! (hidden, file type, ignore strings, path-or-content inclusion), prunes
//! excluded directories before entering them, and writes every selected file
//! as a `<< START: path >>` ... `<< END >>` record. Content can have its
//! comments stripped and can be zlib-compressed.
//!
//! ## Quick Start
//!
//! ```bash
//! # Dump all non-hidden Python files with comments removed
//! srcdump src --file-types .py --ignore-hidden --no-comments > dump.txt
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use srcdump::{DumpConfig, Dumper, SilentObserver};
//! use std::path::PathBuf;
//!
//! let config = DumpConfig::load(None, None::<()>)?;
//! let dumper = Dumper::new(&config);
//! let mut emitter = dumper.emitter(std::io::stdout());
//! dumper.dump_paths(&[PathBuf::from(".")], &mut emitter, &mut SilentObserver)?;
//! # Ok::<(), srcdump::DumpError>(())
//! ```

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod filters;
pub mod scanner;
pub mod strip;

pub use config::DumpConfig;
pub use emit::Emitter;
pub use error::{DumpError, Result};
pub use filters::SelectionPredicate;
pub use scanner::{DumpObserver, DumpStats, Dumper, SilentObserver};
pub use strip::CommentStripper;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
