//! Error types for srcdump
//!
//! Inner components never terminate the process. They return a [`DumpError`]
//! and the CLI decides how to report it and which exit status to use.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a dump run
#[derive(Debug, Error)]
pub enum DumpError {
    /// A root argument that is neither a regular file nor a directory
    #[error("{} is neither a valid file nor a directory.", path.display())]
    InvalidPath { path: PathBuf },

    /// A selected file whose bytes are not valid UTF-8
    #[error("Could not read file due to encoding issues: {}", path.display())]
    Decode { path: PathBuf },

    /// A selected file that could not be read at all
    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a record to the output stream failed
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),

    /// Configuration could not be loaded or is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, DumpError>;
