//! Configuration management for srcdump
//!
//! A single immutable [`DumpConfig`] is built once at startup from layered
//! sources (see [`core`]) and passed by reference to the walker, the selection
//! predicate and the emitter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::emit::{CompressedEncoding, RecordFormat};
use crate::strip::CommentSyntax;

pub mod core;


/// Main configuration structure for srcdump
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// File selection criteria
    pub filter: FilterConfig,

    /// Per-record transforms and layout
    pub output: OutputConfig,

    /// Traversal options
    pub walk: WalkConfig,

    /// Additional file-type tags for comment stripping, layered over the
    /// built-in table
    pub comment_syntax: BTreeMap<String, CommentSyntax>,
}

/// Selection criteria consumed by the selection predicate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Allowed path suffixes; empty allows everything
    pub file_types: Vec<String>,

    /// A path containing any of these substrings is excluded, and a directory
    /// whose name contains one is never entered
    pub ignore: Vec<String>,

    /// Exclude files and directories whose name starts with the hidden marker
    pub ignore_hidden: bool,

    /// When non-empty, the path must contain at least one of these
    /// (unless `content_contains` matches)
    pub path_contains: Vec<String>,

    /// When non-empty, the file content must contain at least one of these
    /// (unless `path_contains` matches)
    pub content_contains: Vec<String>,
}

/// Post-selection transforms and record layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Strip comments according to the file type
    pub no_comments: bool,

    /// Compress the (possibly stripped) content with zlib
    pub compress: bool,

    /// Record delimiter layout
    pub format: RecordFormat,

    /// How compressed bytes are rendered
    pub compressed_encoding: CompressedEncoding,
}

/// Directory traversal options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
}
