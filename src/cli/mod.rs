//! Command-line interface for srcdump
//!
//! Parses flags with clap, layers them over the file and environment
//! configuration, and streams records for every root to standard output.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::config::DumpConfig;
use crate::emit::{CompressedEncoding, RecordFormat};
use crate::scanner::Dumper;

mod output;

pub use output::Output;

#[derive(Parser, Debug)]
#[command(
    name = "srcdump",
    version = crate::VERSION,
    about = "Dump a source tree as delimited text records",
    long_about = "Walks files and directories, selects files by hidden status, file type, \
                  ignore strings and path or content matches, and writes each selected file \
                  to standard output between START and END markers, optionally with comments \
                  stripped and content zlib-compressed."
)]
pub struct Cli {
    /// Files or directories to dump
    #[arg(value_name = "PATH", required_unless_present = "show_config")]
    pub paths: Vec<PathBuf>,

    /// Only include paths ending with one of these suffixes (e.g. .py .js)
    #[arg(long, value_name = "SUFFIX", num_args = 1..)]
    pub file_types: Vec<String>,

    /// Exclude paths containing any of these substrings and skip matching directories
    #[arg(long, visible_alias = "ignore-file-strings", value_name = "STRING", num_args = 1..)]
    pub ignore: Vec<String>,

    /// Exclude files and directories whose name starts with '.'
    #[arg(long)]
    pub ignore_hidden: bool,

    /// Include files whose path contains any of these substrings
    #[arg(long, value_name = "STRING", num_args = 1..)]
    pub path_contains: Vec<String>,

    /// Include files whose content contains any of these substrings
    #[arg(long, value_name = "STRING", num_args = 1..)]
    pub content_contains: Vec<String>,

    /// Strip comments from supported file types
    #[arg(long)]
    pub no_comments: bool,

    /// Compress file content with zlib
    #[arg(long)]
    pub compress: bool,

    /// Record delimiter layout
    #[arg(long, value_enum)]
    pub format: Option<RecordFormat>,

    /// How compressed bytes are written
    #[arg(long, value_enum)]
    pub compressed_encoding: Option<CompressedEncoding>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Use custom configuration file (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Command-line values layered over every other configuration source.
/// Flags that were not given are left out so lower layers show through.
#[derive(Debug, Default, Serialize)]
pub struct ConfigOverrides {
    filter: FilterOverrides,
    output: OutputOverrides,
    walk: WalkOverrides,
}

#[derive(Debug, Default, Serialize)]
struct FilterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_contains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_contains: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize)]
struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    no_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<RecordFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compressed_encoding: Option<CompressedEncoding>,
}

#[derive(Debug, Default, Serialize)]
struct WalkOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    follow_symlinks: Option<bool>,
}

fn list(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            filter: FilterOverrides {
                file_types: list(&self.file_types),
                ignore: list(&self.ignore),
                ignore_hidden: flag(self.ignore_hidden),
                path_contains: list(&self.path_contains),
                content_contains: list(&self.content_contains),
            },
            output: OutputOverrides {
                no_comments: flag(self.no_comments),
                compress: flag(self.compress),
                format: self.format,
                compressed_encoding: self.compressed_encoding,
            },
            walk: WalkOverrides {
                follow_symlinks: flag(self.follow_symlinks),
            },
        }
    }

    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let config = DumpConfig::load(self.config.as_deref(), Some(self.overrides()))
            .context("Failed to load configuration")?;

        if self.show_config {
            print!("{}", config.to_toml().context("Failed to render configuration")?);
            return Ok(());
        }

        let mut output = Output::new(self.verbose > 0, self.quiet);
        let dumper = Dumper::new(&config);
        let stdout = io::stdout();
        let mut emitter = dumper.emitter(BufWriter::new(stdout.lock()));

        let stats = dumper.dump_paths(&self.paths, &mut emitter, &mut output)?;
        output.summary(&stats);
        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info"),
        2 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
