//! Record emission
//!
//! Each selected file becomes one delimited record: a start marker naming the
//! path, the (optionally stripped, optionally compressed) content, and an end
//! marker. A record is assembled in memory and written in one call, so a file
//! that fails to read or decode leaves nothing behind in the output.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::{DumpError, Result};
use crate::filters::path::path_text;
use crate::strip::CommentStripper;

pub mod compress;

/// Line printed before a compressed body
pub const COMPRESSED_LABEL: &str = "COMPRESSED CODE: ";

/// Record delimiter layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecordFormat {
    /// `<< START: path >>` ... `<< END >>`
    #[default]
    Markers,
    /// `======== File Path: path ========` ... `=====`
    Banner,
}

impl RecordFormat {
    pub fn start_marker(self, path: &str) -> String {
        match self {
            RecordFormat::Markers => format!("<< START: {} >>", path),
            RecordFormat::Banner => format!("======== File Path: {} ========", path),
        }
    }

    pub fn end_marker(self) -> &'static str {
        match self {
            RecordFormat::Markers => "<< END >>",
            RecordFormat::Banner => "==================================",
        }
    }
}

/// How compressed bytes are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CompressedEncoding {
    /// `b'...'` byte literal
    #[default]
    Escaped,
    /// Compressed bytes verbatim
    Raw,
}

/// Read a source file as UTF-8 text
///
/// Invalid UTF-8 is [`DumpError::Decode`]; any other failure is
/// [`DumpError::Read`]. The file handle is closed before this returns.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| DumpError::Decode { path: path.to_path_buf() })
}

/// Writes records to an output stream
pub struct Emitter<W: Write> {
    writer: W,
    options: OutputConfig,
    stripper: CommentStripper,
    records: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W, options: &OutputConfig, stripper: CommentStripper) -> Self {
        Self {
            writer,
            options: options.clone(),
            stripper,
            records: 0,
        }
    }

    /// Read, transform and write one file
    pub fn emit_file(&mut self, path: &Path) -> Result<()> {
        let content = read_source(path)?;
        self.emit(path, &content)
    }

    /// Transform `content` and write it as the record for `path`.
    /// Comments are stripped first, then the stripped text is compressed.
    pub fn emit(&mut self, path: &Path, content: &str) -> Result<()> {
        let record = self.render(path, content)?;
        self.writer.write_all(&record)?;
        self.records += 1;
        tracing::debug!("Emitted {} ({} bytes)", path.display(), record.len());
        Ok(())
    }

    /// Build the full record bytes without writing them
    pub fn render(&self, path: &Path, content: &str) -> Result<Vec<u8>> {
        let format = self.options.format;
        let text = if self.options.no_comments {
            self.stripper.strip_for_path(content, path)
        } else {
            content.to_string()
        };

        let mut record = Vec::with_capacity(text.len() + 64);
        record.extend_from_slice(format.start_marker(&path_text(path)).as_bytes());
        record.push(b'\n');

        if self.options.compress {
            let compressed = compress::deflate(&text)?;
            record.extend_from_slice(COMPRESSED_LABEL.as_bytes());
            record.push(b'\n');
            match self.options.compressed_encoding {
                CompressedEncoding::Escaped => {
                    record.extend_from_slice(compress::escape_bytes(&compressed).as_bytes())
                }
                CompressedEncoding::Raw => record.extend_from_slice(&compressed),
            }
        } else {
            record.extend_from_slice(text.as_bytes());
        }
        record.push(b'\n');

        record.extend_from_slice(format.end_marker().as_bytes());
        record.extend_from_slice(b"\n\n");
        Ok(record)
    }

    pub fn records_written(&self) -> usize {
        self.records
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
