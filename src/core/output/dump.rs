//! Optional JSON dump of every parse result.

use std::path::PathBuf;

use tracing::debug;

use super::json_writer::write_json;
use crate::core::models::ParseResult;
use crate::error::{ChatvoiceError, Result};
use crate::parser::ResultSink;

/// A [`ResultSink`] that writes each result to a JSON file.
///
/// The file is overwritten on every successful parse.
///
/// # Example
///
/// ```rust,no_run
/// use chatvoice::core::output::JsonDumpSink;
/// use chatvoice::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new().with_sink(JsonDumpSink::new("parsed.json"));
/// ```
#[derive(Debug, Clone)]
pub struct JsonDumpSink {
    path: PathBuf,
}

impl JsonDumpSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ResultSink for JsonDumpSink {
    fn accept(&self, result: &ParseResult) -> Result<()> {
        let path = self.path.to_str().ok_or_else(|| {
            ChatvoiceError::invalid_format(format!(
                "dump path is not valid UTF-8: {}",
                self.path.display()
            ))
        })?;

        write_json(result, path)?;
        debug!(path, senders = result.sender_count(), "transcript.dumped");
        Ok(())
    }
}
