//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args`] also knows how to turn itself into the library's
//! [`ParserConfig`] and [`SelectionConfig`], so the binary stays thin.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_EXAMPLES, DEFAULT_MAX_INPUT_BYTES, ParserConfig, SelectionConfig};

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "parsed_chat.json";

/// Parse a bracket-timestamp chat export and extract per-participant
/// message examples.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatvoice")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatvoice chat.txt
    chatvoice chat.txt -f csv -o messages.csv
    chatvoice chat.txt -p Alice -f jsonl
    chatvoice chat.txt -p Alice --all --dump debug.json")]
pub struct Args {
    /// Path to the exported chat transcript
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write style examples for this participant instead of the full result
    #[arg(short = 'p', long, value_name = "NAME")]
    pub participant: Option<String>,

    /// Maximum number of examples kept for --participant
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_EXAMPLES)]
    pub limit: usize,

    /// Keep every message of --participant
    #[arg(long, conflicts_with = "limit")]
    pub all: bool,

    /// Also dump the full parse result as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub dump: Option<String>,

    /// Reject transcripts larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_bytes: u64,

    /// Tracing filter directives (written to stderr)
    #[arg(long, env = "CHATVOICE_LOG", default_value = "chatvoice=warn")]
    pub log_filter: String,
}

impl Args {
    /// Parser settings derived from the command line.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_max_input_bytes(self.max_bytes)
    }

    /// Selection settings derived from `--limit` / `--all`.
    pub fn selection_config(&self) -> SelectionConfig {
        let max = if self.all { None } else { Some(self.limit) };
        SelectionConfig::new().with_max_examples(max)
    }

    /// Output path with the extension adjusted to `--format` when the
    /// default path is used.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }

        let lib_format: crate::format::OutputFormat = self.format.into();
        format!("parsed_chat.{}", lib_format.extension())
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - Full structure, can be loaded back
/// - [`Jsonl`](OutputFormat::Jsonl) - One `{sender, body}` per line
/// - [`Csv`](OutputFormat::Csv) - `Sender;Body` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty JSON (default)
    #[default]
    Json,

    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
