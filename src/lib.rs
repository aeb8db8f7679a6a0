//! # Chatvoice
//!
//! A Rust library for parsing exported chat transcripts into per-participant
//! message collections, so that a participant's messages can be used as
//! examples of how they write.
//!
//! ## Overview
//!
//! Transcripts use the bracketed-timestamp convention, one message header
//! per line:
//!
//! ```text
//! [1/2/23, 9:01 AM] Bob: Hi there
//! how are you?
//! ```
//!
//! Lines that don't start with a header belong to the message above them.
//! The parser groups every message by sender, keeps first-appearance order,
//! and ranks the two most active participants.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatvoice::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let result = parse_transcript(
//!         "[1/2/23, 9:00 AM] Alice: Hello\n\
//!          [1/2/23, 9:01 AM] Bob: Hi there\n\
//!          how are you?\n\
//!          [1/2/23, 9:02 AM] Alice: good",
//!     )?;
//!
//!     assert_eq!(result.participants()[0], Participant::new("Alice", 2));
//!
//!     let sample = result.style_sample("Bob", &SelectionConfig::default())?;
//!     assert_eq!(sample.examples, ["Hi there\nhow are you?"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`TranscriptParser`](parser::TranscriptParser), the
//!   incremental [`TranscriptBuilder`](parser::TranscriptBuilder) and the
//!   [`ResultSink`](parser::ResultSink) hook
//! - [`parsing`] — single-line header grammar
//! - [`config`] — [`ParserConfig`](config::ParserConfig), [`SelectionConfig`](config::SelectionConfig)
//! - [`core`] — results, ranking, selection and output writers
//! - [`format`] — [`OutputFormat`](format::OutputFormat) dispatch
//! - [`input`] — size-capped, UTF-8-checked file reading
//! - [`error`] — [`ChatvoiceError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod input;
pub mod message;
pub mod parser;
pub mod parsing;

pub use error::{ChatvoiceError, Result};
pub use message::Message;

use crate::core::ParseResult;
use crate::parser::TranscriptParser;

/// Parses transcript text with the default configuration.
///
/// Shorthand for `TranscriptParser::new().parse_str(text)`.
///
/// # Errors
///
/// Returns [`ChatvoiceError::InsufficientParticipants`] if the text has
/// fewer than two distinct senders.
pub fn parse_transcript(text: &str) -> Result<ParseResult> {
    TranscriptParser::new().parse_str(text)
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatvoice::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::parse_transcript;

    pub use crate::error::{ChatvoiceError, Result};

    pub use crate::config::{ParserConfig, SelectionConfig};
    pub use crate::parser::{ResultSink, TranscriptBuilder, TranscriptParser};

    pub use crate::core::{ParseResult, ParseStats, Participant, SenderMessages, StyleSample};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{JsonDumpSink, to_json, to_jsonl, write_json, write_jsonl};
}
