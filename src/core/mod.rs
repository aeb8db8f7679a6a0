//! Core processing logic for chatvoice.
//!
//! This module contains:
//! - [`models`] - Parse results and the per-sender message map
//! - [`processor`] - Participant ranking and style-sample selection
//! - [`output`] - Format writers (JSON, JSONL, CSV) and the JSON dump sink
//!
//! # Quick Start
//!
//! ```rust
//! use chatvoice::config::SelectionConfig;
//! use chatvoice::core::ParseResult;
//! use chatvoice::Message;
//!
//! let result = ParseResult::from_messages(vec![
//!     Message::new("Alice", "Hello"),
//!     Message::new("Bob", "Hi"),
//! ])?;
//! let sample = result.style_sample("Bob", &SelectionConfig::default())?;
//! assert_eq!(sample.examples, ["Hi"]);
//! # Ok::<(), chatvoice::ChatvoiceError>(())
//! ```

pub mod models;
pub mod output;
pub mod processor;

pub use models::{ParseResult, ParseStats, Participant, SenderMessages};
pub use output::MessageSource;
pub use processor::{
    MIN_PARTICIPANTS, StyleSample, TOP_PARTICIPANTS, rank_participants, select_style_sample,
};

// Re-export Message from the crate root
pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{JsonDumpSink, to_json, to_jsonl, write_json, write_jsonl};
