//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_json`] / [`to_json`] - the full structure as pretty JSON - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one `{sender, body}` object per line - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - `Sender;Body` rows with semicolon delimiter - requires `csv-output` feature
//!
//! JSON takes anything serializable; JSONL and CSV take any [`MessageSource`],
//! which both [`ParseResult`] and [`StyleSample`] implement.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatvoice::Result<()> {
//! use chatvoice::core::output::{to_csv, write_json, write_jsonl};
//! use chatvoice::parse_transcript;
//!
//! let result = parse_transcript("[1/2/23, 9:00] Alice: Hi\n[1/2/23, 9:01] Bob: Hey")?;
//!
//! write_json(&result, "chat.json")?;
//! write_jsonl(&result, "chat.jsonl")?;
//! let csv_string = to_csv(&result)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod dump;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use dump::JsonDumpSink;
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use super::models::ParseResult;
use super::processor::StyleSample;

/// Anything that can be flattened into `(sender, body)` rows.
pub trait MessageSource {
    /// Rows in output order.
    fn message_rows(&self) -> impl Iterator<Item = (&str, &str)>;
}

impl MessageSource for ParseResult {
    fn message_rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages()
    }
}

impl MessageSource for StyleSample {
    fn message_rows(&self) -> impl Iterator<Item = (&str, &str)> {
        let sender = self.sender.as_str();
        self.examples.iter().map(move |body| (sender, body.as_str()))
    }
}
