//! Output format selection.
//!
//! Library-side format types that don't depend on the CLI. The writers
//! themselves live in [`crate::core::output`]; this module only dispatches.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatvoice::Result<()> {
//! use chatvoice::format::{OutputFormat, write_to_format};
//! use chatvoice::parse_transcript;
//!
//! let result = parse_transcript("[1/2/23, 9:00] Alice: Hello\n[1/2/23, 9:01] Bob: Hi")?;
//!
//! write_to_format(&result, "output.json", OutputFormat::Json)?;
//!
//! // Or detect the format from the extension
//! let format = OutputFormat::from_path("output.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::output::MessageSource;
use crate::error::ChatvoiceError;

/// Output format for parse results and style samples.
///
/// - [`Json`](OutputFormat::Json) - the persisted `{participants, messages_by_sender}` form
/// - [`Jsonl`](OutputFormat::Jsonl) - one `{"sender", "body"}` object per line
/// - [`Csv`](OutputFormat::Csv) - `Sender;Body` rows
///
/// # Example
///
/// ```rust
/// use chatvoice::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    ///
    /// The only format that [`ParseResult`](crate::core::ParseResult) can
    /// be read back from.
    #[default]
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatvoice::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("samples/alice.csv").unwrap();
    /// assert_eq!(format, OutputFormat::Csv);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatvoiceError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatvoiceError::invalid_format(format!(
                "Unknown file extension: '.{ext}'. Expected one of: json, jsonl, csv"
            ))),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a parse result or style sample to a file in the given format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format<T>(value: &T, path: &str, format: OutputFormat) -> Result<(), ChatvoiceError>
where
    T: MessageSource + Serialize + ?Sized,
{
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(value, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(value, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(value, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a parse result or style sample to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string<T>(value: &T, format: OutputFormat) -> Result<String, ChatvoiceError>
where
    T: MessageSource + Serialize + ?Sized,
{
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(value),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(value),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(value),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatvoiceError {
    ChatvoiceError::invalid_format(format!(
        "Output format {format} requires the '{}' feature to be enabled",
        format.required_feature()
    ))
}
