//! Configuration types for the parser and the selection step.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how transcripts are read and which placeholder is kept
//! - [`SelectionConfig`] - how many style examples are handed downstream
//!
//! # Example
//!
//! ```rust
//! use chatvoice::config::{ParserConfig, SelectionConfig};
//! use chatvoice::parser::TranscriptParser;
//!
//! let config = ParserConfig::new().with_max_input_bytes(1024 * 1024);
//! let parser = TranscriptParser::with_config(config);
//!
//! let selection = SelectionConfig::new().with_max_examples(Some(50));
//! ```

use serde::{Deserialize, Serialize};

/// Literal text exporters write in place of an attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Default upload cap for transcript files (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of style examples kept for a selected participant.
pub const DEFAULT_MAX_EXAMPLES: usize = 300;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatvoice::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_media_placeholder("<attached media>")
///     .with_max_input_bytes(64 * 1024);
/// assert_eq!(config.media_placeholder, "<attached media>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Placeholder body that is always retained (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Maximum file size accepted by [`TranscriptParser::parse`](crate::parser::TranscriptParser::parse)
    /// (default: 5 MiB). Does not apply to in-memory or reader input.
    pub max_input_bytes: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder literal.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the maximum accepted file size in bytes.
    #[must_use]
    pub fn with_max_input_bytes(mut self, max: u64) -> Self {
        self.max_input_bytes = max;
        self
    }
}

/// Configuration for picking style examples of one participant.
///
/// # Example
///
/// ```rust
/// use chatvoice::config::SelectionConfig;
///
/// let keep_all = SelectionConfig::new().with_max_examples(None);
/// assert_eq!(keep_all.max_examples, None);
/// assert_eq!(SelectionConfig::default().max_examples, Some(300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Keep at most this many messages, oldest first (default: 300).
    /// `None` keeps every message.
    pub max_examples: Option<usize>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_examples: Some(DEFAULT_MAX_EXAMPLES),
        }
    }
}

impl SelectionConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of examples.
    #[must_use]
    pub fn with_max_examples(mut self, max: Option<usize>) -> Self {
        self.max_examples = max;
        self
    }
}
