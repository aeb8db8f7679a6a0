//! Unified error types for chatvoice.
//!
//! This module provides a single [`ChatvoiceError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **The parser** raises exactly one error kind,
//!   [`InsufficientParticipants`](ChatvoiceError::InsufficientParticipants),
//!   and only after the whole transcript has been scanned. Malformed lines
//!   are absorbed, never reported.
//! - **Collaborators** (file reading, selection, output writers) get their own
//!   variants so callers can match on them.
//! - **Application users** get clear, actionable messages via `Display`.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatvoice operations.
///
/// # Example
///
/// ```rust
/// use chatvoice::error::Result;
/// use chatvoice::core::ParseResult;
///
/// fn load(text: &str) -> Result<ParseResult> {
///     chatvoice::parse_transcript(text)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatvoiceError>;

/// The error type for all chatvoice operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatvoiceError {
    /// Fewer than two senders produced at least one message.
    ///
    /// Downstream consumers need two distinct voices, so a transcript that
    /// yields zero or one sender is rejected as a whole.
    #[error("chat must have at least two participants (found {found})")]
    InsufficientParticipants {
        /// Number of distinct senders with at least one retained message
        found: usize,
    },

    /// A participant was requested that has no messages in the transcript.
    #[error("no messages found for participant '{name}'")]
    UnknownParticipant {
        /// The requested sender name
        name: String,
    },

    /// The input file exceeds the configured size cap.
    #[error("transcript too large: {size} bytes (maximum: {max} bytes)")]
    InputTooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Configured maximum in bytes
        max: u64,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when file content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Unknown or unsupported output format.
    #[error("Invalid output format: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatvoiceError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatvoiceError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatvoiceError {
    /// Creates an insufficient participants error.
    pub fn insufficient_participants(found: usize) -> Self {
        ChatvoiceError::InsufficientParticipants { found }
    }

    /// Creates an unknown participant error.
    pub fn unknown_participant(name: impl Into<String>) -> Self {
        ChatvoiceError::UnknownParticipant { name: name.into() }
    }

    /// Creates an input-too-large error.
    pub fn input_too_large(size: u64, max: u64) -> Self {
        ChatvoiceError::InputTooLarge { size, max }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatvoiceError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatvoiceError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if the transcript had fewer than two participants.
    pub fn is_insufficient_participants(&self) -> bool {
        matches!(self, ChatvoiceError::InsufficientParticipants { .. })
    }

    /// Returns `true` if this is an unknown participant error.
    pub fn is_unknown_participant(&self) -> bool {
        matches!(self, ChatvoiceError::UnknownParticipant { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatvoiceError::Io(_))
    }

    /// Returns `true` if the input was rejected before parsing
    /// (too large or not UTF-8).
    pub fn is_input_rejected(&self) -> bool {
        matches!(
            self,
            ChatvoiceError::InputTooLarge { .. } | ChatvoiceError::Utf8 { .. }
        )
    }

    /// Returns a short message suitable for showing to an end user.
    ///
    /// The wording is meant to tell the user what to fix in the upload.
    pub fn user_message(&self) -> String {
        match self {
            ChatvoiceError::InsufficientParticipants { .. } => {
                "Parsing failed: the chat must have at least two participants.".to_string()
            }
            ChatvoiceError::UnknownParticipant { name } => {
                format!("No messages for selected person '{name}'.")
            }
            ChatvoiceError::InputTooLarge { max, .. } => {
                format!("The file is too large. Maximum upload size is {max} bytes.")
            }
            ChatvoiceError::Utf8 { .. } => {
                "The file is not valid UTF-8 text. Please upload a plain text chat export."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}
