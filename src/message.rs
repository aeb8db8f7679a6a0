//! The unit of parser output.
//!
//! A [`Message`] is one finalized entry of a transcript: the sender and the
//! body reconstructed from a header line plus its continuation lines.
//!
//! # Example
//!
//! ```
//! use chatvoice::Message;
//!
//! let msg = Message::new("Alice", "Hello\nhow are you?");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello\nhow are you?");
//! ```

use serde::{Deserialize, Serialize};

/// A finalized chat message.
///
/// Bodies are already trimmed and may contain `\n` when the original message
/// spanned several lines of the export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author, exactly as it appeared in the header.
    pub sender: String,

    /// Trimmed message body.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body is exactly the given media placeholder.
    ///
    /// ```
    /// use chatvoice::Message;
    /// use chatvoice::config::MEDIA_PLACEHOLDER;
    ///
    /// assert!(Message::new("Bob", "<Media omitted>").is_media(MEDIA_PLACEHOLDER));
    /// ```
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.body == placeholder
    }
}
