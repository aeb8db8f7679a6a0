//! Core data models for parsed transcripts.
//!
//! - [`SenderMessages`] - insertion-ordered mapping of sender to message bodies
//! - [`Participant`] - a ranked `{name, count}` summary entry
//! - [`ParseStats`] - line-level counters collected during a scan
//! - [`ParseResult`] - the parser output

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Message;
use crate::config::SelectionConfig;
use crate::core::processor::{
    MIN_PARTICIPANTS, StyleSample, TOP_PARTICIPANTS, rank_participants, select_style_sample,
};
use crate::error::{ChatvoiceError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct SenderEntry {
    name: String,
    messages: Vec<String>,
}

/// Mapping from sender name to that sender's message bodies.
///
/// Senders iterate in the order they were first seen; each sender's bodies
/// keep their order of appearance. Entries are created lazily by
/// [`push`](Self::push).
///
/// Serializes as a JSON object whose keys follow first-appearance order.
///
/// # Example
///
/// ```rust
/// use chatvoice::core::SenderMessages;
///
/// let mut map = SenderMessages::new();
/// map.push("Bob", "first");
/// map.push("Alice", "second");
/// map.push("Bob", "third");
///
/// let senders: Vec<&str> = map.senders().collect();
/// assert_eq!(senders, ["Bob", "Alice"]);
/// assert_eq!(map.get("Bob").unwrap(), ["first", "third"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderMessages {
    entries: Vec<SenderEntry>,
    index: HashMap<String, usize>,
}

impl SenderMessages {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a body to the sender's list, creating the entry on first sight.
    pub fn push(&mut self, sender: &str, body: impl Into<String>) {
        let slot = match self.index.get(sender) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push(SenderEntry {
                    name: sender.to_string(),
                    messages: Vec::new(),
                });
                self.index.insert(sender.to_string(), slot);
                slot
            }
        };
        self.entries[slot].messages.push(body.into());
    }

    /// Returns the bodies sent by `sender`, if any.
    pub fn get(&self, sender: &str) -> Option<&[String]> {
        self.index
            .get(sender)
            .map(|&slot| self.entries[slot].messages.as_slice())
    }

    /// Returns `true` if `sender` has at least one message.
    pub fn contains(&self, sender: &str) -> bool {
        self.index.contains_key(sender)
    }

    /// Iterates `(sender, bodies)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.messages.as_slice()))
    }

    /// Iterates sender names in first-appearance order.
    pub fn senders(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of distinct senders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no sender has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages across all senders.
    pub fn total_messages(&self) -> usize {
        self.entries.iter().map(|entry| entry.messages.len()).sum()
    }
}

impl Serialize for SenderMessages {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.messages)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SenderMessages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SenderMessagesVisitor;

        impl<'de> Visitor<'de> for SenderMessagesVisitor {
            type Value = SenderMessages;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of sender names to message lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut out = SenderMessages::new();
                while let Some((sender, bodies)) = access.next_entry::<String, Vec<String>>()? {
                    for body in bodies {
                        out.push(&sender, body);
                    }
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(SenderMessagesVisitor)
    }
}

/// A participant summary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Sender name
    pub name: String,
    /// Number of retained messages
    pub count: usize,
}

impl Participant {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Counters collected while scanning a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Non-blank lines seen
    pub lines: usize,
    /// Lines that opened a new message
    pub headers: usize,
    /// Lines folded into an open message
    pub continuations: usize,
    /// Lines that could not be attributed to any sender
    pub orphaned: usize,
    /// Finalized messages dropped because their body was empty
    pub dropped_empty: usize,
}

/// Output of a successful parse.
///
/// Holds every sender's messages and the derived top-participant ranking.
/// The ranking is computed whenever a `ParseResult` is built and cannot be
/// edited independently.
///
/// A `ParseResult` always has at least two senders.
///
/// # Serialization
///
/// ```json
/// {
///   "participants": [{"name": "Alice", "count": 2}, {"name": "Bob", "count": 1}],
///   "messages_by_sender": {"Alice": ["Hello", "good"], "Bob": ["Hi there\nhow are you?"]}
/// }
/// ```
///
/// Deserializing reads `messages_by_sender` only, recomputes `participants`
/// and re-checks the two-participant rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredResult")]
pub struct ParseResult {
    participants: Vec<Participant>,
    messages_by_sender: SenderMessages,
    #[serde(skip)]
    stats: ParseStats,
}

#[derive(Deserialize)]
struct StoredResult {
    messages_by_sender: SenderMessages,
}

impl TryFrom<StoredResult> for ParseResult {
    type Error = ChatvoiceError;

    fn try_from(stored: StoredResult) -> Result<Self> {
        Self::from_parts(stored.messages_by_sender, ParseStats::default())
    }
}

impl ParseResult {
    /// Builds a result from accumulated messages, enforcing the
    /// two-participant rule and deriving the ranking.
    pub(crate) fn from_parts(messages_by_sender: SenderMessages, stats: ParseStats) -> Result<Self> {
        if messages_by_sender.len() < MIN_PARTICIPANTS {
            return Err(ChatvoiceError::insufficient_participants(
                messages_by_sender.len(),
            ));
        }

        let participants = rank_participants(&messages_by_sender, TOP_PARTICIPANTS);

        Ok(Self {
            participants,
            messages_by_sender,
            stats,
        })
    }

    /// Builds a result from already-finalized messages.
    ///
    /// Useful when messages were persisted elsewhere and need to be ranked
    /// again. Bodies are taken as-is.
    ///
    /// ```rust
    /// use chatvoice::Message;
    /// use chatvoice::core::ParseResult;
    ///
    /// let result = ParseResult::from_messages(vec![
    ///     Message::new("Alice", "Hello"),
    ///     Message::new("Bob", "Hi"),
    ///     Message::new("Bob", "How are you?"),
    /// ])?;
    /// assert_eq!(result.participants()[0].name, "Bob");
    /// # Ok::<(), chatvoice::ChatvoiceError>(())
    /// ```
    pub fn from_messages(messages: impl IntoIterator<Item = Message>) -> Result<Self> {
        let mut by_sender = SenderMessages::new();
        for msg in messages {
            by_sender.push(&msg.sender, msg.body);
        }
        Self::from_parts(by_sender, ParseStats::default())
    }

    /// Top participants (at most two), highest message count first.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Every sender's messages, in first-appearance order.
    pub fn messages_by_sender(&self) -> &SenderMessages {
        &self.messages_by_sender
    }

    /// Messages sent by `sender`, if any.
    pub fn messages_for(&self, sender: &str) -> Option<&[String]> {
        self.messages_by_sender.get(sender)
    }

    /// Number of distinct senders.
    pub fn sender_count(&self) -> usize {
        self.messages_by_sender.len()
    }

    /// Total number of retained messages.
    pub fn total_messages(&self) -> usize {
        self.messages_by_sender.total_messages()
    }

    /// Scan counters. Zeroed for results not produced by the parser.
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Iterates every message as `(sender, body)`, grouped by sender.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages_by_sender.iter().flat_map(|(sender, bodies)| {
            bodies.iter().map(move |body| (sender, body.as_str()))
        })
    }

    /// Picks style examples for one participant.
    ///
    /// See [`select_style_sample`].
    pub fn style_sample(&self, name: &str, config: &SelectionConfig) -> Result<StyleSample> {
        select_style_sample(self, name, config)
    }

    /// Consumes the result, returning the sender mapping.
    pub fn into_messages_by_sender(self) -> SenderMessages {
        self.messages_by_sender
    }
}
