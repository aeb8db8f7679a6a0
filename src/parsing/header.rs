//! Header-line recognition for bracketed transcript exports.
//!
//! A header line starts a new message:
//!
//! ```text
//! [1/15/24, 10:30:45 AM] Alice: Hello
//! [15/01/2024, 22:05] Bob: Hi there
//! ```
//!
//! Everything else is either blank or a continuation of the previous message.
//! The timestamp is validated for shape only and never interpreted.

use std::sync::LazyLock;

use regex::Regex;

/// The single header grammar.
///
/// - date: `D{1,2}/D{1,2}/D{2,4}`
/// - time: `D{1,2}:D{2}` with optional `:D{2}` seconds
/// - optional AM/PM marker (any case) before the closing bracket
/// - sender: non-colon characters up to the first `:`
/// - body: rest of the line, possibly empty
const HEADER_PATTERN: &str = r"(?i)^\[(?P<timestamp>(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),\s*(?P<time>\d{1,2}:\d{2}(?::\d{2})?)\s*(?:AM|PM)?)\]\s*(?P<sender>[^:]+?):\s*(?P<body>.*)$";

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"));

/// A line recognized as the start of a new message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// Bracket contents, e.g. `1/15/24, 10:30:45 AM`. Opaque.
    pub timestamp_text: &'a str,
    /// Trimmed, non-empty sender name.
    pub sender: &'a str,
    /// Trimmed text after `Sender:`. May be empty.
    pub body_first_line: &'a str,
}

/// Classification of a single transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Starts a new message.
    Header(HeaderLine<'a>),
    /// Has the header shape but the sender field is blank.
    ///
    /// Closes the open message without opening a new one.
    Unattributed,
    /// Anything else; carries the trimmed text.
    Continuation(&'a str),
}

/// Classifies one raw line (surrounding whitespace is trimmed first).
///
/// # Example
///
/// ```rust
/// use chatvoice::parsing::{LineKind, classify_line};
///
/// match classify_line("[1/2/23, 9:00 AM] Alice: Hello") {
///     LineKind::Header(header) => {
///         assert_eq!(header.sender, "Alice");
///         assert_eq!(header.body_first_line, "Hello");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
///
/// assert_eq!(classify_line("   "), LineKind::Blank);
/// assert_eq!(classify_line("just text"), LineKind::Continuation("just text"));
/// ```
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    match match_header(line) {
        Some(Some(header)) => LineKind::Header(header),
        Some(None) => LineKind::Unattributed,
        None => LineKind::Continuation(line),
    }
}

/// Matches an already-trimmed line against the header grammar.
///
/// Returns `None` when the line is not header-shaped, `Some(None)` when it is
/// but the sender is blank.
fn match_header(line: &str) -> Option<Option<HeaderLine<'_>>> {
    let caps = HEADER_REGEX.captures(line)?;

    let timestamp_text = caps.name("timestamp").map_or("", |m| m.as_str().trim());
    let sender = caps.name("sender").map_or("", |m| m.as_str().trim());
    let body_first_line = caps.name("body").map_or("", |m| m.as_str().trim());

    if sender.is_empty() {
        return Some(None);
    }

    Some(Some(HeaderLine {
        timestamp_text,
        sender,
        body_first_line,
    }))
}

/// Returns `true` if the line would start a new message.
pub fn is_header(line: &str) -> bool {
    matches!(classify_line(line), LineKind::Header(_))
}
