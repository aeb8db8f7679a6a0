//! Transcript parser.
//!
//! Turns a raw chat export into per-sender message lists in a single forward
//! pass. Each line is classified (see [`crate::parsing`]) and fed to a small
//! state machine that keeps one open message at a time:
//!
//! - a **header** line finalizes the open message and opens a new one;
//! - a **continuation** line is appended to the open message, or dropped when
//!   nothing is open yet;
//! - **blank** lines are skipped.
//!
//! After the last line the open message is finalized, and the transcript is
//! rejected if fewer than two senders were found.
//!
//! # Example
//!
//! ```rust
//! use chatvoice::parser::TranscriptParser;
//!
//! let text = "\
//! [1/2/23, 9:00 AM] Alice: Hello
//! [1/2/23, 9:01 AM] Bob: Hi there
//! how are you?
//! [1/2/23, 9:02 AM] Alice: good";
//!
//! let result = TranscriptParser::new().parse_str(text)?;
//! assert_eq!(result.messages_for("Alice").unwrap(), ["Hello", "good"]);
//! assert_eq!(result.messages_for("Bob").unwrap(), ["Hi there\nhow are you?"]);
//! # Ok::<(), chatvoice::ChatvoiceError>(())
//! ```
//!
//! # Streaming
//!
//! [`TranscriptParser::parse_reader`] consumes any [`BufRead`] line by line and
//! gives the same result as [`TranscriptParser::parse_str`] on the same text.
//! [`TranscriptBuilder`] exposes the state machine directly for callers that
//! receive lines incrementally.

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::Message;
use crate::core::models::{ParseResult, ParseStats, SenderMessages};
use crate::error::Result;
use crate::input::{UTF8_BOM, read_transcript};
use crate::parsing::{LineKind, classify_line};

/// Receives every successful [`ParseResult`].
///
/// Attach one with [`TranscriptParser::with_sink`] to export or inspect
/// results without touching the parse itself. Sink errors are logged and
/// otherwise ignored.
///
/// Closures can be attached with [`TranscriptParser::with_callback`]:
///
/// ```rust
/// use chatvoice::parser::TranscriptParser;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// let parser = TranscriptParser::new().with_callback(move |result| {
///     counter.fetch_add(result.total_messages(), Ordering::SeqCst);
///     Ok(())
/// });
///
/// parser.parse_str("[1/2/23, 9:00] A: x\n[1/2/23, 9:01] B: y")?;
/// assert_eq!(seen.load(Ordering::SeqCst), 2);
/// # Ok::<(), chatvoice::ChatvoiceError>(())
/// ```
pub trait ResultSink: Send + Sync {
    /// Called once per successful parse.
    fn accept(&self, result: &ParseResult) -> Result<()>;
}

impl<F> ResultSink for F
where
    F: Fn(&ParseResult) -> Result<()> + Send + Sync,
{
    fn accept(&self, result: &ParseResult) -> Result<()> {
        self(result)
    }
}

/// Parser for bracketed chat transcripts.
///
/// Holds no per-call state, so one parser can be shared between threads.
#[derive(Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
    sink: Option<Arc<dyn ResultSink>>,
}

impl fmt::Debug for TranscriptParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptParser")
            .field("config", &self.config)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config, sink: None }
    }

    /// Attaches a sink that receives every successful result.
    #[must_use]
    pub fn with_sink(mut self, sink: impl ResultSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Attaches a closure as the result sink.
    #[must_use]
    pub fn with_callback<F>(self, callback: F) -> Self
    where
        F: Fn(&ParseResult) -> Result<()> + Send + Sync + 'static,
    {
        self.with_sink(callback)
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript held in memory.
    ///
    /// `\r\n` and lone `\r` are treated as line breaks.
    pub fn parse_str(&self, text: &str) -> Result<ParseResult> {
        let mut builder = TranscriptBuilder::new(&self.config);
        builder.push_lines(text);
        self.complete(builder)
    }

    /// Parses a transcript from a reader, one line at a time.
    ///
    /// Only I/O errors from the reader are reported besides the usual
    /// participant check. Invalid UTF-8 is reported as an I/O error.
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<ParseResult> {
        let mut builder = TranscriptBuilder::new(&self.config);
        let mut line = String::with_capacity(4096);

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            builder.push_lines(&line);
        }

        self.complete(builder)
    }

    /// Reads and parses a transcript file.
    ///
    /// The file must be UTF-8 and no larger than
    /// [`ParserConfig::max_input_bytes`].
    pub fn parse(&self, path: &Path) -> Result<ParseResult> {
        let text = read_transcript(path, self.config.max_input_bytes)?;
        self.parse_str(&text)
    }

    fn complete(&self, builder: TranscriptBuilder<'_>) -> Result<ParseResult> {
        let result = builder.finish()?;

        if let Some(sink) = &self.sink {
            if let Err(err) = sink.accept(&result) {
                warn!(error = %err, "transcript.sink_failed");
            }
        }

        Ok(result)
    }
}

/// The message currently being assembled.
#[derive(Debug)]
struct OpenMessage {
    sender: String,
    body: String,
}

/// Incremental line-by-line transcript state machine.
///
/// Feed lines with [`push_line`](Self::push_line) or whole blocks with
/// [`push_lines`](Self::push_lines), then call [`finish`](Self::finish).
///
/// ```rust
/// use chatvoice::config::ParserConfig;
/// use chatvoice::parser::TranscriptBuilder;
///
/// let config = ParserConfig::default();
/// let mut builder = TranscriptBuilder::new(&config);
/// builder.push_line("Messages are end-to-end encrypted.");
/// builder.push_line("[1/2/23, 9:00 AM] Alice: <Media omitted>");
/// builder.push_line("[1/2/23, 9:01 AM] Bob: nice");
///
/// assert_eq!(builder.stats().orphaned, 1);
/// let result = builder.finish()?;
/// assert_eq!(result.messages_for("Alice").unwrap(), ["<Media omitted>"]);
/// # Ok::<(), chatvoice::ChatvoiceError>(())
/// ```
#[derive(Debug)]
pub struct TranscriptBuilder<'c> {
    placeholder: &'c str,
    started: bool,
    current: Option<OpenMessage>,
    messages: SenderMessages,
    stats: ParseStats,
}

impl<'c> TranscriptBuilder<'c> {
    /// Creates an empty builder.
    pub fn new(config: &'c ParserConfig) -> Self {
        Self {
            placeholder: &config.media_placeholder,
            started: false,
            current: None,
            messages: SenderMessages::new(),
            stats: ParseStats::default(),
        }
    }

    /// Feeds a block of complete lines separated by `\n`, `\r\n` or `\r`.
    pub fn push_lines(&mut self, text: &str) {
        for line in text.split(['\n', '\r']) {
            self.push_line(line);
        }
    }

    /// Feeds a single line (without its terminator).
    ///
    /// A byte-order mark at the very start of the input is ignored.
    pub fn push_line(&mut self, line: &str) {
        let line = if self.started {
            line
        } else {
            self.started = true;
            line.strip_prefix(UTF8_BOM).unwrap_or(line)
        };

        match classify_line(line) {
            LineKind::Blank => {}
            LineKind::Header(header) => {
                self.stats.lines += 1;
                self.stats.headers += 1;
                self.flush();
                self.current = Some(OpenMessage {
                    sender: header.sender.to_string(),
                    body: header.body_first_line.to_string(),
                });
            }
            LineKind::Unattributed => {
                self.stats.lines += 1;
                self.stats.orphaned += 1;
                self.flush();
            }
            LineKind::Continuation(text) => {
                self.stats.lines += 1;
                match &mut self.current {
                    Some(open) => {
                        self.stats.continuations += 1;
                        open.body.push('\n');
                        open.body.push_str(text);
                    }
                    None => self.stats.orphaned += 1,
                }
            }
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Finalizes the open message and builds the result.
    pub fn finish(mut self) -> Result<ParseResult> {
        self.flush();

        debug!(
            lines = self.stats.lines,
            headers = self.stats.headers,
            continuations = self.stats.continuations,
            orphaned = self.stats.orphaned,
            dropped_empty = self.stats.dropped_empty,
            senders = self.messages.len(),
            messages = self.messages.total_messages(),
            "transcript.parsed"
        );

        ParseResult::from_parts(self.messages, self.stats).inspect_err(|err| {
            debug!(error = %err, "transcript.rejected");
        })
    }

    /// Closes the open message, keeping it if its body survives trimming.
    fn flush(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };

        let message = Message::new(open.sender, open.body.trim());
        if !message.body.is_empty() || message.is_media(self.placeholder) {
            self.messages.push(&message.sender, message.body);
        } else {
            self.stats.dropped_empty += 1;
        }
    }
}
