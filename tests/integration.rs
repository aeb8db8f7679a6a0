//! Integration tests for chatvoice.
//!
//! These tests drive the public API end to end: text in, grouped messages,
//! ranking and style samples out.

use std::fs::File;
use std::io::{BufReader, Cursor, Write};
use std::sync::{Arc, Mutex};

use chatvoice::config::{ParserConfig, SelectionConfig};
use chatvoice::core::{ParseResult, Participant};
use chatvoice::parser::{TranscriptBuilder, TranscriptParser};
use chatvoice::{ChatvoiceError, parse_transcript};
use tempfile::NamedTempFile;

const BASIC_CHAT: &str = "[1/2/23, 9:00 AM] Alice: Hello
[1/2/23, 9:01 AM] Bob: Hi there
how are you?
[1/2/23, 9:02 AM] Alice: good";

// =========================================================================
// Documented scenarios
// =========================================================================

#[test]
fn test_alice_bob_fold() {
    let result = parse_transcript(BASIC_CHAT).unwrap();

    assert_eq!(result.messages_for("Alice").unwrap(), ["Hello", "good"]);
    assert_eq!(
        result.messages_for("Bob").unwrap(),
        ["Hi there\nhow are you?"]
    );
    assert_eq!(
        result.participants(),
        [Participant::new("Alice", 2), Participant::new("Bob", 1)]
    );
}

#[test]
fn test_leading_banner_is_dropped() {
    let text = format!(
        "Messages and calls are end-to-end encrypted.\nTap to learn more.\n{BASIC_CHAT}"
    );
    let result = parse_transcript(&text).unwrap();

    assert_eq!(result.messages_for("Alice").unwrap(), ["Hello", "good"]);
    assert_eq!(result.total_messages(), 3);
    let everything: Vec<&str> = result.messages().map(|(_, body)| body).collect();
    assert!(everything.iter().all(|body| !body.contains("encrypted")));
    assert_eq!(result.stats().orphaned, 2);
}

#[test]
fn test_media_placeholder_only_message() {
    let text = "[1/2/23, 9:00 AM] Alice: <Media omitted>\n\
                [1/2/23, 9:01 AM] Bob: nice photo";
    let result = parse_transcript(text).unwrap();
    assert_eq!(result.messages_for("Alice").unwrap(), ["<Media omitted>"]);
}

#[test]
fn test_equal_counts_rank_by_first_appearance() {
    let text = "[1/2/23, 9:00] Zoe: one\n\
                [1/2/23, 9:01] Adam: two\n\
                [1/2/23, 9:02] Adam: three\n\
                [1/2/23, 9:03] Zoe: four";
    let result = parse_transcript(text).unwrap();
    assert_eq!(
        result.participants(),
        [Participant::new("Zoe", 2), Participant::new("Adam", 2)]
    );
}

// =========================================================================
// Participant rule
// =========================================================================

#[test]
fn test_empty_input_rejected() {
    let err = parse_transcript("").unwrap_err();
    assert!(matches!(
        err,
        ChatvoiceError::InsufficientParticipants { found: 0 }
    ));
}

#[test]
fn test_single_sender_rejected() {
    let text = "[1/2/23, 9:00] Alice: talking\n[1/2/23, 9:01] Alice: to myself";
    let err = parse_transcript(text).unwrap_err();
    assert!(matches!(
        err,
        ChatvoiceError::InsufficientParticipants { found: 1 }
    ));
    assert!(
        err.to_string()
            .contains("chat must have at least two participants")
    );
}

#[test]
fn test_sender_with_only_blank_messages_does_not_count() {
    let text = "[1/2/23, 9:00] Alice: hi\n[1/2/23, 9:01] Bob:    \n[1/2/23, 9:02] Alice: ?";
    let err = parse_transcript(text).unwrap_err();
    assert!(err.is_insufficient_participants());
}

#[test]
fn test_three_senders_keep_top_two() {
    let text = "[1/2/23, 9:00] Carol: a\n\
                [1/2/23, 9:01] Alice: b\n\
                [1/2/23, 9:02] Bob: c\n\
                [1/2/23, 9:03] Bob: d\n\
                [1/2/23, 9:04] Alice: e\n\
                [1/2/23, 9:05] Bob: f";
    let result = parse_transcript(text).unwrap();
    assert_eq!(result.sender_count(), 3);
    assert_eq!(
        result.participants(),
        [Participant::new("Bob", 3), Participant::new("Alice", 2)]
    );
    assert_eq!(result.messages_for("Carol").unwrap(), ["a"]);

    let senders: Vec<&str> = result.messages_by_sender().senders().collect();
    assert_eq!(senders, ["Carol", "Alice", "Bob"]);
}

// =========================================================================
// Entry points
// =========================================================================

#[test]
fn test_parse_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BASIC_CHAT.as_bytes()).unwrap();
    file.flush().unwrap();

    let result = TranscriptParser::new().parse(file.path()).unwrap();
    assert_eq!(result, parse_transcript(BASIC_CHAT).unwrap());
}

#[test]
fn test_parse_file_size_cap() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BASIC_CHAT.as_bytes()).unwrap();
    file.flush().unwrap();

    let parser = TranscriptParser::with_config(ParserConfig::new().with_max_input_bytes(10));
    let err = parser.parse(file.path()).unwrap_err();
    assert!(err.is_input_rejected());
}

#[test]
fn test_parse_reader_matches_parse_str() {
    let text = "banner\r\n[1/2/23, 9:00 AM] Alice: a\r\nmore\r\n[1/2/23, 9:01 AM] Bob: b\n";
    let parser = TranscriptParser::new();

    let from_str = parser.parse_str(text).unwrap();
    let from_reader = parser.parse_reader(Cursor::new(text)).unwrap();
    assert_eq!(from_str, from_reader);
    assert_eq!(from_str.stats(), from_reader.stats());
}

#[test]
fn test_bom_file_same_result_on_every_entry_point() {
    let text = "\u{feff}[1/2/23, 9:00] Alice: hi\n[1/2/23, 9:01] Bob: yo\n[1/2/23, 9:02] Carol: c";
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();

    let parser = TranscriptParser::new();
    let from_path = parser.parse(file.path()).unwrap();
    let from_reader = parser
        .parse_reader(BufReader::new(File::open(file.path()).unwrap()))
        .unwrap();
    let from_str = parser.parse_str(text).unwrap();

    let senders: Vec<&str> = from_path.messages_by_sender().senders().collect();
    assert_eq!(senders, ["Alice", "Bob", "Carol"]);
    assert_eq!(from_reader, from_path);
    assert_eq!(from_str, from_path);
}

#[test]
fn test_bom_two_party_chat_not_rejected() {
    let text = "\u{feff}[1/2/23, 9:00] Alice: hi\n[1/2/23, 9:01] Bob: yo";
    let result = TranscriptParser::new()
        .parse_reader(Cursor::new(text))
        .unwrap();
    assert_eq!(result.sender_count(), 2);
}

#[test]
fn test_builder_incremental() {
    let config = ParserConfig::default();
    let mut builder = TranscriptBuilder::new(&config);
    for line in BASIC_CHAT.lines() {
        builder.push_line(line);
    }
    assert_eq!(builder.stats().headers, 3);

    let result = builder.finish().unwrap();
    assert_eq!(result, parse_transcript(BASIC_CHAT).unwrap());
}

#[test]
fn test_parser_is_reusable_across_threads() {
    let parser = Arc::new(TranscriptParser::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = Arc::clone(&parser);
            std::thread::spawn(move || parser.parse_str(BASIC_CHAT).unwrap())
        })
        .collect();

    let expected = parse_transcript(BASIC_CHAT).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// =========================================================================
// Sink
// =========================================================================

#[test]
fn test_sink_receives_result() {
    let seen: Arc<Mutex<Vec<Participant>>> = Arc::default();
    let store = Arc::clone(&seen);

    let parser = TranscriptParser::new().with_callback(move |result| {
        store
            .lock()
            .unwrap()
            .extend(result.participants().iter().cloned());
        Ok(())
    });
    parser.parse_str(BASIC_CHAT).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        [Participant::new("Alice", 2), Participant::new("Bob", 1)]
    );
}

#[test]
fn test_failing_sink_does_not_fail_parse() {
    let parser = TranscriptParser::new()
        .with_callback(|_| Err(ChatvoiceError::invalid_format("sink unavailable")));
    assert!(parser.parse_str(BASIC_CHAT).is_ok());
}

// =========================================================================
// Persistence and selection
// =========================================================================

#[test]
fn test_json_round_trip() {
    let result = parse_transcript(BASIC_CHAT).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let restored: ParseResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.participants(), result.participants());
    assert_eq!(restored.messages_by_sender(), result.messages_by_sender());
}

#[test]
fn test_style_sample_for_top_participant() {
    let result = parse_transcript(BASIC_CHAT).unwrap();
    let top = &result.participants()[0].name;

    let sample = result
        .style_sample(top, &SelectionConfig::default())
        .unwrap();
    assert_eq!(sample.sender, "Alice");
    assert_eq!(sample.examples, ["Hello", "good"]);
    assert!(!sample.is_truncated());
}

#[test]
fn test_style_sample_unknown_person() {
    let result = parse_transcript(BASIC_CHAT).unwrap();
    let err = result
        .style_sample("Mallory", &SelectionConfig::default())
        .unwrap_err();
    assert!(err.is_unknown_participant());
    assert!(err.user_message().contains("No messages for selected person"));
}
