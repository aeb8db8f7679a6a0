//! JSON Lines (JSONL) output writer.
//!
//! One `{"sender": ..., "body": ...}` object per line, grouped by sender in
//! first-appearance order. Handy for feeding examples into ML tooling.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use super::MessageSource;
use crate::error::Result;

#[derive(Serialize)]
struct JsonlRecord<'a> {
    sender: &'a str,
    body: &'a str,
}

/// Writes messages to JSONL (JSON Lines) format.
pub fn write_jsonl<S: MessageSource + ?Sized>(source: &S, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, source)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl<S: MessageSource + ?Sized>(source: &S) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, source)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write, S: MessageSource + ?Sized>(writer: &mut W, source: &S) -> Result<()> {
    for (sender, body) in source.message_rows() {
        serde_json::to_writer(&mut *writer, &JsonlRecord { sender, body })?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionConfig;
    use crate::parse_transcript;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    const CHAT: &str = "[1/2/23, 9:00] Alice: Hello\n\
                        [1/2/23, 9:01] Bob: Hi\n\
                        second line\n\
                        [1/2/23, 9:02] Alice: Bye";

    #[test]
    fn test_write_jsonl_basic() {
        let result = parse_transcript(CHAT).unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_jsonl(&result, path).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["body"], "Hello");

        let last: serde_json::Value = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(last["sender"], "Bob");
        assert_eq!(last["body"], "Hi\nsecond line");
    }

    #[test]
    fn test_to_jsonl_style_sample() {
        let result = parse_transcript(CHAT).unwrap();
        let sample = result
            .style_sample("Alice", &SelectionConfig::new().with_max_examples(Some(1)))
            .unwrap();

        let jsonl = to_jsonl(&sample).unwrap();
        assert_eq!(jsonl, "{\"sender\":\"Alice\",\"body\":\"Hello\"}\n");
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let result = parse_transcript(CHAT).unwrap();
        let jsonl = to_jsonl(&result).unwrap();
        assert!(!jsonl.starts_with('['));
        assert_eq!(jsonl.lines().count(), 3);
    }
}
