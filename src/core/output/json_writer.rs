//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::error::Result;

/// Writes a value to a file as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "participants": [{"name": "Alice", "count": 2}, {"name": "Bob", "count": 1}],
///   "messages_by_sender": {"Alice": ["Hello", "good"], "Bob": ["Hi there"]}
/// }
/// ```
pub fn write_json<T: Serialize + ?Sized>(value: &T, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts a value to a pretty-printed JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
