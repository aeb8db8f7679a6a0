//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::MessageSource;
use crate::error::{ChatvoiceError, Result};

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Body`
/// - Multi-line bodies are quoted
/// - Encoding: UTF-8
pub fn write_csv<S: MessageSource + ?Sized>(source: &S, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = build_writer(file);
    write_rows(&mut writer, source)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a CSV string.
pub fn to_csv<S: MessageSource + ?Sized>(source: &S) -> Result<String> {
    let mut writer = build_writer(Vec::new());
    write_rows(&mut writer, source)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ChatvoiceError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn build_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b';').from_writer(inner)
}

fn write_rows<W: Write, S: MessageSource + ?Sized>(
    writer: &mut csv::Writer<W>,
    source: &S,
) -> Result<()> {
    writer.write_record(["Sender", "Body"])?;
    for (sender, body) in source.message_rows() {
        writer.write_record([sender, body])?;
    }
    Ok(())
}
