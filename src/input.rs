//! Reading transcript files.
//!
//! The parser itself works on text; this module is the file-reading side:
//! it enforces the upload size cap and the UTF-8 requirement before any
//! parsing happens.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ChatvoiceError, Result};

pub(crate) const UTF8_BOM: char = '\u{feff}';

/// Reads a transcript file into a `String`.
///
/// - files larger than `max_bytes` are rejected before reading
/// - content must be valid UTF-8
/// - a leading byte-order mark is removed
///
/// # Example
///
/// ```rust,no_run
/// use chatvoice::input::read_transcript;
/// use std::path::Path;
///
/// let text = read_transcript(Path::new("chat.txt"), 5 * 1024 * 1024)?;
/// # Ok::<(), chatvoice::ChatvoiceError>(())
/// ```
pub fn read_transcript(path: &Path, max_bytes: u64) -> Result<String> {
    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(ChatvoiceError::input_too_large(size, max_bytes));
    }

    // Bounded read in case the file grew after the metadata check.
    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    File::open(path)?
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;

    let read = bytes.len() as u64;
    if read > max_bytes {
        return Err(ChatvoiceError::input_too_large(read, max_bytes));
    }

    let text = String::from_utf8(bytes)
        .map_err(|err| ChatvoiceError::utf8(path.display().to_string(), err))?;

    debug!(bytes = read, "transcript.read");

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
