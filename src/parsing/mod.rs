//! Line-level parsing utilities.
//!
//! This module holds the pieces of the transcript grammar that operate on a
//! single line. The stateful, multi-line logic lives in [`crate::parser`].

pub mod header;

pub use header::{HeaderLine, LineKind, classify_line, is_header};
