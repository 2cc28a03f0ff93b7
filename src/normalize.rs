//! Whitespace and newline cleanup for extracted text.

use crate::patterns::{EXCESS_NEWLINES, HORIZONTAL_WHITESPACE, LINE_ENDING};

/// Normalize extracted text.
///
/// Converts `\r\n` and `\r` to `\n`, collapses three or more newlines to a
/// blank line, collapses runs of spaces/tabs to one space and trims the
/// result. Idempotent.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let text = LINE_ENDING.replace_all(text, "\n");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    let text = HORIZONTAL_WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
