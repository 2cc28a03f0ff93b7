//! Compiled regex patterns used by text normalization and date resolution.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Matches Windows and old-Mac line endings.
pub static LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r").expect("LINE_ENDING regex"));

/// Matches three or more consecutive newlines.
pub static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES regex"));

/// Matches runs of two or more spaces/tabs.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("HORIZONTAL_WHITESPACE regex"));

// =============================================================================
// Date Patterns
// =============================================================================

/// Matches a `YYYY[./-]MM[./-]DD` shaped substring.
///
/// Gates date parsing: candidates without this shape never reach the parser.
pub static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}[./-]\d{2}[./-]\d{2}").expect("DATE_SHAPE regex"));

/// Matches a numeric date with an optional trailing time and UTC offset.
///
/// Groups: `year`, `month`, `day`, `pre` (meridiem before the time),
/// `hour`, `minute`, `second`, `post` (meridiem after the time), `offset`.
pub static DATE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        (?P<year>\d{4})[./-](?P<month>\d{1,2})[./-](?P<day>\d{1,2})\.?
        (?:
            (?:T|\s+)
            (?:(?P<pre>오전|오후|am|pm)\s*)?
            (?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?(?:\.\d+)?
            (?:\s*(?P<post>am|pm)\b)?
            \s*(?P<offset>Z|[+-]\d{2}:?\d{2})?
        )?",
    )
    .expect("DATE_SPAN regex")
});
