//! Configuration options for article extraction.
//!
//! The `Options` struct controls the body-extraction thresholds, the
//! readability fallback, and the placeholders substituted for missing
//! title or body text.

/// Placeholder substituted for a missing title.
pub const DEFAULT_TITLE_PLACEHOLDER: &str = "(제목 없음)";

/// Placeholder substituted for a missing body.
pub const DEFAULT_BODY_PLACEHOLDER: &str = "(본문 없음)";

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use news_extract::Options;
///
/// let options = Options {
///     title_placeholder: "(no title)".to_string(),
///     body_placeholder: "(no body)".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.min_hint_words, 30);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum word count for site-hint selector text to be accepted.
    ///
    /// Default: `30`
    pub min_hint_words: usize,

    /// Minimum word count for the readability path to be accepted.
    ///
    /// Higher than `min_hint_words`: structural scoring is lower precision
    /// than a hand-picked selector.
    ///
    /// Default: `50`
    pub min_readability_words: usize,

    /// Run the readability summarizer before the last-resort largest block.
    ///
    /// Has no effect without the `readability` feature unless a custom
    /// summarizer is installed.
    ///
    /// Default: `true`
    pub use_readability_fallback: bool,

    /// Title returned when no title could be resolved.
    ///
    /// Default: `"(제목 없음)"`
    pub title_placeholder: String,

    /// Body returned when every strategy produced empty text.
    ///
    /// Default: `"(본문 없음)"`
    pub body_placeholder: String,
}

impl Options {
    /// Options with English placeholders (`"(no title)"`, `"(no body)"`).
    #[must_use]
    pub fn english() -> Self {
        Self {
            title_placeholder: "(no title)".to_string(),
            body_placeholder: "(no body)".to_string(),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_hint_words: 30,
            min_readability_words: 50,
            use_readability_fallback: true,
            title_placeholder: DEFAULT_TITLE_PLACEHOLDER.to_string(),
            body_placeholder: DEFAULT_BODY_PLACEHOLDER.to_string(),
        }
    }
}
