//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Which body strategy produced [`ExtractionResult::body`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySource {
    /// Text collected from a site hint or caller-supplied selector chain.
    SiteHint,

    /// Largest block inside the readability summary.
    Readability,

    /// Largest block of the whole sanitized document (last resort).
    LargestBlock,
}

impl BodySource {
    /// Stable lowercase name, used in logs and CLI output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SiteHint => "site_hint",
            Self::Readability => "readability",
            Self::LargestBlock => "largest_block",
        }
    }
}

/// Result of extracting one article.
///
/// `title` and `body` are never empty: the configured placeholders stand in
/// for missing values. `date` is an ISO-8601 timestamp or `None`.
///
/// Serializes as `{"title": .., "body": .., "date": ..|null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Article title, or the title placeholder.
    pub title: String,

    /// Normalized body text, or the body placeholder.
    pub body: String,

    /// Publication timestamp in ISO-8601 with seconds precision.
    pub date: Option<String>,

    /// Strategy that produced the body; `None` when the placeholder is used.
    #[serde(skip)]
    pub body_source: Option<BodySource>,
}

impl ExtractionResult {
    /// True unless `title` is the given placeholder.
    #[must_use]
    pub fn has_title(&self, placeholder: &str) -> bool {
        self.title != placeholder
    }

    /// True unless `body` is the given placeholder.
    #[must_use]
    pub fn has_body(&self, placeholder: &str) -> bool {
        self.body != placeholder
    }
}
