//! Readability fallback.
//!
//! A readability-style summarizer reduces the sanitized document to the
//! fragment it believes holds the article; the largest block inside that
//! fragment becomes the body candidate. The bar is higher than for selector
//! text because structural scoring is less precise than a known selector.
//!
//! The default summarizer is `dom_smoothie` (feature `readability`).

use std::sync::Arc;

use dom_query::Document;
use tracing::debug;

use super::{largest_block, threshold, BodyStrategy, ExtractionContext, Outcome};
use crate::result::BodySource;

/// Reduces a full HTML document to its main-content fragment.
pub trait Summarizer: Send + Sync {
    /// Return the main-content HTML fragment, or `None` when no article
    /// could be identified.
    fn summarize(&self, html: &str) -> Option<String>;
}

/// Summarizer backed by `dom_smoothie`'s Readability port.
#[cfg(feature = "readability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSmoothieSummarizer;

#[cfg(feature = "readability")]
impl Summarizer for DomSmoothieSummarizer {
    fn summarize(&self, html: &str) -> Option<String> {
        use dom_smoothie::Readability;

        let doc = Document::from(html);
        let mut reader = match Readability::with_document(doc, None, None) {
            Ok(reader) => reader,
            Err(err) => {
                debug!(error = %err, "readability setup failed");
                return None;
            }
        };
        match reader.parse() {
            Ok(article) => Some(article.content.to_string()),
            Err(err) => {
                debug!(error = %err, "readability found no article");
                None
            }
        }
    }
}

/// Summarizer that never finds anything.
///
/// Used when the crate is built without the `readability` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSummarizer;

impl Summarizer for NoSummarizer {
    fn summarize(&self, _html: &str) -> Option<String> {
        None
    }
}

/// The summarizer used unless the caller installs another one.
#[must_use]
pub fn default_summarizer() -> Arc<dyn Summarizer> {
    #[cfg(feature = "readability")]
    {
        Arc::new(DomSmoothieSummarizer)
    }

    #[cfg(not(feature = "readability"))]
    {
        Arc::new(NoSummarizer)
    }
}

/// Strategy: summarize, then take the largest block of the summary.
pub struct ReadabilityStrategy {
    summarizer: Arc<dyn Summarizer>,
    min_words: usize,
}

impl ReadabilityStrategy {
    #[must_use]
    pub fn new(summarizer: Arc<dyn Summarizer>, min_words: usize) -> Self {
        Self { summarizer, min_words }
    }
}

impl BodyStrategy for ReadabilityStrategy {
    fn source(&self) -> BodySource {
        BodySource::Readability
    }

    fn attempt(&self, ctx: &ExtractionContext<'_>) -> Outcome {
        let html = ctx.document.html();
        let Some(fragment) = self.summarizer.summarize(&html) else {
            return Outcome::Unavailable;
        };

        let summary = Document::from(fragment);
        match largest_block(&summary) {
            Some(block) => threshold(block.text(), self.min_words),
            None => Outcome::Rejected { words: 0 },
        }
    }
}
