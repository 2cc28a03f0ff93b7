//! The extraction pipeline.
//!
//! One call parses the HTML twice: the raw document feeds the title and date
//! resolvers, and a sanitized copy feeds the body strategy chain. Nothing is
//! shared between calls.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dom;
use crate::encoding;
use crate::extractor::{default_summarizer, ExtractionContext, StrategyChain, Summarizer};
use crate::metadata::{resolve_date_with, resolve_title, DateParser, LenientDateParser};
use crate::normalize::normalize_text;
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::sanitize::sanitized_document;
use crate::site_hints::{SelectorChain, SiteHints};

/// Reusable, thread-safe article extractor.
///
/// Holds configuration only; every [`Extractor::extract`] call works on its
/// own documents, so one instance can be shared across threads.
///
/// # Example
///
/// ```rust
/// use news_extract::{Extractor, Options};
///
/// let extractor = Extractor::new(Options::english());
/// let result = extractor.extract("<html><body></body></html>", "https://example.com/", None);
/// assert_eq!(result.title, "(no title)");
/// assert_eq!(result.body, "(no body)");
/// assert_eq!(result.date, None);
/// ```
#[derive(Clone)]
pub struct Extractor {
    options: Options,
    site_hints: SiteHints,
    summarizer: Arc<dyn Summarizer>,
    date_parser: Arc<dyn DateParser>,
}

impl Extractor {
    /// Extractor with the built-in site hints, the default summarizer and
    /// the lenient date parser.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            site_hints: SiteHints::default(),
            summarizer: default_summarizer(),
            date_parser: Arc::new(LenientDateParser::default()),
        }
    }

    /// Replace the host → selector table.
    #[must_use]
    pub fn with_site_hints(mut self, site_hints: SiteHints) -> Self {
        self.site_hints = site_hints;
        self
    }

    /// Replace the readability summarizer.
    #[must_use]
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Replace the date parser.
    #[must_use]
    pub fn with_date_parser(mut self, date_parser: Arc<dyn DateParser>) -> Self {
        self.date_parser = date_parser;
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn site_hints(&self) -> &SiteHints {
        &self.site_hints
    }

    /// Extract title, body and date from an HTML page.
    ///
    /// `hint` overrides the site-hint lookup for `url`. Never fails: missing
    /// title or body come back as the configured placeholders, an
    /// unparseable date as `None`.
    #[must_use]
    pub fn extract(&self, html: &str, url: &str, hint: Option<&SelectorChain>) -> ExtractionResult {
        trace!(url, bytes = html.len(), "extracting article");

        let raw = dom::parse(html);
        let title = resolve_title(&raw);
        let date = resolve_date_with(&raw, url, self.date_parser.as_ref());
        drop(raw);

        let sanitized = sanitized_document(html);
        let hint = hint.or_else(|| self.site_hints.resolve(url));
        if let Some(chain) = hint {
            debug!(url, hint = %chain, "using selector hint");
        }
        let ctx = ExtractionContext { document: &sanitized, hint };

        let chain = StrategyChain::standard(&self.options, Arc::clone(&self.summarizer));
        let (body, body_source) = match chain.run(&ctx) {
            Some((source, text)) => {
                let body = normalize_text(&text);
                if body.is_empty() {
                    (self.options.body_placeholder.clone(), None)
                } else {
                    (body, Some(source))
                }
            }
            None => (self.options.body_placeholder.clone(), None),
        };

        let title = if title.is_empty() {
            self.options.title_placeholder.clone()
        } else {
            title
        };

        debug!(
            url,
            title = %title,
            body_source = body_source.map(|s| s.as_str()),
            body_chars = body.chars().count(),
            date = date.as_deref(),
            "extraction finished"
        );

        ExtractionResult { title, body, date, body_source }
    }

    /// Decode `bytes` (see [`encoding::transcode_to_utf8`]) and extract.
    #[must_use]
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
        url: &str,
        hint: Option<&SelectorChain>,
    ) -> ExtractionResult {
        let html = encoding::transcode_to_utf8(bytes, content_type);
        self.extract(&html, url, hint)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("options", &self.options)
            .field("site_hints", &self.site_hints.len())
            .finish_non_exhaustive()
    }
}
