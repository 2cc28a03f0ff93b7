//! # news-extract
//!
//! Article extraction for heterogeneous news-site HTML.
//!
//! Given raw HTML and the page URL, produces a best-effort
//! `(title, body, date)` triple without a hand-written scraper per site.
//! The body comes from a fallback chain: a per-host CSS selector hint, then
//! a readability summary, then the largest text block of the page. Title
//! and date come from metadata, headings, byline markup and free text.
//!
//! ## Quick Start
//!
//! ```rust
//! use news_extract::extract;
//!
//! let html = r#"<html><head>
//!     <meta property="og:title" content="Council approves plan">
//!     <meta property="article:published_time" content="2024-01-05T10:00:00+09:00">
//! </head><body><article><p>The council voted on Friday.</p></article></body></html>"#;
//!
//! let result = extract(html, "https://example.com/news/1", None);
//! assert_eq!(result.title, "Council approves plan");
//! assert_eq!(result.date.as_deref(), Some("2024-01-05T10:00:00+09:00"));
//! println!("{}", result.body);
//! ```
//!
//! ## Degraded output
//!
//! Extraction never fails. A missing title or body is replaced by the
//! placeholders in [`Options`] (`(제목 없음)` / `(본문 없음)` by default) and
//! an unparseable date is `None`.

mod error;
mod extract;
mod normalize;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Body extraction strategies and the fallback chain.
pub mod extractor;

/// Title and publication date resolution.
pub mod metadata;

/// Removal of non-content elements.
pub mod sanitize;

/// Per-host selector hints.
pub mod site_hints;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Extractor;
pub use extractor::{extract_selector_text, largest_block, Summarizer};
pub use metadata::{resolve_date, resolve_title, DateParser};
pub use normalize::normalize_text;
pub use options::{Options, DEFAULT_BODY_PLACEHOLDER, DEFAULT_TITLE_PLACEHOLDER};
pub use result::{BodySource, ExtractionResult};
pub use sanitize::sanitize;
pub use site_hints::{SelectorChain, SiteHints};

/// Extracts an article with default options and the built-in site hints.
///
/// `hint`, when given, replaces the site hint for `url`.
///
/// # Example
///
/// ```rust
/// use news_extract::{extract, SelectorChain};
///
/// let chain: SelectorChain = "div#story".parse()?;
/// let html = r#"<div id="story"><p>Short story.</p></div>"#;
/// let result = extract(html, "https://example.com/", Some(&chain));
/// assert_eq!(result.body, "Short story.");
/// # Ok::<(), news_extract::Error>(())
/// ```
#[must_use]
pub fn extract(html: &str, url: &str, hint: Option<&SelectorChain>) -> ExtractionResult {
    extract_with_options(html, url, hint, &Options::default())
}

/// Extracts an article with custom options.
#[must_use]
pub fn extract_with_options(
    html: &str,
    url: &str,
    hint: Option<&SelectorChain>,
    options: &Options,
) -> ExtractionResult {
    Extractor::new(options.clone()).extract(html, url, hint)
}

/// Extracts an article from undecoded bytes.
///
/// `content_type` is the HTTP `Content-Type` header value, if any; its
/// charset takes precedence over in-document declarations.
#[must_use]
pub fn extract_bytes(
    bytes: &[u8],
    content_type: Option<&str>,
    url: &str,
    hint: Option<&SelectorChain>,
) -> ExtractionResult {
    Extractor::default().extract_bytes(bytes, content_type, url, hint)
}
