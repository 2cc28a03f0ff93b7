//! Publication date resolution.
//!
//! Candidate sources, in priority order:
//! 1. byline datestamp markup (Naver-style `media_end_head_info_datestamp_time`)
//! 2. published-time `<meta>` tags
//! 3. the first `YYYY[./-]MM[./-]DD` substring of the document text
//!
//! A candidate only reaches the parser if it contains a date-shaped
//! substring; otherwise the parser is handed an empty string and fails,
//! so unrelated text never turns into a guessed date.

use dom_query::{Document, Selection};
use tracing::trace;

use super::date_parser::{DateParser, LenientDateParser};
use crate::dom;
use crate::patterns::DATE_SHAPE;

/// Byline elements carrying the publication timestamp.
const BYLINE_DATE_SELECTOR: &str = "span.media_end_head_info_datestamp_time, \
     em.media_end_head_info_datestamp_time, \
     span.t11";

/// Machine-readable timestamp attribute on byline elements.
const BYLINE_DATE_ATTRIBUTE: &str = "data-date-time";

/// Published-time meta tags.
const PUBLISHED_META_SELECTOR: &str = "meta[property='article:published_time'], \
     meta[property='og:article:published_time'], \
     meta[name='pubdate'], \
     meta[name='date'], \
     meta[itemprop='datePublished']";

/// Where a date candidate was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Byline,
    Meta,
    FreeText,
}

/// A raw date string and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate {
    pub source: DateSource,
    pub text: String,
}

/// Find the highest-priority date candidate in the raw document.
#[must_use]
pub fn date_candidate(doc: &Document) -> Option<DateCandidate> {
    byline_date(doc)
        .map(|text| DateCandidate { source: DateSource::Byline, text })
        .or_else(|| {
            meta_date(doc).map(|text| DateCandidate { source: DateSource::Meta, text })
        })
        .or_else(|| {
            free_text_date(doc).map(|text| DateCandidate { source: DateSource::FreeText, text })
        })
}

fn byline_date(doc: &Document) -> Option<String> {
    let byline = dom::select_first(doc, BYLINE_DATE_SELECTOR)?;
    if let Some(stamp) = dom::non_empty_attribute(&byline, BYLINE_DATE_ATTRIBUTE) {
        return Some(stamp);
    }
    let text = dom::selection_text(&byline, " ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn meta_date(doc: &Document) -> Option<String> {
    doc.select(PUBLISHED_META_SELECTOR)
        .nodes()
        .iter()
        .find_map(|node| dom::non_empty_attribute(&Selection::from(*node), "content"))
}

fn free_text_date(doc: &Document) -> Option<String> {
    let text = dom::document_text(doc, " ");
    DATE_SHAPE.find(&text).map(|m| m.as_str().to_string())
}

/// Parse a candidate into ISO-8601, gated on a date-shaped substring.
#[must_use]
pub fn normalize_date(candidate: &str, parser: &dyn DateParser) -> Option<String> {
    let input = if DATE_SHAPE.is_match(candidate) { candidate } else { "" };
    parser.parse(input).map(|date| date.to_iso8601())
}

/// Resolve the publication date with the default parser.
///
/// `url` is accepted for per-site date rules; none exist yet.
#[must_use]
pub fn resolve_date(doc: &Document, url: &str) -> Option<String> {
    resolve_date_with(doc, url, &LenientDateParser::default())
}

/// Resolve the publication date with a caller-supplied parser.
#[must_use]
pub fn resolve_date_with(doc: &Document, url: &str, parser: &dyn DateParser) -> Option<String> {
    let candidate = date_candidate(doc)?;
    let date = normalize_date(&candidate.text, parser);
    trace!(
        url,
        source = ?candidate.source,
        candidate = %candidate.text,
        resolved = ?date,
        "date candidate"
    );
    date
}
