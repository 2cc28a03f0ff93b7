//! Title resolution.
//!
//! Priority, first non-empty match wins:
//! 1. `<meta property="og:title">` content
//! 2. first `h1`/`h2` with text
//! 3. the document `<title>`

use dom_query::{Document, Selection};

use crate::dom;

const OG_TITLE_SELECTOR: &str = r#"meta[property="og:title"]"#;
const HEADING_SELECTOR: &str = "h1, h2";
const TITLE_SELECTOR: &str = "title";

/// Resolve the article title from the raw document.
///
/// Returns an empty string when nothing is found; the pipeline substitutes
/// the placeholder.
#[must_use]
pub fn resolve_title(doc: &Document) -> String {
    og_title(doc)
        .or_else(|| heading_title(doc))
        .or_else(|| document_title(doc))
        .unwrap_or_default()
}

fn og_title(doc: &Document) -> Option<String> {
    doc.select(OG_TITLE_SELECTOR)
        .nodes()
        .iter()
        .find_map(|node| dom::non_empty_attribute(&Selection::from(*node), "content"))
        .map(|title| collapse_whitespace(&title))
}

fn heading_title(doc: &Document) -> Option<String> {
    doc.select(HEADING_SELECTOR)
        .nodes()
        .iter()
        .map(|node| collapse_whitespace(&dom::joined_text(node, " ")))
        .find(|title| !title.is_empty())
}

fn document_title(doc: &Document) -> Option<String> {
    let title = collapse_whitespace(&dom::selection_text(&doc.select(TITLE_SELECTOR), " "));
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
