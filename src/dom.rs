//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate offering the handful of tree
//! operations the extraction pipeline needs: parsing, attribute access and,
//! most importantly, depth-first text extraction with a configurable
//! separator between text nodes.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

/// Elements whose text children are never treated as readable text.
const NON_TEXT_PARENTS: &[&str] = &["script", "style", "template"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get a non-blank attribute value, trimmed.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    let value = sel.attr(name)?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

// === Querying ===

/// Select with a selector that may be invalid.
///
/// `dom_query` panics on unparseable selectors in `select`; caller-supplied
/// selectors go through here instead. `None` means the selector is invalid
/// or matched nothing.
#[must_use]
pub fn try_select<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.try_select(selector)
}

/// First node matching `selector`, in document order.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

// === Text Content ===

/// Collect the stripped, non-empty text nodes under `node` in document order.
///
/// Text inside `script`, `style` and `template` is skipped, as are comment
/// nodes, so this works on the raw document as well as the sanitized one.
#[must_use]
pub fn text_fragments(node: &NodeRef) -> Vec<String> {
    let mut fragments = Vec::new();
    if node.is_text() {
        push_fragment(&mut fragments, node);
        return fragments;
    }

    for descendant in node.descendants() {
        if !descendant.is_text() || inside_non_text_parent(&descendant) {
            continue;
        }
        push_fragment(&mut fragments, &descendant);
    }
    fragments
}

fn push_fragment(fragments: &mut Vec<String>, text_node: &NodeRef) {
    let text = text_node.text();
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        fragments.push(trimmed.to_string());
    }
}

fn inside_non_text_parent(text_node: &NodeRef) -> bool {
    text_node
        .parent()
        .and_then(|parent| tag_name(&parent))
        .is_some_and(|tag| NON_TEXT_PARENTS.contains(&tag.as_str()))
}

/// Text of `node` and its descendants, stripped per text node and joined
/// with `separator`.
#[must_use]
pub fn joined_text(node: &NodeRef, separator: &str) -> String {
    text_fragments(node).join(separator)
}

/// Text of the first node in a selection, joined with `separator`.
#[must_use]
pub fn selection_text(sel: &Selection, separator: &str) -> String {
    sel.nodes()
        .first()
        .map(|node| joined_text(node, separator))
        .unwrap_or_default()
}

/// Text of the whole document, joined with `separator`.
#[must_use]
pub fn document_text(doc: &Document, separator: &str) -> String {
    joined_text(&doc.root(), separator)
}

/// Count whitespace-separated tokens.
#[inline]
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
