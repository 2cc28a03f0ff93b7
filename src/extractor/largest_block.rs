//! Largest-block heuristic.
//!
//! Picks the `article`, `section` or `div` with the most words of text
//! (descendants included). Used inside the readability path and as the last
//! resort over the whole sanitized document.
//!
//! Cost is O(n·d) for n candidates of average subtree size d, fine for one
//! on-demand document.

use dom_query::{Document, NodeRef};

use super::{threshold, BodyStrategy, ExtractionContext, Outcome};
use crate::dom;
use crate::result::BodySource;

/// Container elements considered as body candidates.
const CANDIDATE_SELECTOR: &str = "article, section, div";

/// A candidate container and its word count.
#[derive(Clone, Copy)]
pub struct CandidateBlock<'a> {
    pub node: NodeRef<'a>,
    pub words: usize,
}

impl CandidateBlock<'_> {
    /// Block text with text nodes separated by newlines.
    #[must_use]
    pub fn text(&self) -> String {
        dom::joined_text(&self.node, "\n")
    }
}

/// Find the candidate with the highest word count.
///
/// Ties go to the element that comes first in document order. Elements with
/// no words are never selected, so `None` means no candidate had text.
#[must_use]
pub fn largest_block(doc: &Document) -> Option<CandidateBlock<'_>> {
    let candidates = doc.select(CANDIDATE_SELECTOR);
    let mut best: Option<CandidateBlock<'_>> = None;
    let mut max_words = 0;

    for node in candidates.nodes() {
        let words = dom::word_count(&dom::joined_text(node, " "));
        if words > max_words {
            max_words = words;
            best = Some(CandidateBlock { node: *node, words });
        }
    }

    best
}

/// Strategy running [`largest_block`] over the sanitized document.
#[derive(Debug, Clone, Copy)]
pub struct LargestBlockStrategy {
    min_words: usize,
}

impl LargestBlockStrategy {
    #[must_use]
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    /// No minimum: whatever is found is accepted, even empty text.
    #[must_use]
    pub fn last_resort() -> Self {
        Self::new(0)
    }
}

impl BodyStrategy for LargestBlockStrategy {
    fn source(&self) -> BodySource {
        BodySource::LargestBlock
    }

    fn attempt(&self, ctx: &ExtractionContext<'_>) -> Outcome {
        let text = largest_block(ctx.document)
            .map(|block| block.text())
            .unwrap_or_default();
        threshold(text, self.min_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_id(doc: &Document) -> Option<String> {
        largest_block(doc).and_then(|block| {
            dom::get_attribute(&dom_query::Selection::from(block.node), "id")
        })
    }

    #[test]
    fn test_picks_most_words() {
        let doc = dom::parse(
            r#"<div id="small">one two</div><section id="big">one two three four</section>"#,
        );
        assert_eq!(block_id(&doc).as_deref(), Some("big"));
    }

    #[test]
    fn test_tie_goes_to_first_in_document_order() {
        let doc = dom::parse(
            r#"<article id="first">alpha beta gamma</article><div id="second">delta epsilon zeta</div>"#,
        );
        assert_eq!(block_id(&doc).as_deref(), Some("first"));
    }

    #[test]
    fn test_outer_container_counts_descendants() {
        let doc = dom::parse(
            r#"<div id="outer"><div id="inner">a b c</div><p>d e</p></div>"#,
        );
        let block = largest_block(&doc).unwrap();
        assert_eq!(block.words, 5);
        assert_eq!(block_id(&doc).as_deref(), Some("outer"));
    }

    #[test]
    fn test_no_candidates_is_none() {
        let doc = dom::parse("<p>just a paragraph</p><span>and a span</span>");
        assert!(largest_block(&doc).is_none());
    }

    #[test]
    fn test_empty_candidates_are_never_selected() {
        let doc = dom::parse("<div></div><section>   </section>");
        assert!(largest_block(&doc).is_none());
    }

    #[test]
    fn test_block_text_is_newline_separated() {
        let doc = dom::parse("<div><p>one</p><p>two</p></div>");
        assert_eq!(largest_block(&doc).unwrap().text(), "one\ntwo");
    }

    #[test]
    fn test_last_resort_accepts_empty() {
        let doc = dom::parse("<p>no containers</p>");
        let ctx = ExtractionContext { document: &doc, hint: None };
        assert_eq!(
            LargestBlockStrategy::last_resort().attempt(&ctx),
            Outcome::Accepted(String::new())
        );
    }
}
