//! Selector-based extraction: the fast path.
//!
//! Collects the text of every element matched by a selector chain. Elements
//! matched by more than one selector are counted once, by node identity.

use std::collections::HashSet;

use dom_query::{Document, NodeId};

use super::{threshold, BodyStrategy, ExtractionContext, Outcome};
use crate::dom;
use crate::result::BodySource;
use crate::site_hints::SelectorChain;

/// Text of all elements matched by `chain`, in selector order.
///
/// Within an element, text nodes are newline-separated; matched elements
/// are separated by a blank line. Invalid selectors match nothing.
#[must_use]
pub fn extract_selector_text(doc: &Document, chain: &SelectorChain) -> String {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut texts = Vec::new();

    for selector in chain.selectors() {
        let Some(matched) = dom::try_select(doc, selector) else {
            continue;
        };
        for node in matched.nodes() {
            if !seen.insert(node.id) {
                continue;
            }
            texts.push(dom::joined_text(node, "\n"));
        }
    }

    texts.join("\n\n")
}

/// Strategy wrapping [`extract_selector_text`] with a word threshold.
#[derive(Debug, Clone, Copy)]
pub struct SelectorStrategy {
    min_words: usize,
}

impl SelectorStrategy {
    #[must_use]
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }
}

impl BodyStrategy for SelectorStrategy {
    fn source(&self) -> BodySource {
        BodySource::SiteHint
    }

    fn attempt(&self, ctx: &ExtractionContext<'_>) -> Outcome {
        let Some(chain) = ctx.hint else {
            return Outcome::Unavailable;
        };
        threshold(extract_selector_text(ctx.document, chain), self.min_words)
    }
}
