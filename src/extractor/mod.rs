//! Body extraction strategies.
//!
//! Body text comes from an ordered chain of strategies evaluated against the
//! sanitized document. Each strategy either accepts (yielding text) or
//! declines, and the first acceptance wins:
//!
//! 1. [`SelectorStrategy`]: text of the site hint / caller selector chain
//! 2. [`ReadabilityStrategy`]: largest block inside a readability summary
//! 3. [`LargestBlockStrategy`]: largest block of the whole document, always
//!    accepted
//!
//! Cheap selector matching runs first; structural scoring only runs when
//! the selectors fall short.

pub mod largest_block;
pub mod readability;
pub mod selector;

use std::sync::Arc;

use dom_query::Document;
use tracing::debug;

use crate::options::Options;
use crate::result::BodySource;
use crate::site_hints::SelectorChain;

pub use largest_block::{largest_block, CandidateBlock, LargestBlockStrategy};
pub use readability::{default_summarizer, ReadabilityStrategy, Summarizer};
pub use selector::{extract_selector_text, SelectorStrategy};

#[cfg(feature = "readability")]
pub use readability::DomSmoothieSummarizer;

/// Inputs shared by every strategy for one extraction call.
#[derive(Clone, Copy)]
pub struct ExtractionContext<'a> {
    /// The sanitized document.
    pub document: &'a Document,

    /// The effective selector chain (caller override or resolved hint).
    pub hint: Option<&'a SelectorChain>,
}

/// What a strategy made of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text met the strategy's threshold.
    Accepted(String),

    /// Text was found but fell below the threshold.
    Rejected {
        /// Word count of the rejected text.
        words: usize,
    },

    /// The strategy had nothing to work with (no hint, no summary).
    Unavailable,
}

/// One step of the body fallback chain.
pub trait BodyStrategy: Send + Sync {
    /// Label recorded on the result when this strategy wins.
    fn source(&self) -> BodySource;

    /// Attempt extraction.
    fn attempt(&self, ctx: &ExtractionContext<'_>) -> Outcome;
}

/// Ordered list of strategies, short-circuiting on the first acceptance.
pub struct StrategyChain {
    strategies: Vec<Box<dyn BodyStrategy>>,
}

impl StrategyChain {
    /// Chain evaluating `strategies` in the given order.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn BodyStrategy>>) -> Self {
        Self { strategies }
    }

    /// The standard chain: selector → readability → largest block.
    ///
    /// The readability step is left out when
    /// [`Options::use_readability_fallback`] is off.
    #[must_use]
    pub fn standard(options: &Options, summarizer: Arc<dyn Summarizer>) -> Self {
        let mut strategies: Vec<Box<dyn BodyStrategy>> =
            vec![Box::new(SelectorStrategy::new(options.min_hint_words))];
        if options.use_readability_fallback {
            strategies.push(Box::new(ReadabilityStrategy::new(
                summarizer,
                options.min_readability_words,
            )));
        }
        strategies.push(Box::new(LargestBlockStrategy::last_resort()));
        Self::new(strategies)
    }

    /// Number of strategies in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// True when the chain has no strategies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run the chain, returning the winning strategy and its raw text.
    ///
    /// `None` only when every strategy declined, which the standard chain
    /// never does.
    #[must_use]
    pub fn run(&self, ctx: &ExtractionContext<'_>) -> Option<(BodySource, String)> {
        for strategy in &self.strategies {
            let source = strategy.source();
            match strategy.attempt(ctx) {
                Outcome::Accepted(text) => {
                    debug!(strategy = source.as_str(), chars = text.len(), "body strategy accepted");
                    return Some((source, text));
                }
                Outcome::Rejected { words } => {
                    debug!(strategy = source.as_str(), words, "body strategy below threshold");
                }
                Outcome::Unavailable => {
                    debug!(strategy = source.as_str(), "body strategy unavailable");
                }
            }
        }
        None
    }
}

/// Accept `text` when it has at least `min_words` words.
pub(crate) fn threshold(text: String, min_words: usize) -> Outcome {
    let words = crate::dom::word_count(&text);
    if words >= min_words {
        Outcome::Accepted(text)
    } else {
        Outcome::Rejected { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    struct Fixed(BodySource, Outcome);

    impl BodyStrategy for Fixed {
        fn source(&self) -> BodySource {
            self.0
        }

        fn attempt(&self, _ctx: &ExtractionContext<'_>) -> Outcome {
            self.1.clone()
        }
    }

    #[test]
    fn test_chain_short_circuits_on_first_acceptance() {
        let chain = StrategyChain::new(vec![
            Box::new(Fixed(BodySource::SiteHint, Outcome::Unavailable)),
            Box::new(Fixed(BodySource::Readability, Outcome::Accepted("first".to_string()))),
            Box::new(Fixed(BodySource::LargestBlock, Outcome::Accepted("second".to_string()))),
        ]);
        let doc = dom::parse("<p>x</p>");
        let ctx = ExtractionContext { document: &doc, hint: None };

        assert_eq!(chain.run(&ctx), Some((BodySource::Readability, "first".to_string())));
    }

    #[test]
    fn test_chain_returns_none_when_all_decline() {
        let chain = StrategyChain::new(vec![
            Box::new(Fixed(BodySource::SiteHint, Outcome::Rejected { words: 3 })),
            Box::new(Fixed(BodySource::Readability, Outcome::Unavailable)),
        ]);
        let doc = dom::parse("");
        let ctx = ExtractionContext { document: &doc, hint: None };

        assert_eq!(chain.run(&ctx), None);
    }

    #[test]
    fn test_standard_chain_shape() {
        let summarizer = default_summarizer();
        let full = StrategyChain::standard(&Options::default(), Arc::clone(&summarizer));
        assert_eq!(full.len(), 3);

        let opts = Options { use_readability_fallback: false, ..Options::default() };
        let without = StrategyChain::standard(&opts, summarizer);
        assert_eq!(without.len(), 2);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(threshold("a b c".to_string(), 3), Outcome::Accepted("a b c".to_string()));
        assert_eq!(threshold("a b".to_string(), 3), Outcome::Rejected { words: 2 });
    }
}
