//! Error types for news-extract.
//!
//! Extraction itself never fails: missing structure degrades to placeholders.
//! These errors only surface at the edges, when a caller-supplied selector
//! chain is parsed strictly or when the command-line tool reads its input.

/// Error type for the fallible edges of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selector in a caller-supplied chain is not valid CSS.
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    /// A selector chain string contained no selectors.
    #[error("Selector chain is empty")]
    EmptySelectorChain,

    /// Reading HTML input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
