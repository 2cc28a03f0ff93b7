//! Article metadata: title and publication date.
//!
//! Both resolvers read the raw (unsanitized) document, since `<meta>` tags
//! and byline markup may sit inside elements the sanitizer strips.

pub mod date;
pub mod date_parser;
pub mod title;

pub use date::{
    date_candidate, normalize_date, resolve_date, resolve_date_with, DateCandidate, DateSource,
};
pub use date_parser::{DateParser, LenientDateParser, ParsedDate};
pub use title::resolve_title;
