//! DOM sanitization.
//!
//! Removes elements that never carry article text, together with their
//! subtrees, and every comment node. Text extracted from the sanitized
//! document therefore excludes those regions entirely.

use dom_query::{Document, NodeRef};
use tracing::trace;

/// Elements removed (with descendants) before body extraction.
pub const NON_CONTENT_TAGS: &[&str] = &[
    "script", "style", "noscript", "header", "footer", "nav", "aside", "iframe",
];

/// Combined selector for [`NON_CONTENT_TAGS`], one tree scan.
const NON_CONTENT_SELECTOR: &str = "script, style, noscript, header, footer, nav, aside, iframe";

/// Sanitize a document in place.
///
/// Absence of matches is a no-op.
pub fn sanitize(doc: &Document) {
    let removed = doc.select(NON_CONTENT_SELECTOR);
    let removed_count = removed.length();
    removed.remove();

    let comments: Vec<NodeRef> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_comment)
        .collect();
    let comment_count = comments.len();
    for comment in comments {
        comment.remove_from_parent();
    }

    trace!(elements = removed_count, comments = comment_count, "sanitized document");
}

/// Parse `html` and return its sanitized document.
#[must_use]
pub fn sanitized_document(html: &str) -> Document {
    let doc = Document::from(html);
    sanitize(&doc);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_sanitize_removes_non_content_tags() {
        let doc = dom::parse(
            r#"<html><head><style>p { color: red }</style><script>track()</script></head>
            <body>
                <header>Site header</header>
                <nav><a href="/">Home</a></nav>
                <div id="main"><p>Kept paragraph</p><aside>Related</aside></div>
                <iframe src="ad.html"></iframe>
                <noscript>Enable JS</noscript>
                <footer>Copyright</footer>
            </body></html>"#,
        );

        sanitize(&doc);

        for tag in NON_CONTENT_TAGS {
            assert_eq!(doc.select(tag).length(), 0, "{tag} should be removed");
        }
        let text = dom::document_text(&doc, " ");
        assert_eq!(text, "Kept paragraph");
    }

    #[test]
    fn test_sanitize_removes_nested_descendants() {
        let doc = dom::parse("<div><footer><div><p>deep footer text</p></div></footer><p>body</p></div>");
        sanitize(&doc);
        assert!(!doc.html().contains("deep footer text"));
        assert_eq!(doc.select("p").length(), 1);
    }

    #[test]
    fn test_sanitize_removes_comments() {
        let doc = dom::parse("<div><!-- ad slot --><p>text</p><!-- end --></div>");
        sanitize(&doc);
        assert!(!doc.html().contains("ad slot"));
        assert!(!doc.html().contains("<!--"));
    }

    #[test]
    fn test_sanitize_no_matches_is_noop() {
        let html = "<html><head></head><body><div><p>plain</p></div></body></html>";
        let doc = dom::parse(html);
        let before = doc.html().to_string();
        sanitize(&doc);
        assert_eq!(doc.html().to_string(), before);
    }
}
