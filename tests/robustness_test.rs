use news_extract::{extract, SelectorChain, DEFAULT_BODY_PLACEHOLDER, DEFAULT_TITLE_PLACEHOLDER};
use std::time::{Duration, Instant};

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let result = extract("<div>text<div>more", "", None);
    assert!(result.body.contains("text"));
    assert!(result.body.contains("more"));
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let result = extract("<p><div></p></div>", "", None);
    assert!(!result.body.is_empty());
    assert!(!result.title.is_empty());
}

#[test]
fn extract_does_not_panic_on_malformed_html_missing_closing_tags() {
    let result = extract("<html><body><article>content", "", None);
    assert_eq!(result.body, "content");
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let result = extract("<div class=\"test id=broken>", "", None);
    assert!(!result.body.is_empty());
}

#[test]
fn extract_returns_placeholders_for_empty_string() {
    let result = extract("", "", None);
    assert_eq!(result.title, DEFAULT_TITLE_PLACEHOLDER);
    assert_eq!(result.body, DEFAULT_BODY_PLACEHOLDER);
    assert_eq!(result.date, None);
}

#[test]
fn extract_returns_placeholders_for_whitespace_only_input() {
    let result = extract("   \n\t  ", "", None);
    assert_eq!(result.body, DEFAULT_BODY_PLACEHOLDER);
    assert_eq!(result.body_source, None);
}

#[test]
fn extract_tolerates_garbage_urls() {
    for url in ["", "not a url", "://", "mailto:someone@example.com", "https://"] {
        let result = extract("<div>x</div>", url, None);
        assert_eq!(result.body, "x", "url: {url:?}");
    }
}

#[test]
fn invalid_lenient_selector_matches_nothing() {
    let chain = SelectorChain::parse_lenient("div[, article");
    let result = extract("<article>kept text</article>", "", Some(&chain));
    assert_eq!(result.body, "kept text");
}

#[test]
fn strict_selector_parse_rejects_invalid_css() {
    assert!("div[".parse::<SelectorChain>().is_err());
    assert!(" , ".parse::<SelectorChain>().is_err());
}

#[test]
fn extract_handles_deep_nesting() {
    let depth = 100;
    let html = format!("{}deep text{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let result = extract(&html, "", None);
    assert_eq!(result.body, "deep text");
}

#[test]
fn extract_completes_in_reasonable_time_for_large_document() {
    let paragraph = "<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>";
    let html = format!(
        "<html><body>{}</body></html>",
        (0..200)
            .map(|i| format!("<div id=\"b{i}\">{}</div>", paragraph.repeat(5)))
            .collect::<String>()
    );

    let start = Instant::now();
    let result = extract(&html, "", None);
    let elapsed = start.elapsed();

    assert!(result.body.contains("Lorem ipsum"));
    assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");
}

#[test]
fn extract_is_deterministic() {
    let html = "<html><head><title>T</title></head><body><div>one two</div><div>three four</div></body></html>";
    let first = extract(html, "https://example.com/", None);
    let second = extract(html, "https://example.com/", None);
    assert_eq!(first, second);
}
