use news_extract::{extract, extract_with_options, BodySource, Options, SelectorChain};

fn words(word: &str, n: usize) -> String {
    vec![word; n].join(" ")
}

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.min_hint_words, 30);
    assert_eq!(options.min_readability_words, 50);
    assert!(options.use_readability_fallback);
    assert_eq!(options.title_placeholder, "(제목 없음)");
    assert_eq!(options.body_placeholder, "(본문 없음)");
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        min_hint_words: 5,
        ..Options::default()
    };

    assert_eq!(options.min_hint_words, 5);
    assert_eq!(options.min_readability_words, 50);
    assert!(options.use_readability_fallback);
}

#[test]
fn lower_hint_threshold_accepts_short_hint() {
    let chain = SelectorChain::parse_lenient("div#story");
    let html = format!(
        r#"<div id="story">{}</div><div id="other">{}</div>"#,
        words("short", 10),
        words("long", 60)
    );

    let default_result = extract(&html, "", Some(&chain));
    assert_ne!(default_result.body_source, Some(BodySource::SiteHint));

    let options = Options { min_hint_words: 10, ..Options::default() };
    let relaxed = extract_with_options(&html, "", Some(&chain), &options);
    assert_eq!(relaxed.body_source, Some(BodySource::SiteHint));
    assert_eq!(relaxed.body, words("short", 10));
}

#[test]
fn disabling_readability_goes_straight_to_largest_block() {
    let html = format!("<section>{}</section>", words("text", 80));
    let options = Options { use_readability_fallback: false, ..Options::default() };

    let result = extract_with_options(&html, "", None, &options);

    assert_eq!(result.body_source, Some(BodySource::LargestBlock));
    assert_eq!(result.body, words("text", 80));
}
