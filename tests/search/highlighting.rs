//! Highlighting tests: casing, round trip, and engine decoration.

use super::common::sample_engine;
use docsift::{highlight, Query, Span};

#[test]
fn test_highlight_keeps_original_casing() {
    let highlighted = highlight("AI in Education", "ai");
    assert_eq!(
        highlighted.spans,
        vec![Span::matched("AI"), Span::plain(" in Education")]
    );
}

#[test]
fn test_highlight_matches_mixed_case_query() {
    let highlighted = highlight("Machine learning for LEARNING", "LeArNiNg");
    assert_eq!(
        highlighted.spans,
        vec![
            Span::plain("Machine "),
            Span::matched("learning"),
            Span::plain(" for "),
            Span::matched("LEARNING"),
        ]
    );
}

#[test]
fn test_highlight_round_trips_unicode() {
    for (text, query) in [
        ("Résumé parsing für Straße", "straße"),
        ("ÉCOLE école", "école"),
        ("తెలుగు text", "text"),
        ("\u{212A}elvin and K", "k"),
        ("İstanbul İzmir", "i̇z"),
    ] {
        let highlighted = highlight(text, query);
        assert_eq!(highlighted.to_plain(), text, "{text:?} / {query:?}");
        assert!(
            highlighted.spans.iter().all(|span| !span.text.is_empty()),
            "{text:?} / {query:?}"
        );
    }
}

#[test]
fn test_highlight_finds_accented_matches() {
    let highlighted = highlight("ÉCOLE école", "école");
    assert_eq!(highlighted.match_count(), 2);
}

#[test]
fn test_engine_decorates_title_and_abstract() {
    let engine = sample_engine();
    let outcome = engine.page_search(&Query::text("ai"));
    let first = &outcome.results()[0];

    assert_eq!(first.title.spans[0], Span::matched("AI"));
    assert_eq!(
        first.abstract_text.spans,
        vec![Span::plain("uses "), Span::matched("AI")]
    );
}

#[test]
fn test_highlighted_json_shape() {
    let engine = sample_engine();
    let outcome = engine.page_search(&Query::text("ai"));
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["outcome"], "results");
    let first = &json["results"][0];
    assert_eq!(first["score"], 5);
    assert_eq!(first["tier"], "high");
    assert_eq!(first["title"][0]["text"], "AI");
    assert_eq!(first["title"][0]["isMatch"], true);
    assert_eq!(first["record"]["yearRange"], "2020-2021");
}
