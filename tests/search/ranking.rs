//! Ranking tests: weights, tiers, tie order, limits, scopes.
//!
//! Uses the two-record sample corpus:
//! - record 1: "AI in Education" / "uses AI"
//! - record 2: "Database Systems" / "AI is mentioned"

use super::common::{ids, load, make_record, sample_corpus, thesis_corpus};
use docsift::{rank, rank_counted, search, FieldScope, Query, RelevanceTier, SearchOutcome};

// ============================================================================
// WEIGHTS AND TIERS
// ============================================================================

#[test]
fn test_title_and_abstract_weights_add_up() {
    let corpus = sample_corpus();
    let ranked = rank(&corpus, &Query::text("AI"), 10);

    assert_eq!(ids(&ranked), vec!["1", "2"]);
    assert_eq!(ranked[0].score, 5, "title (3) + abstract (2)");
    assert_eq!(ranked[1].score, 2, "abstract only");
    assert_eq!(ranked[0].tier, RelevanceTier::High);
    assert_eq!(ranked[1].tier, RelevanceTier::Medium);
    assert!(ranked[0].fields.title && ranked[0].fields.abstract_text);
    assert!(!ranked[1].fields.title && ranked[1].fields.abstract_text);
}

#[test]
fn test_filename_only_match_is_low_tier() {
    let corpus = load(vec![make_record(1, "Routing", "graphs").with_filename("thesis_ml.pdf")]);
    let ranked = rank(&corpus, &Query::text("ML"), 10);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 1);
    assert_eq!(ranked[0].tier, RelevanceTier::Low);
    assert!(ranked[0].fields.filename);
}

#[test]
fn test_all_three_fields_reach_max_score() {
    let corpus = load(vec![make_record(1, "Graph", "graph").with_filename("graph.pdf")]);
    let ranked = rank(&corpus, &Query::text("graph"), 10);
    assert_eq!(ranked[0].score, docsift::scoring::MAX_SCORE);
}

#[test]
fn test_substring_not_word_match() {
    let corpus = load(vec![make_record(1, "Database Systems", "")]);
    assert_eq!(rank(&corpus, &Query::text("data"), 10).len(), 1);
    assert_eq!(rank(&corpus, &Query::text("base sys"), 10).len(), 1);
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_equal_scores_keep_load_order() {
    let corpus = load(vec![
        make_record(30, "zeta learning", ""),
        make_record(10, "alpha learning", ""),
        make_record(20, "beta learning", ""),
    ]);
    let ranked = rank(&corpus, &Query::text("learning"), 10);
    assert_eq!(ids(&ranked), vec!["30", "10", "20"]);
}

#[test]
fn test_rank_is_idempotent() {
    let corpus = docsift::Corpus::load(thesis_corpus()).unwrap();
    let query = Query::text("learning");
    let first = rank(&corpus, &query, 100);
    let second = rank(&corpus, &query, 100);
    assert_eq!(first, second);
    assert!(docsift::scoring::ranking::is_ranked(&first));
}

// ============================================================================
// LIMITS AND EMPTY CASES
// ============================================================================

#[test]
fn test_limit_keeps_best_matches() {
    let corpus = docsift::Corpus::load(thesis_corpus()).unwrap();
    let query = Query::text("learning");
    let all = rank(&corpus, &query, usize::MAX);
    let top = rank_counted(&corpus, &query, 3);
    assert_eq!(top.matches, all[..3].to_vec());
    assert_eq!(top.total, all.len());
}

#[test]
fn test_empty_query_is_no_search() {
    let corpus = sample_corpus();
    assert_eq!(search(&corpus, &Query::text(""), 10), SearchOutcome::NoSearch);
    assert_eq!(search(&corpus, &Query::text("  \t "), 10), SearchOutcome::NoSearch);
    assert!(rank(&corpus, &Query::text(""), 10).is_empty());
}

#[test]
fn test_unmatched_query_is_empty_results() {
    let corpus = sample_corpus();
    let outcome = search(&corpus, &Query::text("quantum"), 10);
    assert!(!outcome.is_no_search());
    assert!(outcome.is_empty());
}

#[test]
fn test_query_is_trimmed_and_case_folded() {
    let corpus = sample_corpus();
    let a = rank(&corpus, &Query::text("  EDUCATION  "), 10);
    let b = rank(&corpus, &Query::text("education"), 10);
    assert_eq!(a, b);
    assert_eq!(ids(&a), vec!["1"]);
}

// ============================================================================
// FIELD SCOPE
// ============================================================================

#[test]
fn test_title_only_scope() {
    let corpus = sample_corpus();
    let query = Query::text("AI").with_scope(FieldScope::TitleOnly);
    let ranked = rank(&corpus, &query, 10);
    assert_eq!(ids(&ranked), vec!["1"]);
    assert_eq!(ranked[0].score, 3);
}

#[test]
fn test_abstract_only_scope() {
    let corpus = sample_corpus();
    let query = Query::text("AI").with_scope(FieldScope::AbstractOnly);
    let ranked = rank(&corpus, &query, 10);
    assert_eq!(ids(&ranked), vec!["1", "2"]);
    assert!(ranked.iter().all(|m| m.score == 2));
}

#[test]
fn test_narrow_scopes_ignore_filename() {
    let corpus = load(vec![make_record(1, "Routing", "graphs").with_filename("thesis_ml.pdf")]);
    for scope in [FieldScope::TitleOnly, FieldScope::AbstractOnly] {
        let query = Query::text("ml").with_scope(scope);
        assert!(rank(&corpus, &query, 10).is_empty(), "{scope:?}");
    }
}
