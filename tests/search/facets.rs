//! Facet filter tests: hard gates, sentinel handling, facet value sets.

use super::common::{ids, load, make_record, make_record_with_facets, sample_corpus};
use docsift::{rank, search, Corpus, FacetFilter, FacetKind, Query, SearchOutcome};

#[test]
fn test_folder_without_matches_is_empty_not_no_search() {
    let corpus = sample_corpus();
    let outcome = search(&corpus, &Query::text("AI").with_folder("EE"), 10);
    assert_eq!(outcome, SearchOutcome::Results(vec![]));
    assert_ne!(outcome, search(&corpus, &Query::text(""), 10));
}

#[test]
fn test_year_filter_selects_exact_value() {
    let corpus = sample_corpus();
    let ranked = rank(&corpus, &Query::text("AI").with_year("2019"), 10);
    assert_eq!(ids(&ranked), vec!["2"]);

    // No partial or range matching on year values
    assert!(rank(&corpus, &Query::text("AI").with_year("2020"), 10).is_empty());
}

#[test]
fn test_filters_combine() {
    let corpus = load(vec![
        make_record_with_facets(1, "ml a", "", "CS", "2019"),
        make_record_with_facets(2, "ml b", "", "CS", "2022"),
        make_record_with_facets(3, "ml c", "", "EE", "2022"),
    ]);
    let query = Query::text("ml").with_folder("CS").with_year("2022");
    assert_eq!(ids(&rank(&corpus, &query, 10)), vec!["2"]);
}

#[test]
fn test_unknown_values_never_satisfy_a_filter() {
    let corpus = load(vec![
        make_record_with_facets(1, "ml", "", "unknown", "unknown"),
        make_record(2, "ml", ""),
    ]);
    assert!(rank(&corpus, &Query::text("ml").with_folder("unknown"), 10).is_empty());
    assert!(rank(&corpus, &Query::text("ml").with_year("unknown"), 10).is_empty());
    assert_eq!(rank(&corpus, &Query::text("ml"), 10).len(), 2);
}

#[test]
fn test_filter_values_are_case_sensitive() {
    let corpus = sample_corpus();
    assert!(rank(&corpus, &Query::text("AI").with_folder("cs"), 10).is_empty());
}

#[test]
fn test_only_lowercase_all_means_every_folder() {
    assert_eq!(FacetFilter::parse(""), FacetFilter::All);
    let corpus = load(vec![
        make_record_with_facets(1, "AI Archive", "", "All", "2020"),
        make_record_with_facets(2, "AI Robots", "", "CS", "2020"),
    ]);
    assert_eq!(ids(&rank(&corpus, &Query::text("AI").with_folder("all"), 10)), vec!["1", "2"]);
    assert_eq!(ids(&rank(&corpus, &Query::text("AI").with_folder("All"), 10)), vec!["1"]);
    assert!(rank(&corpus, &Query::text("AI").with_folder("ALL"), 10).is_empty());
}

#[test]
fn test_facet_sets_exclude_unknown() {
    let corpus = Corpus::load(vec![
        make_record_with_facets(1, "a", "", "CS", "2019"),
        make_record_with_facets(2, "b", "", "unknown", "2022"),
        make_record_with_facets(3, "c", "", "EE", "unknown"),
        make_record_with_facets(4, "d", "", "CS", "2019"),
    ])
    .unwrap();
    let facets = corpus.facets();

    let folders: Vec<&str> = facets.options(FacetKind::Folder).collect();
    assert_eq!(folders, vec!["all", "CS", "EE"]);
    let years: Vec<&str> = facets.options(FacetKind::Year).collect();
    assert_eq!(years, vec!["all", "2019", "2022"]);
    assert!(!facets.offers(FacetKind::Folder, "unknown"));
}
