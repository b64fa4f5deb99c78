// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary text, filter values and scopes at the ranker and checks
//! that results stay filtered, bounded and ordered.

#![no_main]

use arbitrary::Arbitrary;
use docsift::scoring::ranking::is_ranked;
use docsift::testing::thesis_corpus;
use docsift::{rank, Corpus, FacetFilter, FieldScope, Query};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    folder: String,
    year: String,
    scope: u8,
    limit: u8,
}

fuzz_target!(|input: Input| {
    static CORPUS: std::sync::OnceLock<Corpus> = std::sync::OnceLock::new();
    let corpus = CORPUS.get_or_init(|| Corpus::load(thesis_corpus()).expect("thesis corpus is valid"));

    let scope = match input.scope % 3 {
        0 => FieldScope::All,
        1 => FieldScope::TitleOnly,
        _ => FieldScope::AbstractOnly,
    };
    let query = Query::normalize(
        &input.text,
        FacetFilter::parse(&input.folder),
        FacetFilter::parse(&input.year),
        scope,
    );
    let limit = input.limit as usize;
    let results = rank(corpus, &query, limit);

    assert!(results.len() <= limit, "{} results for limit {}", results.len(), limit);
    assert!(is_ranked(&results), "results out of order for {:?}", query);
    if query.is_no_search() {
        assert!(results.is_empty());
    }
    for m in &results {
        assert!(query.folder_filter.admits(m.record.folder.as_deref()));
        assert!(query.year_filter.admits(m.record.year_range.as_deref()));
        assert!(m.score >= 1);
    }
});
