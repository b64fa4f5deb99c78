// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking and highlighting invariants.
//!
//! Debug-mode assertions that the ranker and highlighter call on their own
//! output. Zero-cost in release builds (`debug_assert!`), loud during tests.
//!
//! | Contract Function            | Invariant                                        |
//! |------------------------------|--------------------------------------------------|
//! | `check_ranked_order`         | score descending, ties in load order             |
//! | `check_facets_satisfied`     | every result passes the folder and year filters  |
//! | `check_scores_consistent`    | score ≥ 1, tier derived from score, score ≤ max  |
//! | `check_within_limit`         | never more results than asked for                |
//! | `check_round_trip`           | highlight spans concatenate to the input         |

/// Compile-time check that the weights keep a title hit in the High tier
/// and an abstract hit in the Medium tier on their own.
const _: () = {
    assert!(crate::scoring::TITLE_WEIGHT >= 3);
    assert!(crate::scoring::ABSTRACT_WEIGHT == 2);
    assert!(crate::scoring::FILENAME_WEIGHT == 1);
};

use crate::query::Query;
use crate::scoring::ranking::compare_matches;
use crate::scoring::{passes_facets, MAX_SCORE};
use crate::types::{HighlightedText, RelevanceTier, ScoredMatch};
use std::cmp::Ordering;

/// Check that matches are sorted by descending score with load-order ties.
#[inline]
pub fn check_ranked_order(matches: &[ScoredMatch]) {
    for (i, pair) in matches.windows(2).enumerate() {
        debug_assert!(
            compare_matches(&pair[0], &pair[1]) == Ordering::Less,
            "Contract violation: results[{}] (score {}, position {}) must rank before results[{}] (score {}, position {})",
            i,
            pair[0].score,
            pair[0].position,
            i + 1,
            pair[1].score,
            pair[1].position
        );
    }
}

/// Check that every result satisfies the query's facet filters exactly.
#[inline]
pub fn check_facets_satisfied(matches: &[ScoredMatch], query: &Query) {
    for (i, m) in matches.iter().enumerate() {
        debug_assert!(
            passes_facets(&m.record, query),
            "Contract violation: results[{}] (id {}) fails folder={:?} year={:?}",
            i,
            m.record.id,
            query.folder_filter,
            query.year_filter
        );
    }
}

/// Check score range and tier derivation.
#[inline]
pub fn check_scores_consistent(matches: &[ScoredMatch]) {
    for (i, m) in matches.iter().enumerate() {
        debug_assert!(
            (1..=MAX_SCORE).contains(&m.score),
            "Contract violation: results[{}].score {} outside 1..={}",
            i,
            m.score,
            MAX_SCORE
        );
        debug_assert!(
            m.tier == RelevanceTier::for_score(m.score),
            "Contract violation: results[{}].tier {:?} does not match score {}",
            i,
            m.tier,
            m.score
        );
    }
}

/// Check the result window respects the limit.
#[inline]
pub fn check_within_limit(matches: &[ScoredMatch], limit: usize) {
    debug_assert!(
        matches.len() <= limit,
        "Contract violation: {} results exceed limit {}",
        matches.len(),
        limit
    );
}

/// Check that highlight spans reassemble the original text.
#[inline]
pub fn check_round_trip(original: &str, highlighted: &HighlightedText) {
    debug_assert!(
        highlighted.to_plain() == original,
        "Contract violation: highlight spans {:?} do not reassemble {:?}",
        highlighted.spans,
        original
    );
}

/// Run every ranking contract at once.
#[inline]
pub fn check_ranking(matches: &[ScoredMatch], query: &Query, limit: usize) {
    check_within_limit(matches, limit);
    check_scores_consistent(matches);
    check_facets_satisfied(matches, query);
    check_ranked_order(matches);
}
