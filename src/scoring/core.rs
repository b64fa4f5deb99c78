// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matcher: one record, one query, a score or no match.
//!
//! Matching is case-insensitive literal substring containment on whole
//! fields. No tokenization, no stemming, no fuzzy tolerance. A query of
//! `"data"` matches `"Database Systems"`.
//!
//! # Weights
//!
//! | Field    | Weight | Searched when               |
//! |----------|--------|-----------------------------|
//! | Title    | 3      | scope is `All` or `TitleOnly`    |
//! | Abstract | 2      | scope is `All` or `AbstractOnly` |
//! | Filename | 1      | scope is `All` only              |
//!
//! Weights add up, so the score range is 1..=6 for a match. A title hit alone
//! is enough for the High tier.
//!
//! The filename asymmetry is deliberate: the title-only and abstract-only
//! scopes never look at the filename.

use crate::corpus::FoldedFields;
use crate::query::Query;
use crate::types::{DocumentRecord, FacetKind, MatchedFields};

/// Weight for a title hit.
pub const TITLE_WEIGHT: u32 = 3;

/// Weight for an abstract hit.
pub const ABSTRACT_WEIGHT: u32 = 2;

/// Weight for a filename hit (only under `FieldScope::All`).
pub const FILENAME_WEIGHT: u32 = 1;

/// Highest score a record can reach.
pub const MAX_SCORE: u32 = TITLE_WEIGHT + ABSTRACT_WEIGHT + FILENAME_WEIGHT;

/// The score for one record and which fields produced it.
///
/// A score of 0 only occurs for "no search" queries, where every record that
/// passes the facet gates is a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub score: u32,
    pub fields: MatchedFields,
}

/// Does the record pass the query's folder and year gates?
#[inline]
pub fn passes_facets(record: &DocumentRecord, query: &Query) -> bool {
    query
        .folder_filter
        .admits(record.facet(FacetKind::Folder))
        && query.year_filter.admits(record.facet(FacetKind::Year))
}

/// Score a record against a query.
///
/// Returns `None` when a facet gate rejects the record, or when the query has
/// text and no field in scope contains it.
pub fn score(record: &DocumentRecord, query: &Query) -> Option<Match> {
    score_folded(record, &FoldedFields::of(record), query)
}

/// `score` with the record's lower-cased fields supplied by the caller.
///
/// The corpus folds every record once at load, so the ranker calls this
/// directly instead of re-folding per query.
pub fn score_folded(record: &DocumentRecord, folded: &FoldedFields, query: &Query) -> Option<Match> {
    if !passes_facets(record, query) {
        return None;
    }

    let needle = query.normalized_text.as_str();
    if needle.is_empty() {
        return Some(Match {
            score: 0,
            fields: MatchedFields::default(),
        });
    }

    let scope = query.field_scope;
    let fields = MatchedFields {
        title: scope.includes_title() && folded.title.contains(needle),
        abstract_text: scope.includes_abstract() && folded.abstract_text.contains(needle),
        filename: scope.includes_filename() && folded.filename.contains(needle),
    };

    let score = weigh(&fields);
    if score == 0 {
        None
    } else {
        Some(Match { score, fields })
    }
}

/// Sum of weights for the fields that matched.
#[inline]
pub fn weigh(fields: &MatchedFields) -> u32 {
    let mut score = 0;
    if fields.title {
        score += TITLE_WEIGHT;
    }
    if fields.abstract_text {
        score += ABSTRACT_WEIGHT;
    }
    if fields.filename {
        score += FILENAME_WEIGHT;
    }
    score
}
