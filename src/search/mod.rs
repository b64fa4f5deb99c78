// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranker: a query against the whole corpus.
//!
//! Every record is scored independently, so the scoring pass fans out over
//! the rayon pool when the `parallel` feature is on. The comparator is a
//! total order (positions are unique), so the parallel and sequential paths
//! return the same sequence.
//!
//! ```text
//! Query ──► facet gates ──► field containment ──► score ──► sort ──► truncate
//!           (per record, independent)                       (score desc, load order)
//! ```

use crate::contracts;
use crate::corpus::{Corpus, CorpusEntry};
use crate::query::Query;
use crate::scoring::ranking::compare_matches;
use crate::scoring::score_folded;
use crate::types::{RelevanceTier, ScoredMatch, SearchOutcome};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many records the rayon fan-out costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 2048;

/// A ranked result window plus how many records matched in total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranked {
    pub matches: Vec<ScoredMatch>,
    /// Matches before truncation. The UI shows it as "N results found".
    pub total: usize,
}

/// Rank the corpus against a query and keep the best `limit` matches.
///
/// A "no search" query and a `limit` of 0 both produce an empty list. Use
/// [`search`] to tell "no search" apart from "searched, found nothing".
pub fn rank(corpus: &Corpus, query: &Query, limit: usize) -> Vec<ScoredMatch> {
    rank_counted(corpus, query, limit).matches
}

/// [`rank`], also reporting the untruncated match count.
pub fn rank_counted(corpus: &Corpus, query: &Query, limit: usize) -> Ranked {
    if query.is_no_search() {
        return Ranked::default();
    }

    let mut matches = collect_matches(corpus.entries(), query);
    let total = matches.len();

    if limit == 0 {
        matches.clear();
    } else if matches.len() > limit {
        // Partition the top `limit` to the front before sorting only those.
        matches.select_nth_unstable_by(limit - 1, compare_matches);
        matches.truncate(limit);
    }
    matches.sort_unstable_by(compare_matches);

    tracing::debug!(
        target: "docsift::search",
        query = %query.normalized_text,
        folder = query.folder_filter.as_str(),
        year = query.year_filter.as_str(),
        scope = ?query.field_scope,
        total,
        returned = matches.len(),
        "ranked"
    );

    contracts::check_ranking(&matches, query, limit);
    Ranked { matches, total }
}

/// Rank and wrap: `NoSearch` for an empty query, `Results` otherwise.
///
/// `Results(vec![])` means the query ran and nothing passed.
pub fn search(corpus: &Corpus, query: &Query, limit: usize) -> SearchOutcome {
    if query.is_no_search() {
        SearchOutcome::NoSearch
    } else {
        SearchOutcome::Results(rank(corpus, query, limit))
    }
}

/// Number of records a query matches, without building the result list.
pub fn count_matches(corpus: &Corpus, query: &Query) -> usize {
    if query.is_no_search() {
        return 0;
    }
    corpus
        .entries()
        .iter()
        .filter(|entry| score_folded(&entry.record, &entry.folded, query).is_some())
        .count()
}

fn to_scored(position: usize, entry: &CorpusEntry, query: &Query) -> Option<ScoredMatch> {
    let m = score_folded(&entry.record, &entry.folded, query)?;
    Some(ScoredMatch {
        record: Arc::clone(&entry.record),
        position,
        score: m.score,
        tier: RelevanceTier::for_score(m.score),
        fields: m.fields,
    })
}

fn collect_matches(entries: &[CorpusEntry], query: &Query) -> Vec<ScoredMatch> {
    #[cfg(feature = "parallel")]
    {
        if entries.len() >= PARALLEL_THRESHOLD {
            return entries
                .par_iter()
                .enumerate()
                .filter_map(|(position, entry)| to_scored(position, entry, query))
                .collect();
        }
    }

    entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| to_scored(position, entry, query))
        .collect()
}
