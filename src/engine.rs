// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `SearchEngine`: the one place that turns a query into display results.
//!
//! The header search box and the page-level search view used to carry their
//! own copies of the matching and highlighting rules. Both now go through
//! this facade and differ only in how many results they ask for.

use crate::config::SearchConfig;
use crate::corpus::{Corpus, FacetValueSet};
use crate::error::CorpusError;
use crate::highlight::highlight_match;
use crate::query::Query;
use crate::search::{self, Ranked};
use crate::types::{DocumentRecord, HighlightedMatch, SearchOutcome};

/// A loaded corpus plus the settings used to query it.
///
/// Cheap to clone: the corpus is shared, not copied.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    corpus: Corpus,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(corpus: Corpus, config: SearchConfig) -> Self {
        SearchEngine { corpus, config }
    }

    /// Validate records and build an engine with default settings.
    pub fn from_records(records: Vec<DocumentRecord>) -> Result<Self, CorpusError> {
        Ok(Self::new(Corpus::load(records)?, SearchConfig::default()))
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn facets(&self) -> &FacetValueSet {
        self.corpus.facets()
    }

    /// Ranked matches without highlighting.
    pub fn search(&self, query: &Query, limit: usize) -> SearchOutcome {
        search::search(&self.corpus, query, limit)
    }

    /// Ranked matches with the untruncated match count.
    pub fn rank_counted(&self, query: &Query, limit: usize) -> Ranked {
        search::rank_counted(&self.corpus, query, limit)
    }

    /// Ranked matches with title and abstract highlighted.
    pub fn search_highlighted(&self, query: &Query, limit: usize) -> SearchOutcome<HighlightedMatch> {
        self.search_highlighted_counted(query, limit).0
    }

    /// [`Self::search_highlighted`], also returning the untruncated match
    /// count. The count is 0 for "no search".
    pub fn search_highlighted_counted(
        &self,
        query: &Query,
        limit: usize,
    ) -> (SearchOutcome<HighlightedMatch>, usize) {
        if query.is_no_search() {
            return (SearchOutcome::NoSearch, 0);
        }
        let Ranked { matches, total } = self.rank_counted(query, limit);
        let highlighted = matches
            .into_iter()
            .map(|hit| highlight_match(hit, query))
            .collect();
        (SearchOutcome::Results(highlighted), total)
    }

    /// Results for the page-level search view.
    pub fn page_search(&self, query: &Query) -> SearchOutcome<HighlightedMatch> {
        self.search_highlighted(query, self.config.page_limit)
    }

    /// Results for the header search dropdown.
    pub fn header_search(&self, query: &Query) -> SearchOutcome<HighlightedMatch> {
        self.search_highlighted(query, self.config.header_limit)
    }
}
