// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization: raw input + filter selection → `Query`.
//!
//! Filters are fields on the query, not ambient state. Every scoring pass
//! gets everything it needs from the `Query` value it is handed.

use crate::types::{FacetFilter, FacetKind, FieldScope};
use crate::utils::fold;
use serde::Serialize;

/// A canonical search request.
///
/// `normalized_text` is trimmed and lower-cased. Internal whitespace is kept
/// as typed because matching is literal substring containment. An empty
/// `normalized_text` means "no search".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub raw_text: String,
    pub normalized_text: String,
    pub folder_filter: FacetFilter,
    pub year_filter: FacetFilter,
    pub field_scope: FieldScope,
}

impl Query {
    /// Build a query from raw input. Filter values are not checked against
    /// the corpus facets; an unknown value just matches nothing.
    pub fn normalize(
        raw_text: &str,
        folder_filter: FacetFilter,
        year_filter: FacetFilter,
        field_scope: FieldScope,
    ) -> Self {
        Query {
            raw_text: raw_text.to_string(),
            normalized_text: fold(raw_text.trim()),
            folder_filter,
            year_filter,
            field_scope,
        }
    }

    /// Free-text query over all fields with no filters.
    pub fn text(raw_text: &str) -> Self {
        Self::normalize(
            raw_text,
            FacetFilter::All,
            FacetFilter::All,
            FieldScope::All,
        )
    }

    /// The "nothing typed" query.
    pub fn no_search() -> Self {
        Self::default()
    }

    pub fn with_folder(mut self, folder: &str) -> Self {
        self.folder_filter = FacetFilter::parse(folder);
        self
    }

    pub fn with_year(mut self, year: &str) -> Self {
        self.year_filter = FacetFilter::parse(year);
        self
    }

    pub fn with_scope(mut self, field_scope: FieldScope) -> Self {
        self.field_scope = field_scope;
        self
    }

    /// True when nothing was typed (or only whitespace).
    #[inline]
    pub fn is_no_search(&self) -> bool {
        self.normalized_text.is_empty()
    }

    /// The filter for one facet.
    pub fn filter(&self, kind: FacetKind) -> &FacetFilter {
        match kind {
            FacetKind::Folder => &self.folder_filter,
            FacetKind::Year => &self.year_filter,
        }
    }
}
