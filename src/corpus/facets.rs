// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet value sets: the folder and year-range options the UI offers.
//!
//! Built in one pass when the corpus loads, never touched again. Absent
//! values (including the `"unknown"` sentinel, which ingestion already maps to
//! absent) never show up here. The implicit `"all"` option is not stored, it
//! is prepended when the options are listed.

use crate::types::{DocumentRecord, FacetKind, ALL_FACET};
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct folder and year-range values seen across the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetValueSet {
    pub folders: BTreeSet<String>,
    pub years: BTreeSet<String>,
}

impl FacetValueSet {
    /// Collect facet values from records in a single pass.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a DocumentRecord>) -> Self {
        let mut facets = FacetValueSet::default();
        for record in records {
            if let Some(folder) = record.folder.as_deref() {
                facets.folders.insert(folder.to_string());
            }
            if let Some(year) = record.year_range.as_deref() {
                facets.years.insert(year.to_string());
            }
        }
        facets
    }

    /// Values present for one facet.
    pub fn values(&self, kind: FacetKind) -> &BTreeSet<String> {
        match kind {
            FacetKind::Folder => &self.folders,
            FacetKind::Year => &self.years,
        }
    }

    /// Options in display order: `"all"` first, then the values sorted.
    pub fn options(&self, kind: FacetKind) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(ALL_FACET).chain(self.values(kind).iter().map(String::as_str))
    }

    pub fn folder_options(&self) -> impl Iterator<Item = &str> + '_ {
        self.options(FacetKind::Folder)
    }

    pub fn year_options(&self) -> impl Iterator<Item = &str> + '_ {
        self.options(FacetKind::Year)
    }

    /// Is `value` a real option for this facet? `"all"` always is.
    pub fn offers(&self, kind: FacetKind, value: &str) -> bool {
        value == ALL_FACET || self.values(kind).contains(value)
    }
}
