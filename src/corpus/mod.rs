// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus store: an immutable snapshot of every searchable record.
//!
//! Loading validates ids, folds the searchable fields once, and collects the
//! facet value sets. After that nothing changes. `Corpus` is an `Arc` around
//! the snapshot, so cloning it to hand to a worker thread costs a refcount
//! bump, and concurrent readers need no locking at all.
//!
//! Load order matters: it is the tiebreaker for equal scores, so `all()` and
//! the ranker both walk records in exactly the order they were handed in.

mod facets;

pub use facets::FacetValueSet;

use crate::error::CorpusError;
use crate::types::{facet_value, DocumentRecord, RecordId};
use crate::utils::fold;
use std::collections::HashMap;
use std::sync::Arc;

/// Lower-cased copies of the searchable fields, computed once at load.
#[derive(Debug, Clone)]
pub struct FoldedFields {
    pub title: String,
    pub abstract_text: String,
    pub filename: String,
}

impl FoldedFields {
    pub fn of(record: &DocumentRecord) -> Self {
        FoldedFields {
            title: fold(&record.title),
            abstract_text: fold(&record.abstract_text),
            filename: fold(&record.filename),
        }
    }
}

/// A record plus its precomputed match text.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    pub record: Arc<DocumentRecord>,
    pub folded: FoldedFields,
}

#[derive(Debug)]
struct CorpusInner {
    entries: Vec<CorpusEntry>,
    by_id: HashMap<RecordId, usize>,
    facets: FacetValueSet,
}

/// Loaded, validated, read-only corpus.
///
/// Thread-safe via Arc: can be cloned and shared across threads.
#[derive(Debug, Clone)]
pub struct Corpus {
    inner: Arc<CorpusInner>,
}

impl Corpus {
    /// Validate and install a corpus.
    ///
    /// Fails with `CorpusError::DuplicateId` if two records share an id and
    /// with `CorpusError::EmptyId` if any id is empty. Nothing is installed
    /// on failure.
    pub fn load(records: impl IntoIterator<Item = DocumentRecord>) -> Result<Self, CorpusError> {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        let mut entries: Vec<CorpusEntry> = Vec::with_capacity(lower);
        let mut by_id: HashMap<RecordId, usize> = HashMap::with_capacity(lower);

        for (position, mut record) in records.enumerate() {
            if record.id.as_str().is_empty() {
                return Err(CorpusError::EmptyId { position });
            }
            if let Some(&first) = by_id.get(&record.id) {
                return Err(CorpusError::DuplicateId {
                    id: record.id,
                    first,
                    second: position,
                });
            }
            by_id.insert(record.id.clone(), position);

            // Records built by hand may still carry the sentinel.
            record.folder = facet_value(record.folder.take());
            record.year_range = facet_value(record.year_range.take());

            let folded = FoldedFields::of(&record);
            entries.push(CorpusEntry {
                record: Arc::new(record),
                folded,
            });
        }

        let facets = FacetValueSet::from_records(entries.iter().map(|entry| &*entry.record));

        tracing::debug!(
            target: "docsift::corpus",
            records = entries.len(),
            folders = facets.folders.len(),
            years = facets.years.len(),
            "corpus loaded"
        );

        Ok(Corpus {
            inner: Arc::new(CorpusInner {
                entries,
                by_id,
                facets,
            }),
        })
    }

    /// An empty corpus. Every search against it returns no results.
    pub fn empty() -> Self {
        Corpus {
            inner: Arc::new(CorpusInner {
                entries: Vec::new(),
                by_id: HashMap::new(),
                facets: FacetValueSet::default(),
            }),
        }
    }

    /// Facet value sets, computed at load.
    #[inline]
    pub fn facets(&self) -> &FacetValueSet {
        &self.inner.facets
    }

    /// Records in load order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &DocumentRecord> + '_ {
        self.inner.entries.iter().map(|entry| &*entry.record)
    }

    /// Records with their folded match text, in load order.
    #[inline]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.inner.entries
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&DocumentRecord> {
        self.inner
            .by_id
            .get(id)
            .map(|&position| &*self.inner.entries[position].record)
    }

    /// Load-order position of a record.
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.inner.by_id.get(id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Total word count across the corpus, for summaries.
    pub fn total_words(&self) -> u64 {
        self.all().map(|record| record.word_count).sum()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::empty()
    }
}
