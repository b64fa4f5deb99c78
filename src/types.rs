// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine.
//!
//! Records come in from the ingestion boundary, queries come in from the UI,
//! and scored, highlighted matches go back out. Every type the components hand
//! to each other lives here so the data model reads in one place.
//!
//! | Type               | Owner         | Lifetime                        |
//! |--------------------|---------------|---------------------------------|
//! | `DocumentRecord`   | `Corpus`      | process-wide, immutable         |
//! | `ScoredMatch`      | ranking pass  | one query cycle                 |
//! | `HighlightedText`  | highlighter   | one query cycle                 |
//! | `SearchOutcome`    | caller        | one query cycle                 |
//!
//! # Invariants
//!
//! - **DocumentRecord**: `folder` and `year_range` are never `Some("unknown")`
//!   or `Some("")`. The sentinel is mapped to `None` on the way in, so facet
//!   sets can be built by collecting whatever is present.
//! - **ScoredMatch**: `score >= 1` and `tier == RelevanceTier::for_score(score)`.
//! - **HighlightedText**: concatenating the span texts reproduces the input.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

/// Facet value the corpus loader uses to say "this record has no value".
pub const UNKNOWN_FACET: &str = "unknown";

/// Filter value that matches every record.
pub const ALL_FACET: &str = "all";

/// Map a raw facet value to `None` when it is empty or the `"unknown"` sentinel.
pub fn facet_value(raw: Option<String>) -> Option<String> {
    raw.filter(|value| {
        let trimmed = value.trim();
        !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(UNKNOWN_FACET)
    })
}

fn deserialize_facet<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(facet_value)
}

// =============================================================================
// RECORD IDENTITY
// =============================================================================

/// Opaque, stable record identifier.
///
/// Corpus files in the wild use both `"id": 17` and `"id": "thesis-17"`, so
/// deserialization accepts either and keeps the textual form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => RecordId(text),
            RawId::Unsigned(n) => RecordId(n.to_string()),
            RawId::Signed(n) => RecordId(n.to_string()),
        })
    }
}

// =============================================================================
// DOCUMENT RECORDS
// =============================================================================

/// One document in the corpus.
///
/// Immutable once loaded. The JSON shape matches what the corpus exporter
/// writes: camelCase keys, `abstract` spelled out, and `"unknown"` for a
/// missing folder or year range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub filename: String,
    #[serde(
        default,
        deserialize_with = "deserialize_facet",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_facet",
        skip_serializing_if = "Option::is_none"
    )]
    pub year_range: Option<String>,
    pub source: String,
    pub word_count: u64,
}

impl DocumentRecord {
    /// Create a record with the searchable text fields set and everything else empty.
    pub fn new(id: impl Into<RecordId>, title: &str, abstract_text: &str) -> Self {
        DocumentRecord {
            id: id.into(),
            title: title.to_string(),
            abstract_text: abstract_text.to_string(),
            filename: String::new(),
            folder: None,
            year_range: None,
            source: String::new(),
            word_count: 0,
        }
    }

    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }

    /// Set the folder facet. `"unknown"` and empty values leave it absent.
    pub fn with_folder(mut self, folder: &str) -> Self {
        self.folder = facet_value(Some(folder.to_string()));
        self
    }

    /// Set the year-range facet. `"unknown"` and empty values leave it absent.
    pub fn with_year_range(mut self, year_range: &str) -> Self {
        self.year_range = facet_value(Some(year_range.to_string()));
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    pub fn with_word_count(mut self, word_count: u64) -> Self {
        self.word_count = word_count;
        self
    }

    /// Value of the given facet, if the record has one.
    #[inline]
    pub fn facet(&self, kind: FacetKind) -> Option<&str> {
        match kind {
            FacetKind::Folder => self.folder.as_deref(),
            FacetKind::Year => self.year_range.as_deref(),
        }
    }
}

// =============================================================================
// QUERY VOCABULARY
// =============================================================================

/// Which categorical attribute a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Folder,
    Year,
}

impl FacetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::Folder => "folder",
            FacetKind::Year => "year",
        }
    }
}

/// A hard gate on one facet: either everything, or exactly one value.
///
/// Values are compared verbatim. A value that no record carries is legal and
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetFilter {
    #[default]
    All,
    Only(String),
}

impl FacetFilter {
    /// Exactly `"all"`, or an empty value, means no filtering. Any other
    /// spelling, `"All"` included, is a real facet value.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_FACET {
            FacetFilter::All
        } else {
            FacetFilter::Only(value.to_string())
        }
    }

    /// Does a record with this facet value pass the gate?
    #[inline]
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }

    /// The filter as the UI shows it: `"all"` or the selected value.
    pub fn as_str(&self) -> &str {
        match self {
            FacetFilter::All => ALL_FACET,
            FacetFilter::Only(value) => value,
        }
    }
}

/// Which text fields a query searches.
///
/// `All` is the only scope that also searches the filename. Title-only and
/// abstract-only searches never look at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldScope {
    #[default]
    All,
    TitleOnly,
    AbstractOnly,
}

impl FieldScope {
    #[inline]
    pub fn includes_title(self) -> bool {
        matches!(self, FieldScope::All | FieldScope::TitleOnly)
    }

    #[inline]
    pub fn includes_abstract(self) -> bool {
        matches!(self, FieldScope::All | FieldScope::AbstractOnly)
    }

    #[inline]
    pub fn includes_filename(self) -> bool {
        matches!(self, FieldScope::All)
    }
}

// =============================================================================
// MATCHES
// =============================================================================

/// Coarse relevance bucket for display.
///
/// Derived from the score and nothing else, so two matches with the same score
/// always land in the same tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    /// 3 and above is High, 2 is Medium, 1 is Low.
    #[inline]
    pub fn for_score(score: u32) -> Self {
        match score {
            3.. => RelevanceTier::High,
            2 => RelevanceTier::Medium,
            _ => RelevanceTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceTier::High => "high",
            RelevanceTier::Medium => "medium",
            RelevanceTier::Low => "low",
        }
    }
}

/// Which fields contributed to a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedFields {
    pub title: bool,
    #[serde(rename = "abstract")]
    pub abstract_text: bool,
    pub filename: bool,
}

impl MatchedFields {
    pub fn any(&self) -> bool {
        self.title || self.abstract_text || self.filename
    }
}

/// One ranked result.
///
/// `position` is the record's load order in the corpus. It is the tiebreaker
/// for equal scores and is carried along so ordering can be checked after the
/// fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub record: Arc<DocumentRecord>,
    pub position: usize,
    pub score: u32,
    pub tier: RelevanceTier,
    pub fields: MatchedFields,
}

impl ScoredMatch {
    pub fn id(&self) -> &RecordId {
        &self.record.id
    }
}

// =============================================================================
// HIGHLIGHTING
// =============================================================================

/// A run of text that either matched the query or didn't.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub text: String,
    pub is_match: bool,
}

impl Span {
    pub fn matched(text: &str) -> Self {
        Span {
            text: text.to_string(),
            is_match: true,
        }
    }

    pub fn plain(text: &str) -> Self {
        Span {
            text: text.to_string(),
            is_match: false,
        }
    }
}

/// Text split into matched and unmatched spans, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightedText {
    pub spans: Vec<Span>,
}

impl HighlightedText {
    /// Reassemble the original text.
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    pub fn match_count(&self) -> usize {
        self.spans.iter().filter(|span| span.is_match).count()
    }

    pub fn has_match(&self) -> bool {
        self.spans.iter().any(|span| span.is_match)
    }
}

/// A ranked result with its title and abstract decorated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedMatch {
    #[serde(flatten)]
    pub hit: ScoredMatch,
    pub title: HighlightedText,
    #[serde(rename = "abstract")]
    pub abstract_text: HighlightedText,
}

/// What a search produced.
///
/// "Nothing was typed" and "something was typed and nothing matched" are
/// different answers. The UI shows a prompt for the first and a "no results"
/// panel for the second, so they are different variants rather than two
/// empty vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "results", rename_all = "camelCase")]
pub enum SearchOutcome<T = ScoredMatch> {
    NoSearch,
    Results(Vec<T>),
}

impl<T> SearchOutcome<T> {
    pub fn is_no_search(&self) -> bool {
        matches!(self, SearchOutcome::NoSearch)
    }

    /// Results, or an empty slice for "no search".
    pub fn results(&self) -> &[T] {
        match self {
            SearchOutcome::NoSearch => &[],
            SearchOutcome::Results(results) => results,
        }
    }

    pub fn into_results(self) -> Vec<T> {
        match self {
            SearchOutcome::NoSearch => Vec::new(),
            SearchOutcome::Results(results) => results,
        }
    }

    pub fn len(&self) -> usize {
        self.results().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }
}
