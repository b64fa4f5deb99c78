// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory search and ranking over a fixed corpus of document records.
//!
//! Built for the thesis-library style of search box: a few hundred to a few
//! thousand records, case-insensitive substring matching on title, abstract
//! and filename, hard facet filters on folder and year range, and
//! search-as-you-type with debounce.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌──────────────┐
//! │  ingest.rs  │──▶│  corpus/    │──▶│  search/    │──▶│ highlight.rs │
//! │ (JSON →     │   │ (validate,  │   │ (score,     │   │ (spans with  │
//! │  records)   │   │  fold,facets│   │  rank)      │   │  casing kept)│
//! └─────────────┘   └─────────────┘   └─────────────┘   └──────────────┘
//!                          │                 ▲                  │
//!                          ▼                 │                  ▼
//!                   ┌─────────────┐   ┌─────────────┐   ┌──────────────┐
//!                   │  query.rs   │──▶│  engine.rs  │◀──│  session/    │
//!                   │ (normalize) │   │ (facade)    │   │ (debounce,   │
//!                   └─────────────┘   └─────────────┘   │  stale drop) │
//!                                                       └──────────────┘
//! ```
//!
//! # Scoring
//!
//! | Field    | Weight | Searched under scope     |
//! |----------|--------|--------------------------|
//! | Title    | 3      | All, TitleOnly           |
//! | Abstract | 2      | All, AbstractOnly        |
//! | Filename | 1      | All                      |
//!
//! Score 3+ is High relevance, 2 is Medium, 1 is Low. Equal scores keep
//! corpus load order.
//!
//! # Usage
//!
//! ```
//! use docsift::{Corpus, DocumentRecord, Query, SearchOutcome};
//!
//! let corpus = Corpus::load(vec![
//!     DocumentRecord::new(1u64, "AI in Education", "uses AI").with_folder("CS"),
//!     DocumentRecord::new(2u64, "Database Systems", "AI is mentioned").with_folder("CS"),
//! ])?;
//!
//! let outcome = docsift::search(&corpus, &Query::text("AI"), 10);
//! let scores: Vec<u32> = outcome.results().iter().map(|m| m.score).collect();
//! assert_eq!(scores, vec![5, 2]);
//!
//! assert_eq!(docsift::search(&corpus, &Query::text(""), 10), SearchOutcome::NoSearch);
//! # Ok::<(), docsift::CorpusError>(())
//! ```

pub mod config;
pub mod contracts;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod ingest;
pub mod query;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
pub mod types;
mod utils;

pub use config::SearchConfig;
pub use corpus::{Corpus, FacetValueSet};
pub use engine::SearchEngine;
pub use error::{ConfigError, CorpusError};
pub use highlight::{highlight, highlight_match};
pub use query::Query;
pub use scoring::ranking::compare_matches;
pub use scoring::{score, Match};
pub use search::{rank, rank_counted, search, Ranked};
pub use session::{replay, SearchSession, SessionHandle, SessionState, SettleEvent};
pub use types::{
    DocumentRecord, FacetFilter, FacetKind, FieldScope, HighlightedMatch, HighlightedText,
    MatchedFields, RecordId, RelevanceTier, ScoredMatch, SearchOutcome, Span,
};
pub use utils::{fold, FoldedText};
