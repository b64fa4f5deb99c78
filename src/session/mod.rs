// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search session controller: debounce keystrokes, settle on the latest input.
//!
//! ```text
//!   Idle ──keystroke──► Pending ──timer / submit──► Settled
//!    ▲                   │   ▲                        │
//!    │                   │   └──────keystroke─────────┘
//!    └───────clear───────┴──────────clear─────────────┘
//! ```
//!
//! `SearchSession` is a plain state machine. It never reads the clock: every
//! call takes the current `Instant`, so tests drive it on a simulated clock
//! and get exact answers. [`SessionHandle`] runs one on a worker thread
//! against the real clock.
//!
//! Only the latest input is ever settled. A keystroke before the timer fires
//! replaces the pending text and restarts the timer, so intermediate inputs
//! never reach the ranker at all.

mod driver;

pub use driver::SessionHandle;

use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::query::Query;
use crate::types::{FacetFilter, FacetKind, FieldScope, HighlightedMatch, SearchOutcome};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Where the session is in its debounce cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Nothing typed.
    Idle,
    /// Input received, waiting for the debounce window to pass.
    Pending,
    /// Results for the latest input have been emitted.
    Settled,
}

/// What the UI receives when the session settles or is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleEvent {
    /// Input generation this event answers. Strictly increasing across the
    /// events of one session.
    pub generation: u64,
    /// False exactly when the settled query is "no search".
    pub is_searching: bool,
    pub query: Query,
    /// The result window, at most the session limit long.
    pub results: SearchOutcome<HighlightedMatch>,
    /// Matches before the limit was applied.
    pub total: usize,
}

impl SettleEvent {
    /// Text for the result count line.
    pub fn summary(&self) -> String {
        match &self.results {
            SearchOutcome::NoSearch => "type to search".to_string(),
            SearchOutcome::Results(_) => match self.total {
                1 => "1 result found".to_string(),
                n => format!("{} results found", n),
            },
        }
    }
}

/// Debounced search state machine.
#[derive(Debug, Clone)]
pub struct SearchSession {
    engine: SearchEngine,
    debounce: Duration,
    limit: usize,

    text: String,
    folder_filter: FacetFilter,
    year_filter: FacetFilter,
    field_scope: FieldScope,

    state: SessionState,
    deadline: Option<Instant>,
    generation: u64,
}

impl SearchSession {
    /// A session using the engine's own debounce window and page limit.
    pub fn new(engine: SearchEngine) -> Self {
        let config = engine.config().clone();
        Self::with_config(engine, &config)
    }

    pub fn with_config(engine: SearchEngine, config: &SearchConfig) -> Self {
        SearchSession {
            engine,
            debounce: config.debounce(),
            limit: config.page_limit,
            text: String::new(),
            folder_filter: FacetFilter::All,
            year_filter: FacetFilter::All,
            field_scope: FieldScope::All,
            state: SessionState::Idle,
            deadline: None,
            generation: 0,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// When the pending input will settle, if anything is pending.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of inputs received so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Swap in a new engine. The next settle uses it.
    pub fn replace_engine(&mut self, engine: SearchEngine) {
        self.engine = engine;
    }

    /// The query the current input and filters would run.
    pub fn current_query(&self) -> Query {
        Query::normalize(
            &self.text,
            self.folder_filter.clone(),
            self.year_filter.clone(),
            self.field_scope,
        )
    }

    /// The search text changed.
    ///
    /// Non-empty text (re)starts the debounce timer and returns `None`.
    /// Empty or whitespace-only text clears the session right away: the timer
    /// is cancelled and the "no search" event is returned.
    pub fn on_search_change(&mut self, text: &str, now: Instant) -> Option<SettleEvent> {
        self.generation += 1;
        self.text = text.to_string();

        if text.trim().is_empty() {
            self.state = SessionState::Idle;
            self.deadline = None;
            let event = SettleEvent {
                generation: self.generation,
                is_searching: false,
                query: self.current_query(),
                results: SearchOutcome::NoSearch,
                total: 0,
            };
            tracing::debug!(target: "docsift::session", generation = self.generation, "cleared");
            return Some(event);
        }

        self.arm(now);
        None
    }

    /// A facet filter changed. Restarts the timer when there is text to
    /// search; otherwise only records the selection.
    pub fn on_filter_change(&mut self, kind: FacetKind, value: &str, now: Instant) {
        let filter = FacetFilter::parse(value);
        match kind {
            FacetKind::Folder => self.folder_filter = filter,
            FacetKind::Year => self.year_filter = filter,
        }
        self.on_refinement(now);
    }

    /// The field scope changed. Same timing rules as a filter change.
    pub fn on_scope_change(&mut self, field_scope: FieldScope, now: Instant) {
        self.field_scope = field_scope;
        self.on_refinement(now);
    }

    /// Settle the pending input immediately (Enter key). No-op when nothing
    /// is pending.
    pub fn submit(&mut self, now: Instant) -> Option<SettleEvent> {
        if self.state != SessionState::Pending {
            return None;
        }
        Some(self.settle(now))
    }

    /// Settle if the debounce window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<SettleEvent> {
        match self.deadline {
            Some(deadline) if now >= deadline && self.state == SessionState::Pending => {
                Some(self.settle(now))
            }
            _ => None,
        }
    }

    fn on_refinement(&mut self, now: Instant) {
        self.generation += 1;
        if self.text.trim().is_empty() {
            return;
        }
        self.arm(now);
    }

    fn arm(&mut self, now: Instant) {
        self.state = SessionState::Pending;
        self.deadline = Some(now + self.debounce);
    }

    fn settle(&mut self, now: Instant) -> SettleEvent {
        let query = self.current_query();
        let (results, total) = self.engine.search_highlighted_counted(&query, self.limit);
        let early_by = self.deadline.map(|deadline| deadline.saturating_duration_since(now));

        self.state = SessionState::Settled;
        self.deadline = None;

        tracing::debug!(
            target: "docsift::session",
            generation = self.generation,
            query = %query.normalized_text,
            results = results.len(),
            total,
            ?early_by,
            "settled"
        );

        SettleEvent {
            generation: self.generation,
            is_searching: !query.is_no_search(),
            query,
            results,
            total,
        }
    }
}

/// Feed successive input states through a session on a simulated clock.
///
/// Input `i` arrives at `start + i * interval`. Timers that expire between
/// inputs fire before the next input is applied, and the last pending input
/// is settled at its deadline. Returns every event in order.
pub fn replay(
    session: &mut SearchSession,
    inputs: &[&str],
    interval: Duration,
    start: Instant,
) -> Vec<SettleEvent> {
    let mut events = Vec::new();
    let mut now = start;

    for (i, input) in inputs.iter().enumerate() {
        if i > 0 {
            now += interval;
        }
        events.extend(session.poll(now));
        events.extend(session.on_search_change(input, now));
    }

    if let Some(deadline) = session.deadline() {
        events.extend(session.poll(deadline));
    }
    events
}
