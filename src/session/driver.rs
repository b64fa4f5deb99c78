// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Threaded session driver.
//!
//! The UI thread pushes inputs into a channel and reads settle events from
//! another. The worker owns the `SearchSession` and implements the debounce
//! timer with `recv_timeout`.
//!
//! Stale-result suppression: every input bumps a shared generation counter
//! before it is queued. After ranking, the worker compares the event's
//! generation with the counter; if the UI has already sent something newer,
//! the finished results are dropped instead of delivered. The UI never sees
//! results for text it has already replaced.

use super::{SearchSession, SettleEvent};
use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::types::{FacetKind, FieldScope};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

/// Messages from the UI thread to the worker.
#[derive(Debug)]
enum Input {
    Search(String),
    Filter(FacetKind, String),
    Scope(FieldScope),
    Submit,
    Shutdown,
}

/// Handle to a session running on a background thread.
///
/// Dropping the handle stops the worker and waits for it to exit.
pub struct SessionHandle {
    tx: Sender<Input>,
    latest: Arc<AtomicU64>,
    engine: Arc<RwLock<SearchEngine>>,
    worker: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Start a worker. Settle events arrive on the returned receiver.
    pub fn spawn(engine: SearchEngine, config: SearchConfig) -> (Self, Receiver<SettleEvent>) {
        let (tx, rx) = channel::<Input>();
        let (event_tx, event_rx) = channel::<SettleEvent>();
        let latest = Arc::new(AtomicU64::new(0));
        let shared = Arc::new(RwLock::new(engine.clone()));

        let session = SearchSession::with_config(engine, &config);
        let worker = {
            let latest = Arc::clone(&latest);
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || run_worker(session, rx, event_tx, latest, shared))
        };

        let handle = SessionHandle {
            tx,
            latest,
            engine: shared,
            worker: Some(worker),
        };
        (handle, event_rx)
    }

    /// The search box text changed.
    pub fn search_change(&self, text: &str) {
        self.send_input(Input::Search(text.to_string()));
    }

    /// A facet filter selection changed.
    pub fn filter_change(&self, kind: FacetKind, value: &str) {
        self.send_input(Input::Filter(kind, value.to_string()));
    }

    pub fn scope_change(&self, field_scope: FieldScope) {
        self.send_input(Input::Scope(field_scope));
    }

    /// Settle the pending input now.
    pub fn submit(&self) {
        let _ = self.tx.send(Input::Submit);
    }

    /// Install a new engine. The next settle ranks against it.
    pub fn replace_engine(&self, engine: SearchEngine) {
        *self.engine.write() = engine;
    }

    /// Stop the worker and wait for it.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn send_input(&self, input: Input) {
        self.latest.fetch_add(1, Ordering::AcqRel);
        let _ = self.tx.send(input);
    }

    fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.tx.send(Input::Shutdown);
            if worker.join().is_err() {
                tracing::warn!(target: "docsift::session", "session worker panicked");
            }
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_worker(
    mut session: SearchSession,
    rx: Receiver<Input>,
    events: Sender<SettleEvent>,
    latest: Arc<AtomicU64>,
    shared: Arc<RwLock<SearchEngine>>,
) {
    tracing::debug!(target: "docsift::session", debounce = ?session.debounce(), "worker started");

    loop {
        let input = match session.deadline() {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(timeout) {
                    Ok(input) => Some(input),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(input) => Some(input),
                Err(_) => break,
            },
        };

        let now = Instant::now();
        let event = match input {
            Some(Input::Search(text)) => session.on_search_change(&text, now),
            Some(Input::Filter(kind, value)) => {
                session.on_filter_change(kind, &value, now);
                None
            }
            Some(Input::Scope(field_scope)) => {
                session.on_scope_change(field_scope, now);
                None
            }
            Some(Input::Submit) => {
                session.replace_engine(shared.read().clone());
                session.submit(now)
            }
            Some(Input::Shutdown) => break,
            None => {
                session.replace_engine(shared.read().clone());
                session.poll(now)
            }
        };

        let Some(event) = event else { continue };

        let newest = latest.load(Ordering::Acquire);
        if event.generation < newest {
            tracing::trace!(
                target: "docsift::session",
                generation = event.generation,
                newest,
                "discarding stale results"
            );
            continue;
        }

        if events.send(event).is_err() {
            // Receiver gone: nobody is listening any more.
            break;
        }
    }

    tracing::debug!(target: "docsift::session", "worker stopped");
}
