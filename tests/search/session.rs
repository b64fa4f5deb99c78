//! Session tests: debounce, stale-result suppression, clearing, the worker.

use super::common::{load, make_record, sample_engine};
use docsift::{
    replay, FacetKind, FieldScope, SearchConfig, SearchEngine, SearchSession, SessionHandle,
    SessionState,
};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// SIMULATED CLOCK
// ============================================================================

#[test]
fn test_fast_keystrokes_settle_once_for_latest_text() {
    let mut session = SearchSession::new(sample_engine());
    let events = replay(&mut session, &["A", "AI", "AIE"], ms(80), Instant::now());

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.query.normalized_text, "aie");
    assert!(event.is_searching);
    assert!(event.results.is_empty());
}

#[test]
fn test_slow_keystrokes_settle_each_time() {
    let mut session = SearchSession::new(sample_engine());
    let events = replay(&mut session, &["A", "AI"], ms(500), Instant::now());

    let texts: Vec<&str> = events.iter().map(|e| e.query.normalized_text.as_str()).collect();
    assert_eq!(texts, vec!["a", "ai"]);
    assert!(events[0].generation < events[1].generation);
}

#[test]
fn test_clearing_emits_no_search_immediately() {
    let mut session = SearchSession::new(sample_engine());
    let t0 = Instant::now();
    session.on_search_change("AI", t0);

    let event = session.on_search_change("", t0 + ms(5)).expect("clear is synchronous");
    assert!(!event.is_searching);
    assert!(event.results.is_no_search());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.deadline(), None);
}

#[test]
fn test_cleared_text_then_typing_again() {
    let mut session = SearchSession::new(sample_engine());
    let events = replay(&mut session, &["AI", "", "data"], ms(50), Instant::now());

    assert_eq!(events.len(), 2);
    assert!(events[0].results.is_no_search());
    assert_eq!(events[1].query.normalized_text, "data");
    assert_eq!(events[1].results.len(), 1);
}

#[test]
fn test_scope_change_restarts_debounce() {
    let mut session = SearchSession::new(sample_engine());
    let t0 = Instant::now();
    session.on_search_change("AI", t0);
    session.on_scope_change(FieldScope::TitleOnly, t0 + ms(250));
    assert!(session.poll(t0 + ms(300)).is_none());

    let event = session.poll(t0 + ms(550)).unwrap();
    assert_eq!(event.results.len(), 1);
}

#[test]
fn test_filter_change_on_settled_session_reruns() {
    let mut session = SearchSession::new(sample_engine());
    let t0 = Instant::now();
    session.on_search_change("AI", t0);
    assert_eq!(session.poll(t0 + ms(300)).unwrap().results.len(), 2);

    session.on_filter_change(FacetKind::Year, "2020-2021", t0 + ms(400));
    assert_eq!(session.state(), SessionState::Pending);
    let event = session.poll(t0 + ms(700)).unwrap();
    assert_eq!(event.results.len(), 1);
    assert_eq!(event.query.year_filter.as_str(), "2020-2021");
}

#[test]
fn test_session_uses_configured_limit() {
    let records = (0..15u64).map(|i| make_record(i, "thesis", "")).collect();
    let engine = SearchEngine::new(load(records), SearchConfig::default());
    let mut session = SearchSession::new(engine).with_limit(4);
    let t0 = Instant::now();
    session.on_search_change("thesis", t0);
    let event = session.submit(t0).unwrap();
    assert_eq!(event.results.len(), 4);
    assert_eq!(event.total, 15);
    assert_eq!(event.summary(), "15 results found");
}

// ============================================================================
// WORKER THREAD
// ============================================================================

#[test]
fn test_worker_delivers_only_latest_query() {
    let config = SearchConfig::default().with_debounce_ms(150);
    let (handle, events) = SessionHandle::spawn(sample_engine(), config);

    for text in ["A", "AI", "AIE", "AI"] {
        handle.search_change(text);
    }

    let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(event.query.normalized_text, "ai");
    assert_eq!(event.results.len(), 2);
    assert!(events.recv_timeout(ms(400)).is_err(), "no further events");
    handle.shutdown();
}

#[test]
fn test_worker_filter_then_submit() {
    let config = SearchConfig::default().with_debounce_ms(10_000);
    let (handle, events) = SessionHandle::spawn(sample_engine(), config);

    handle.filter_change(FacetKind::Folder, "EE");
    handle.search_change("AI");
    handle.submit();

    let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(event.is_searching);
    assert!(event.results.is_empty());
    handle.shutdown();
}
