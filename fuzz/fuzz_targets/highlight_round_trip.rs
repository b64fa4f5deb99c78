// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Any text and any query must split into spans that concatenate back to the
//! original text. Only the empty text may produce an empty span.

#![no_main]

use docsift::highlight;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String)| {
    let (text, query) = input;
    // Cap the query so a pathological needle doesn't time out
    let query: String = query.chars().take(32).collect();

    let highlighted = highlight(&text, &query);
    assert_eq!(highlighted.to_plain(), text);
    if !text.is_empty() {
        assert!(highlighted.spans.iter().all(|span| !span.text.is_empty()));
    }
});
