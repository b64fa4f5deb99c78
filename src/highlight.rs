// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting: split text into matched and unmatched spans.
//!
//! The search runs over the lower-cased text, the spans are cut from the
//! original. `FoldedText` carries the offset mapping between the two, so the
//! output keeps the user's casing and always concatenates back to the input,
//! even when lower-casing changes byte lengths.
//!
//! ```text
//! highlight("AI in Education", "ai")
//!   → [ {"AI", match}, {" in Education", plain} ]
//! ```

use crate::contracts;
use crate::query::Query;
use crate::types::{HighlightedMatch, HighlightedText, ScoredMatch, Span};
use crate::utils::{fold, FoldedText};

/// Split `text` into spans around every occurrence of `query_text`.
///
/// Occurrences are found left to right and never overlap: after a match the
/// scan resumes at its end. An occurrence whose edges fall inside a single
/// original character (possible when lower-casing expands a character) is
/// skipped rather than split. An empty query yields one plain span holding
/// the whole text.
pub fn highlight(text: &str, query_text: &str) -> HighlightedText {
    let needle = fold(query_text);
    if needle.is_empty() {
        return HighlightedText {
            spans: vec![Span::plain(text)],
        };
    }

    let folded = FoldedText::new(text);
    let haystack = folded.as_str();

    let mut spans = Vec::new();
    // Original offset up to which spans have been emitted.
    let mut emitted = 0;
    // Folded offset where the next search starts.
    let mut from = 0;

    while let Some(relative) = haystack[from..].find(needle.as_str()) {
        let start = from + relative;
        let end = start + needle.len();

        match (folded.original_offset(start), folded.original_offset(end)) {
            (Some(original_start), Some(original_end)) => {
                if original_start > emitted {
                    spans.push(Span::plain(&text[emitted..original_start]));
                }
                spans.push(Span::matched(&text[original_start..original_end]));
                emitted = original_end;
                from = end;
            }
            _ => {
                // Unaligned: retry one character further on.
                let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
                from = start + step;
            }
        }

        if from >= haystack.len() {
            break;
        }
    }

    if emitted < text.len() {
        spans.push(Span::plain(&text[emitted..]));
    }

    let highlighted = HighlightedText { spans };
    contracts::check_round_trip(text, &highlighted);
    highlighted
}

/// Decorate a ranked result's title and abstract for display.
pub fn highlight_match(hit: ScoredMatch, query: &Query) -> HighlightedMatch {
    let needle = query.normalized_text.as_str();
    let title = highlight(&hit.record.title, needle);
    let abstract_text = highlight(&hit.record.abstract_text, needle);
    HighlightedMatch {
        hit,
        title,
        abstract_text,
    }
}
