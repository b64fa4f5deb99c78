// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored matches get sorted.
//!
//! Higher score first. Equal scores keep corpus load order. The load-order
//! tiebreak is part of the contract, not an accident of the sort algorithm:
//! it makes result order deterministic and testable, so it is spelled out in
//! the comparator instead of relying on sort stability alone.

use crate::types::ScoredMatch;
use std::cmp::Ordering;

/// Compare two matches for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Position** - ascending load order
///
/// Positions are unique within a corpus, so this is a total order and any
/// sort (stable or not, sequential or parallel) produces the same sequence.
pub fn compare_matches(a: &ScoredMatch, b: &ScoredMatch) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Is the slice in ranking order?
pub fn is_ranked(matches: &[ScoredMatch]) -> bool {
    matches
        .windows(2)
        .all(|pair| compare_matches(&pair[0], &pair[1]) != Ordering::Greater)
}
