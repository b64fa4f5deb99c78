// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding for matching.
//!
//! Matching is case-insensitive, highlighting is not allowed to lose the
//! original casing. Both need the same fold, and highlighting also needs to
//! map positions in the folded text back to the original.
//!
//! Unicode lower-casing is not length preserving: `'İ'` (2 bytes) lowers to
//! `"i̇"` (3 bytes), `'K'` (Kelvin sign, 3 bytes) lowers to `"k"` (1 byte).
//! So folded byte offsets and original byte offsets drift apart, and a match
//! in the folded text can even start or end in the middle of what was a single
//! original character. `FoldedText` keeps the mapping.

/// Lower-case a string for matching.
///
/// No whitespace collapsing, no diacritic stripping: the engine does literal
/// substring containment on the lower-cased text and nothing else.
///
/// Lower-cases character by character, which is exactly what `FoldedText`
/// does. `str::to_lowercase` would turn a word-final `'Σ'` into `'ς'` and the
/// two folds would disagree.
#[inline]
pub fn fold(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// A lower-cased copy of some text plus the offset mapping back to it.
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    /// `(folded_offset, original_offset)` at the start of every original
    /// character, plus a final `(folded.len(), original.len())` entry.
    /// Sorted by both components.
    boundaries: Vec<(usize, usize)>,
}

impl FoldedText {
    pub fn new(original: &str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut boundaries = Vec::with_capacity(original.len() + 1);

        for (original_offset, ch) in original.char_indices() {
            boundaries.push((folded.len(), original_offset));
            folded.extend(ch.to_lowercase());
        }
        boundaries.push((folded.len(), original.len()));

        FoldedText { folded, boundaries }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Original byte offset for a folded byte offset, if the folded offset sits
    /// on the start of an original character (or the very end).
    pub fn original_offset(&self, folded_offset: usize) -> Option<usize> {
        self.boundaries
            .binary_search_by_key(&folded_offset, |&(folded, _)| folded)
            .ok()
            .map(|idx| self.boundaries[idx].1)
    }
}
