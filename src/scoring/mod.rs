// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Facet filters are hard gates, field hits add fixed weights, and the sum is
//! the score. Ordering is score first, load order second. Nothing else.

mod core;
pub mod ranking;

pub use self::core::*;
