// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Highest score first. Ties keep their insertion order, which is all
//! products in catalog order followed by all services in catalog order.
//! [`rank`] uses a stable sort and [`compare_results`] reports ties as
//! `Equal`; there is no secondary key.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two results for ranking: higher relevance sorts first.
///
/// Uses `total_cmp` so the order is total even for pathological floats.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.relevance_score.total_cmp(&a.relevance_score)
}

/// Stable-sort by descending relevance, then keep the first `max_results`.
pub fn rank(mut results: Vec<SearchResult>, max_results: usize) -> Vec<SearchResult> {
    results.sort_by(compare_results);
    results.truncate(max_results);
    results
}
