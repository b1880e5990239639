// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking path.
//!
//! Debug-mode assertions over what the engine hands back. They cost nothing
//! in release builds (`debug_assert!`) and fail loudly during development
//! and in tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                 | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | compile-time block       | exact name beats every partial-only signal      |
//! | `check_results_ranked`   | sorted by score, truncated, scores finite > 0   |

use crate::scoring::{
    CATEGORY_PARTIAL_SCORE, CATEGORY_WORD_SCORE, EXACT_NAME_SCORE, FUZZY_NAME_WEIGHT,
    NAME_PARTIAL_SCORE, NAME_WORD_SCORE, PRODUCT_DESCRIPTION_PARTIAL_SCORE,
    PRODUCT_DESCRIPTION_WORD_SCORE, SERVICE_DESCRIPTION_PARTIAL_SCORE,
    SERVICE_DESCRIPTION_WORD_SCORE,
};
use crate::types::SearchResult;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// If the weights are retuned so that a pile of partial signals can
/// outscore an exact name, the crate stops building.
const _: () = {
    const PRODUCT_PARTIALS: f64 = NAME_WORD_SCORE
        + NAME_PARTIAL_SCORE
        + CATEGORY_WORD_SCORE
        + CATEGORY_PARTIAL_SCORE
        + PRODUCT_DESCRIPTION_WORD_SCORE
        + PRODUCT_DESCRIPTION_PARTIAL_SCORE;
    const SERVICE_PARTIALS: f64 = NAME_WORD_SCORE
        + NAME_PARTIAL_SCORE
        + SERVICE_DESCRIPTION_WORD_SCORE
        + SERVICE_DESCRIPTION_PARTIAL_SCORE;

    // exact_beats_partials: 10.0 > 4.1 and 10.0 > 3.45
    assert!(EXACT_NAME_SCORE > PRODUCT_PARTIALS);
    assert!(EXACT_NAME_SCORE > SERVICE_PARTIALS);

    // A perfect fuzzy hit alone still sits below an exact match.
    assert!(EXACT_NAME_SCORE > FUZZY_NAME_WEIGHT);
};

// ============================================================================
// RUNTIME CONTRACTS (debug builds only)
// ============================================================================

/// Results are non-increasing by score, at most `max_results` long, and
/// every score is finite and positive.
#[inline]
pub fn check_results_ranked(results: &[SearchResult], max_results: usize) {
    debug_assert!(
        results.len() <= max_results,
        "Contract violation: {} results exceed max_results {}",
        results.len(),
        max_results
    );

    for result in results {
        debug_assert!(
            result.relevance_score.is_finite() && result.relevance_score > 0.0,
            "Contract violation: {} '{}' has score {}",
            result.kind,
            result.id,
            result.relevance_score
        );
    }

    for pair in results.windows(2) {
        debug_assert!(
            pair[0].relevance_score >= pair[1].relevance_score,
            "Contract violation: '{}' ({}) ranked above '{}' ({})",
            pair[0].id,
            pair[0].relevance_score,
            pair[1].id,
            pair[1].relevance_score
        );
    }
}
