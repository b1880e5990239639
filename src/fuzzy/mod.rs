// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! "tumeric" should still find Turmeric. Catalogs here hold tens of
//! items, so a plain DP Levenshtein with a length-gap early exit is plenty.

mod levenshtein;

pub use levenshtein::*;
