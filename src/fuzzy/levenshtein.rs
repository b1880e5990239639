// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the normalized similarity built on top of it.
//!
//! The key insight carries over from bounded Levenshtein: `|len(a) - len(b)|`
//! is a lower bound on edit distance, so it is also an upper bound on
//! similarity. When even that bound misses the fuzzy threshold, the O(nm)
//! DP never runs. On a spice catalog most names differ from a short query
//! by far more characters than the threshold tolerates.

/// Classic Levenshtein distance: insertions, deletions and substitutions at
/// unit cost, counted over `char`s rather than bytes.
///
/// Two-row Wagner-Fischer, O(nm) time and O(m) space.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != *bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Normalized similarity: `(max_len - distance) / max_len`.
///
/// Ranges over `[0.0, 1.0]`. Two empty strings are identical, so they score 1.0.
///
/// ```
/// use spicerack::similarity;
///
/// assert_eq!(similarity("turmeric", "turmeric"), 1.0);
/// assert_eq!(similarity("tumeric", "turmeric"), 0.875);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Similarity if it reaches `threshold`, `None` otherwise.
///
/// Equivalent to `Some(similarity(a, b)).filter(|s| *s >= threshold)`, but
/// skips the DP when the length difference alone rules the pair out.
pub fn similarity_at_least(a: &str, b: &str, threshold: f64) -> Option<f64> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return (1.0 >= threshold).then_some(1.0);
    }

    // Early-exit: distance >= length difference, so similarity <= this bound
    let bound = (max_len - a_len.abs_diff(b_len)) as f64 / max_len as f64;
    if bound < threshold {
        return None;
    }

    let score = similarity(a, b);
    (score >= threshold).then_some(score)
}
