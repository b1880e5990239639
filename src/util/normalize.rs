// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization applied to every string before comparison.
//!
//! Queries, product names, categories, descriptions, alias keys, alias terms
//! and redirect keys all pass through [`normalize`]. If one side of a
//! comparison skips it, "Black Pepper!" stops matching "black pepper", so
//! the catalog is normalized once at load and queries once per call.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching.
///
/// 1. Lowercase
/// 2. Fold diacritics (with the `unicode-normalization` feature): NFD, then
///    drop combining marks, so "café" becomes "cafe"
/// 3. Strip every character that is neither a word character nor whitespace
/// 4. Trim and collapse whitespace runs to a single space
/// 5. Put any remaining combining marks back in canonical order, since
///    stripping a character between two marks can leave them unordered
///
/// The function is idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// ```
/// use spicerack::normalize;
///
/// assert_eq!(normalize("  Garam   Masala! "), "garam masala");
/// assert_eq!(normalize("Chilli-Powder (Hot)"), "chillipowder hot");
/// ```
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    strip_and_collapse(&folded).nfd().collect()
}

/// Normalization without diacritic folding: "café" loses the "é" entirely.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    strip_and_collapse(&value.to_lowercase())
}

/// Word characters survive normalization: Unicode letters, digits and `_`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn strip_and_collapse(value: &str) -> String {
    value
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining diacritical marks (category Mn) that NFD splits off Latin letters.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Length of a normalized string in characters, the unit `min_query_length` counts.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
