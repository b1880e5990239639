// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared matching primitives for the search path.
//!
//! The boring-but-essential pieces every signal needs: a pre-normalized
//! field with its words split out, and the word-level and whole-string
//! containment checks. Catalog fields are prepared once at load, terms once
//! per query, so scoring never re-normalizes inside the hot loop.
//!
//! Empty strings never match anything. An empty description would otherwise
//! "contain" every term, and every query would hit every item.

use crate::util::normalize::normalize;

/// A normalized string together with its space-separated words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedField {
    text: String,
    words: Vec<String>,
}

impl NormalizedField {
    /// Normalize `raw` and split it into words.
    pub fn new(raw: &str) -> Self {
        Self::from_normalized(normalize(raw))
    }

    /// Wrap text that is already normalized.
    pub fn from_normalized(text: String) -> Self {
        let words = text
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { text, words }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Some word of `other` contains, or is contained in, some word of `self`.
    pub fn word_match(&self, other: &NormalizedField) -> bool {
        other.words.iter().any(|other_word| {
            self.words
                .iter()
                .any(|word| word.contains(other_word.as_str()) || other_word.contains(word.as_str()))
        })
    }

    /// `other` is a substring of `self`, or `self` is a substring of `other`.
    pub fn partial_match(&self, other: &NormalizedField) -> bool {
        contains_either_way(&self.text, &other.text)
    }
}

/// Either string contains the other. False if either is empty.
pub fn contains_either_way(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// Does the query partially match any alias term?
///
/// Both sides must already be normalized.
pub fn has_alias_partial_match(query: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| contains_either_way(term, query))
}

/// Does any word of `term` contain, or sit inside, any word of `text`?
///
/// Convenience form over raw strings; both sides are normalized first.
pub fn has_word_match(term: &str, text: &str) -> bool {
    NormalizedField::new(text).word_match(&NormalizedField::new(term))
}

/// Is normalized `term` a substring of normalized `text`, or vice versa?
pub fn has_partial_match(term: &str, text: &str) -> bool {
    NormalizedField::new(text).partial_match(&NormalizedField::new(term))
}
