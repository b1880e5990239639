// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quick redirects: exact-match shortcuts that bypass scoring.
//!
//! Typing "contact" should go to the contact page, not rank a product whose
//! description mentions contacting the sales team. Redirects are checked
//! before anything else and short-circuit the whole search.

use crate::scoring::REDIRECT_SCORE;
use crate::types::{ItemKind, SearchResult};
use crate::util::normalize::normalize;
use std::collections::{BTreeMap, HashMap};

/// Id given to the synthetic redirect result.
pub const REDIRECT_ID: &str = "redirect";

/// Normalized query -> target path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickRedirects {
    targets: HashMap<String, String>,
}

impl QuickRedirects {
    /// Build from the raw `quickRedirects` map, normalizing keys.
    ///
    /// Keys that normalize to nothing are dropped. On normalized collisions
    /// the first key in file order wins.
    pub fn from_raw(raw: &BTreeMap<String, String>) -> Self {
        let mut targets = HashMap::with_capacity(raw.len());
        for (key, target) in raw {
            let key = normalize(key);
            if key.is_empty() {
                continue;
            }
            targets.entry(key).or_insert_with(|| target.clone());
        }
        Self { targets }
    }

    /// Target path for an already-normalized query.
    pub fn get(&self, normalized_query: &str) -> Option<&str> {
        self.targets.get(normalized_query).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// All redirects, sorted by key for stable display.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .targets
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// The single synthetic result for a redirect hit, if any.
    pub fn resolve(&self, normalized_query: &str) -> Option<SearchResult> {
        let target = self.get(normalized_query)?;
        Some(SearchResult {
            kind: ItemKind::Service,
            id: REDIRECT_ID.to_string(),
            name: format!("Go to {}", normalized_query),
            description: format!("Redirect to {} page", normalized_query),
            category: None,
            target: target.to_string(),
            relevance_score: REDIRECT_SCORE,
        })
    }
}
