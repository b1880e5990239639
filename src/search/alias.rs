// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alias tables: curated synonyms that widen a query.
//!
//! Someone typing "haldi" wants turmeric; someone typing "hot" wants chilli.
//! The alias table maps a key to synonym terms, optionally bound to one
//! catalog item that earns a bonus whenever the key is among the search
//! terms.
//!
//! `search.json` has carried two alias shapes over time (see
//! [`RawAlias`]). Both are resolved here, once, into [`AliasEntry`], with
//! keys and terms normalized. Query-time code never branches on shape.

use crate::config::RawAlias;
use crate::search::utils::has_alias_partial_match;
use crate::util::normalize::normalize;
use std::collections::{BTreeMap, HashMap};

/// The catalog item an alias points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AliasBinding {
    Product(String),
    Service(String),
}

/// A resolved alias: normalized key, normalized non-empty terms, optional binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub key: String,
    pub terms: Vec<String>,
    pub binding: Option<AliasBinding>,
}

impl AliasEntry {
    /// Resolve a raw alias. Returns `None` for malformed values.
    ///
    /// When an object names both a product and a service, the product wins.
    pub fn resolve(key: &str, raw: &RawAlias) -> Option<Self> {
        let (terms, binding) = match raw {
            RawAlias::Bound {
                terms,
                product_id,
                service_id,
            } => {
                let binding = match (product_id, service_id) {
                    (Some(id), _) => Some(AliasBinding::Product(id.clone())),
                    (None, Some(id)) => Some(AliasBinding::Service(id.clone())),
                    (None, None) => None,
                };
                (terms, binding)
            }
            RawAlias::Terms(terms) => (terms, None),
            RawAlias::Malformed(_) => return None,
        };

        let mut normalized_terms: Vec<String> = Vec::with_capacity(terms.len());
        for term in terms.iter().map(|t| normalize(t)) {
            if !term.is_empty() && !normalized_terms.contains(&term) {
                normalized_terms.push(term);
            }
        }

        Some(Self {
            key: normalize(key),
            terms: normalized_terms,
            binding,
        })
    }

    /// Is this alias bound to the given product id?
    pub fn binds_product(&self, id: &str) -> bool {
        matches!(&self.binding, Some(AliasBinding::Product(bound)) if bound == id)
    }

    /// Is this alias bound to the given service id?
    pub fn binds_service(&self, id: &str) -> bool {
        matches!(&self.binding, Some(AliasBinding::Service(bound)) if bound == id)
    }
}

/// Resolved aliases sorted by raw key, plus a key index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    by_key: HashMap<String, usize>,
}

impl AliasTable {
    /// Build from the raw `searchAliases` map.
    ///
    /// Malformed values and keys that normalize to nothing are skipped with a
    /// warning. If two raw keys normalize to the same key, the first one wins.
    pub fn from_raw(raw: &BTreeMap<String, RawAlias>) -> Self {
        let mut table = AliasTable::default();
        for (key, value) in raw {
            let Some(entry) = AliasEntry::resolve(key, value) else {
                tracing::warn!(alias = %key, "skipping malformed alias entry");
                continue;
            };
            if entry.key.is_empty() {
                tracing::warn!(alias = %key, "skipping alias whose key normalizes to nothing");
                continue;
            }
            if table.by_key.contains_key(&entry.key) {
                tracing::warn!(alias = %key, normalized = %entry.key, "duplicate alias key, keeping first");
                continue;
            }
            table.push(entry);
        }
        table
    }

    /// Build directly from resolved entries (first key wins on duplicates).
    pub fn from_entries(entries: impl IntoIterator<Item = AliasEntry>) -> Self {
        let mut table = AliasTable::default();
        for entry in entries {
            if !entry.key.is_empty() && !table.by_key.contains_key(&entry.key) {
                table.push(entry);
            }
        }
        table
    }

    fn push(&mut self, entry: AliasEntry) {
        self.by_key.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Look up an alias by normalized key.
    pub fn get(&self, key: &str) -> Option<&AliasEntry> {
        self.by_key.get(key).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand a normalized query into the set of terms to score.
    ///
    /// 1. Seed with the query itself.
    /// 2. If the query is an alias key, add that alias's terms.
    /// 3. For every alias whose terms equal the query, or partially match it
    ///    in either direction, add the alias key and all its terms.
    /// 4. Drop empties and duplicates, keeping first occurrence.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let mut terms: Vec<String> = vec![query.to_string()];

        if let Some(entry) = self.get(query) {
            terms.extend(entry.terms.iter().cloned());
        }

        for entry in &self.entries {
            let exact = entry.terms.iter().any(|term| term == query);
            if exact || has_alias_partial_match(query, &entry.terms) {
                terms.push(entry.key.clone());
                terms.extend(entry.terms.iter().cloned());
            }
        }

        let mut unique: Vec<String> = Vec::with_capacity(terms.len());
        for term in terms {
            if !term.is_empty() && !unique.contains(&term) {
                unique.push(term);
            }
        }
        unique
    }
}
