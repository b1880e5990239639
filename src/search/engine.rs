// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog search core: redirect → alias expansion → score → rank.
//!
//! [`CatalogSearcher`] owns a prepared, immutable snapshot of the catalog.
//! Every field is normalized once at construction, so a query costs one
//! normalization, one alias expansion and an items × terms scoring pass.
//! With tens of items that is microseconds, so the pass is synchronous and
//! single-threaded. The snapshot sits behind `Arc`s; clones are cheap and
//! concurrent searches share it read-only.
//!
//! `search` is a pure function of (query, snapshot, config): no navigation,
//! no mutation. Side effects live in `session`.

use crate::catalog::CatalogProvider;
use crate::config::{SearchConfig, SearchConfigOverride, SearchSettings};
use crate::contracts::check_results_ranked;
use crate::error::{CatalogError, Result};
use crate::fuzzy::similarity_at_least;
use crate::scoring::ranking::rank;
use crate::scoring::{ScoreCard, Signal, SignalHit};
use crate::search::alias::{AliasEntry, AliasTable};
use crate::search::redirect::QuickRedirects;
use crate::search::utils::NormalizedField;
use crate::types::{CatalogItem, ItemKind, Product, SearchResult, Service};
use crate::util::normalize::{char_len, normalize};
use std::collections::HashSet;
use std::sync::Arc;

/// Anything that can answer a query with ranked results.
///
/// Implemented by [`CatalogSearcher`] and by the memoizing
/// [`CachedSearcher`](crate::CachedSearcher), so sessions and the CLI can
/// take either.
pub trait Searcher {
    /// Ranked results for `query` under the default config.
    fn search(&self, query: &str) -> Vec<SearchResult>;

    /// The config `search` runs with.
    fn config(&self) -> &SearchConfig;

    /// Display names of the results, for autocomplete.
    fn suggestions(&self, query: &str) -> Vec<String> {
        self.search(query).into_iter().map(|r| r.name).collect()
    }
}

/// A catalog item with its matchable fields pre-normalized.
#[derive(Debug, Clone)]
pub(crate) struct PreparedItem {
    pub(crate) item: CatalogItem,
    name: NormalizedField,
    category: Option<NormalizedField>,
    description: NormalizedField,
}

impl PreparedItem {
    fn new(item: CatalogItem) -> Self {
        Self {
            name: NormalizedField::new(item.name()),
            category: item.category().map(NormalizedField::new),
            description: NormalizedField::new(item.description()),
            item,
        }
    }

    fn is_bound_by(&self, alias: &AliasEntry) -> bool {
        match &self.item {
            CatalogItem::Product(p) => alias.binds_product(&p.id),
            CatalogItem::Service(s) => alias.binds_service(&s.id),
        }
    }
}

/// Fuzzy search over one immutable catalog snapshot.
#[derive(Debug, Clone)]
pub struct CatalogSearcher {
    config: SearchConfig,
    items: Arc<[PreparedItem]>,
    product_count: usize,
    aliases: Arc<AliasTable>,
    redirects: Arc<QuickRedirects>,
}

impl CatalogSearcher {
    /// Build from a provider's products, services and settings.
    pub fn from_provider<P: CatalogProvider + ?Sized>(provider: &P) -> Result<Self> {
        Self::new(
            provider.products().to_vec(),
            provider.services().to_vec(),
            provider.settings(),
        )
    }

    /// Build from loose parts.
    ///
    /// Validates the config and rejects duplicate ids within a kind. Alias
    /// and redirect tables are resolved and normalized here, once.
    pub fn new(
        products: Vec<Product>,
        services: Vec<Service>,
        settings: &SearchSettings,
    ) -> Result<Self> {
        settings.search_config.validate()?;
        check_unique_ids(ItemKind::Product, products.iter().map(|p| p.id.as_str()))?;
        check_unique_ids(ItemKind::Service, services.iter().map(|s| s.id.as_str()))?;

        let product_count = products.len();
        let items: Vec<PreparedItem> = products
            .into_iter()
            .map(CatalogItem::from)
            .chain(services.into_iter().map(CatalogItem::from))
            .map(PreparedItem::new)
            .collect();

        let aliases = AliasTable::from_raw(&settings.search_aliases);
        let redirects = QuickRedirects::from_raw(&settings.quick_redirects);

        tracing::debug!(
            products = product_count,
            services = items.len() - product_count,
            aliases = aliases.len(),
            redirects = redirects.len(),
            "catalog snapshot prepared"
        );

        Ok(Self {
            config: settings.search_config.clone(),
            items: items.into(),
            product_count,
            aliases: Arc::new(aliases),
            redirects: Arc::new(redirects),
        })
    }

    /// Ranked results with `overrides` merged on top of the default config.
    pub fn search_with(&self, query: &str, overrides: &SearchConfigOverride) -> Vec<SearchResult> {
        if overrides.is_empty() {
            return self.run(query, &self.config);
        }
        let config = self.config.merged(overrides);
        self.run(query, &config)
    }

    /// The terms a query expands to, in scoring order.
    ///
    /// Empty when the query is below `min_query_length` or is a quick redirect.
    pub fn expanded_terms(&self, query: &str) -> Vec<String> {
        let normalized = normalize(query);
        if char_len(&normalized) < self.config.min_query_length
            || self.redirects.get(&normalized).is_some()
        {
            return Vec::new();
        }
        self.aliases.expand(&normalized)
    }

    /// Every signal that fires for one item, for debugging rankings.
    ///
    /// Returns `None` if the item does not exist. Ignores redirects and the
    /// length guard: this answers "how would this item score", not "what
    /// would the user see".
    pub fn explain(&self, query: &str, kind: ItemKind, id: &str) -> Option<Vec<SignalHit>> {
        let prepared = self
            .items
            .iter()
            .find(|p| p.item.kind() == kind && p.item.id() == id)?;
        let terms = self.prepare_terms(&normalize(query));
        Some(
            self.score_item(prepared, &terms, self.config.fuzzy_threshold)
                .into_hits(),
        )
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn redirects(&self) -> &QuickRedirects {
        &self.redirects
    }

    /// All items: products in catalog order, then services in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().map(|p| &p.item)
    }

    pub fn product_count(&self) -> usize {
        self.product_count
    }

    pub fn service_count(&self) -> usize {
        self.items.len() - self.product_count
    }

    fn prepare_terms(&self, normalized_query: &str) -> Vec<NormalizedField> {
        self.aliases
            .expand(normalized_query)
            .into_iter()
            .map(NormalizedField::from_normalized)
            .collect()
    }

    fn run(&self, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
        let normalized = normalize(query);
        if char_len(&normalized) < config.min_query_length {
            return Vec::new();
        }

        if let Some(redirect) = self.redirects.resolve(&normalized) {
            tracing::debug!(query = %normalized, target = %redirect.target, "quick redirect");
            return vec![redirect];
        }

        let terms = self.prepare_terms(&normalized);
        let mut results = Vec::new();
        for prepared in self.items.iter() {
            let card = self.score_item(prepared, &terms, config.fuzzy_threshold);
            if card.is_match() {
                results.push(SearchResult::from_item(&prepared.item, card.total()));
            }
        }

        let matched = results.len();
        let ranked = rank(results, config.max_results);
        check_results_ranked(&ranked, config.max_results);

        tracing::debug!(
            query = %normalized,
            terms = terms.len(),
            matched,
            returned = ranked.len(),
            "search complete"
        );
        ranked
    }

    /// Accumulate every signal for every term. Scores add across terms.
    fn score_item(
        &self,
        prepared: &PreparedItem,
        terms: &[NormalizedField],
        fuzzy_threshold: f64,
    ) -> ScoreCard {
        let mut card = ScoreCard::new(prepared.item.kind());

        for term in terms {
            let text = term.text();

            if prepared.name.text() == text {
                card.add(text, Signal::ExactName);
            }

            if let Some(alias) = self.aliases.get(text) {
                if prepared.is_bound_by(alias) {
                    card.add(text, Signal::AliasBinding);
                }
            }

            if let Some(score) = similarity_at_least(text, prepared.name.text(), fuzzy_threshold) {
                card.add(text, Signal::FuzzyName(score));
            }

            if prepared.name.word_match(term) {
                card.add(text, Signal::NameWord);
            }
            if prepared.name.partial_match(term) {
                card.add(text, Signal::NamePartial);
            }

            if let Some(category) = &prepared.category {
                if category.word_match(term) {
                    card.add(text, Signal::CategoryWord);
                }
                if category.partial_match(term) {
                    card.add(text, Signal::CategoryPartial);
                }
            }

            if prepared.description.word_match(term) {
                card.add(text, Signal::DescriptionWord);
            }
            if prepared.description.partial_match(term) {
                card.add(text, Signal::DescriptionPartial);
            }
        }

        card
    }
}

impl Searcher for CatalogSearcher {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        self.run(query, &self.config)
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }
}

fn check_unique_ids<'a>(kind: ItemKind, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
