// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized search for live typing.
//!
//! A search-as-you-type box re-runs the same handful of prefixes over and
//! over ("cu", "cum", "cumi", backspace, "cumi" again). [`CachedSearcher`]
//! remembers results per normalized query under the default config in a
//! bounded [`moka`] cache. The snapshot is immutable, so entries never go
//! stale and there is no TTL; moka evicts once `capacity` is reached.
//!
//! Per-call overrides bypass the cache entirely.

use crate::config::{SearchConfig, SearchConfigOverride};
use crate::search::engine::{CatalogSearcher, Searcher};
use crate::types::SearchResult;
use crate::util::normalize::{char_len, normalize};
use moka::sync::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Default number of memoized queries.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Hit and miss counters, for the CLI and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// A [`CatalogSearcher`] with a bounded memo in front of it.
#[derive(Debug)]
pub struct CachedSearcher {
    inner: CatalogSearcher,
    capacity: usize,
    cache: Cache<String, Arc<[SearchResult]>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedSearcher {
    pub fn new(inner: CatalogSearcher) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// A capacity of 0 disables memoization.
    pub fn with_capacity(inner: CatalogSearcher, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            cache: Cache::builder().max_capacity(capacity as u64).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &CatalogSearcher {
        &self.inner
    }

    /// Uncached search with a per-call override.
    pub fn search_with(&self, query: &str, overrides: &SearchConfigOverride) -> Vec<SearchResult> {
        self.inner.search_with(query, overrides)
    }

    /// Drop every memoized entry and reset counters.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Counters plus the entry count after moka's pending evictions have run.
    pub fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count() as usize,
        }
    }
}

impl Searcher for CachedSearcher {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        let key = normalize(query);
        if self.capacity == 0 || char_len(&key) < self.inner.config().min_query_length {
            return self.inner.search(query);
        }

        if let Some(hit) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit.to_vec();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let results = self.inner.search(&key);
        self.cache.insert(key, Arc::from(results.as_slice()));
        results
    }

    fn config(&self) -> &SearchConfig {
        self.inner.config()
    }
}
