// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The side-effecting edge of search: navigation and the "searching" flag.
//!
//! [`SearchSession`] is what a search box talks to. `preview` runs a query
//! for the dropdown and stores the results in a last-write-wins slot.
//! `handle_search` is the Enter key: it runs the query and navigates to the
//! best match through an injected [`Navigator`].
//!
//! **Invariant**: `is_searching()` is true only while `handle_search` runs.
//! The flag is owned by a guard that clears it on drop, so it resets on
//! success, on an empty result, and on a panic in the searcher.
//!
//! A panic while scoring means the catalog provider broke its contract. It
//! is caught at the `handle_search` boundary, logged, and reported as
//! [`SearchOutcome::Failed`] with no navigation. `preview` and the
//! searchers themselves do not catch anything.

use crate::search::engine::Searcher;
use crate::types::SearchResult;
use crate::util::normalize::{char_len, normalize};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives the target path of the chosen result.
pub trait Navigator {
    fn navigate(&self, target: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, target: &str) {
        self(target)
    }
}

/// A navigator that remembers every target, in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.visited.lock().push(target.to_string());
    }
}

/// What `handle_search` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query below `min_query_length`; nothing ran.
    Skipped,
    /// The search ran and found nothing; no navigation.
    NoResults,
    /// Navigated to the top result.
    Navigated { target: String },
    /// The searcher panicked; nothing was navigated and the slot is untouched.
    Failed { message: String },
}

/// Sets the flag on creation and clears it on drop.
struct SearchingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SearchingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for SearchingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// A searcher, a navigator, the searching flag and the last results shown.
pub struct SearchSession<S, N> {
    searcher: S,
    navigator: N,
    searching: Arc<AtomicBool>,
    last_results: RwLock<Vec<SearchResult>>,
}

impl<S: Searcher, N: Navigator> SearchSession<S, N> {
    pub fn new(searcher: S, navigator: N) -> Self {
        Self {
            searcher,
            navigator,
            searching: Arc::new(AtomicBool::new(false)),
            last_results: RwLock::new(Vec::new()),
        }
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// True only while `handle_search` is running.
    pub fn is_searching(&self) -> bool {
        self.searching.load(Ordering::SeqCst)
    }

    /// Shared handle to the flag, for a spinner or another thread to watch.
    pub fn status_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.searching)
    }

    /// Results of the most recent `preview` or `handle_search`.
    pub fn last_results(&self) -> Vec<SearchResult> {
        self.last_results.read().clone()
    }

    /// Run a query for display and remember the results. Newest call wins.
    pub fn preview(&self, query: &str) -> Vec<SearchResult> {
        let results = self.searcher.search(query);
        *self.last_results.write() = results.clone();
        results
    }

    /// Dropdown suggestions: result names only.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.searcher.suggestions(query)
    }

    /// Search and navigate to the best match.
    pub fn handle_search(&self, query: &str) -> SearchOutcome {
        if char_len(&normalize(query)) < self.searcher.config().min_query_length {
            return SearchOutcome::Skipped;
        }

        let _guard = SearchingGuard::acquire(&self.searching);
        let results = match catch_unwind(AssertUnwindSafe(|| self.searcher.search(query))) {
            Ok(results) => results,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(query, error = %message, "search failed");
                return SearchOutcome::Failed { message };
            }
        };
        let best = results.first().map(|r| r.target.clone());
        *self.last_results.write() = results;

        match best {
            Some(target) => {
                tracing::debug!(query, %target, "navigating to best match");
                self.navigator.navigate(&target);
                SearchOutcome::Navigated { target }
            }
            None => {
                tracing::debug!(query, "no search results");
                SearchOutcome::NoResults
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
