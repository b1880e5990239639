// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard selection over a result list.
//!
//! Arrow keys move a highlight through the dropdown and wrap at both ends;
//! Enter picks the highlighted result. New results reset the highlight to
//! the top. This is that model without any rendering attached.

use crate::types::SearchResult;

/// Highlighted position within a list of `len` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCursor {
    len: usize,
    index: usize,
}

impl SelectionCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Point at a fresh list, highlighting its first entry.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    /// Move down, wrapping to the top. No-op on an empty list.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move up, wrapping to the bottom. No-op on an empty list.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Highlighted index, or `None` when there is nothing to highlight.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// The highlighted result from the list this cursor was built for.
    pub fn selected<'a>(&self, results: &'a [SearchResult]) -> Option<&'a SearchResult> {
        self.index().and_then(|i| results.get(i))
    }
}
