// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning and the `search.json` document that carries it.
//!
//! [`SearchConfig`] holds the tuning parameters. It is loaded once with the
//! catalog and may be overridden per call by a [`SearchConfigOverride`],
//! whose set fields are merged on top of the loaded values.
//!
//! [`SearchSettings`] mirrors `search.json` as it sits on disk, including
//! both alias shapes the file has used over time. Resolving those shapes
//! into one internal form happens in `search::alias`, once, at load.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tuning parameters for a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Normalized queries shorter than this (in characters) return nothing.
    pub min_query_length: usize,
    /// Results beyond this many are dropped after ranking.
    pub max_results: usize,
    /// Minimum normalized Levenshtein similarity for a fuzzy name match.
    pub fuzzy_threshold: f64,
    /// Carried for compatibility with existing `search.json` files.
    pub exact_match_bonus: f64,
    /// Carried for compatibility with existing `search.json` files.
    pub category_match_bonus: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_length: 2,
            max_results: 8,
            fuzzy_threshold: 0.7,
            exact_match_bonus: 10.0,
            category_match_bonus: 0.5,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `fuzzy_threshold` must lie in `[0.0, 1.0]`
    /// - bonuses must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(CatalogError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(CatalogError::Config(format!(
                "fuzzy_threshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        for (name, value) in [
            ("exact_match_bonus", self.exact_match_bonus),
            ("category_match_bonus", self.category_match_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// This config with every field the override sets replaced.
    pub fn merged(&self, overrides: &SearchConfigOverride) -> SearchConfig {
        SearchConfig {
            min_query_length: overrides.min_query_length.unwrap_or(self.min_query_length),
            max_results: overrides.max_results.unwrap_or(self.max_results),
            fuzzy_threshold: overrides.fuzzy_threshold.unwrap_or(self.fuzzy_threshold),
            exact_match_bonus: overrides.exact_match_bonus.unwrap_or(self.exact_match_bonus),
            category_match_bonus: overrides
                .category_match_bonus
                .unwrap_or(self.category_match_bonus),
        }
    }
}

/// Partial [`SearchConfig`]: `None` keeps the loaded value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfigOverride {
    pub min_query_length: Option<usize>,
    pub max_results: Option<usize>,
    pub fuzzy_threshold: Option<f64>,
    pub exact_match_bonus: Option<f64>,
    pub category_match_bonus: Option<f64>,
}

impl SearchConfigOverride {
    /// True when no field is set, i.e. merging changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == SearchConfigOverride::default()
    }
}

/// An alias value as written in `search.json`.
///
/// Two shapes are accepted: the object form with optional item binding, and
/// the older bare array of terms. Anything else lands in `Malformed` and is
/// skipped when the alias table is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAlias {
    /// `{"terms": [...], "productId": "...", "serviceId": "..."}`
    Bound {
        terms: Vec<String>,
        #[serde(default, rename = "productId", skip_serializing_if = "Option::is_none")]
        product_id: Option<String>,
        #[serde(default, rename = "serviceId", skip_serializing_if = "Option::is_none")]
        service_id: Option<String>,
    },
    /// `["term", "term"]`
    Terms(Vec<String>),
    /// Any other JSON value.
    Malformed(serde_json::Value),
}

/// The `search.json` document: tuning, aliases and quick redirects.
///
/// Every part is optional. A missing section behaves as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSettings {
    pub search_config: SearchConfig,
    pub search_aliases: BTreeMap<String, RawAlias>,
    pub quick_redirects: BTreeMap<String, String>,
}
