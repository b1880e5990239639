// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind relevance.
//!
//! A relevance score is a plain sum: every (term, signal) pair that fires on
//! an item adds its points. Nothing is normalized, nothing is a probability.
//! The constants are ordered so that an exact name match outweighs every
//! partial-only signal combined for the same term.
//!
//! # Constants
//!
//! | Signal                      | Points            |
//! |-----------------------------|-------------------|
//! | Exact name/title            | 10.0              |
//! | Alias bound to this item    | 8.0               |
//! | Fuzzy name similarity       | similarity × 3.0  |
//! | Word match in name          | 2.0               |
//! | Partial match in name       | 1.0               |
//! | Word match in category      | 0.5 (products)    |
//! | Partial match in category   | 0.3 (products)    |
//! | Word match in description   | 0.2 product / 0.3 service  |
//! | Partial match in description| 0.1 product / 0.15 service |
//!
//! Description weights differ by kind. Services have no
//! category, so their description carries a little more.

use crate::types::ItemKind;
use std::fmt;

/// Exact name/title match.
pub const EXACT_NAME_SCORE: f64 = 10.0;

/// Term is an alias key bound to this item's id.
pub const ALIAS_BINDING_SCORE: f64 = 8.0;

/// Fuzzy name matches add `similarity * FUZZY_NAME_WEIGHT`.
pub const FUZZY_NAME_WEIGHT: f64 = 3.0;

/// Some word of the term contains, or is contained in, some word of the name.
pub const NAME_WORD_SCORE: f64 = 2.0;

/// The term contains, or is contained in, the whole name.
pub const NAME_PARTIAL_SCORE: f64 = 1.0;

pub const CATEGORY_WORD_SCORE: f64 = 0.5;
pub const CATEGORY_PARTIAL_SCORE: f64 = 0.3;

pub const PRODUCT_DESCRIPTION_WORD_SCORE: f64 = 0.2;
pub const PRODUCT_DESCRIPTION_PARTIAL_SCORE: f64 = 0.1;

pub const SERVICE_DESCRIPTION_WORD_SCORE: f64 = 0.3;
pub const SERVICE_DESCRIPTION_PARTIAL_SCORE: f64 = 0.15;

/// Score of the single synthetic result a quick redirect produces.
pub const REDIRECT_SCORE: f64 = 1.0;

/// One reason an item matched a term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    ExactName,
    AliasBinding,
    /// Carries the similarity that cleared the threshold.
    FuzzyName(f64),
    NameWord,
    NamePartial,
    CategoryWord,
    CategoryPartial,
    DescriptionWord,
    DescriptionPartial,
}

impl Signal {
    /// Points this signal contributes to an item of the given kind.
    pub fn points(self, kind: ItemKind) -> f64 {
        match (self, kind) {
            (Signal::ExactName, _) => EXACT_NAME_SCORE,
            (Signal::AliasBinding, _) => ALIAS_BINDING_SCORE,
            (Signal::FuzzyName(similarity), _) => similarity * FUZZY_NAME_WEIGHT,
            (Signal::NameWord, _) => NAME_WORD_SCORE,
            (Signal::NamePartial, _) => NAME_PARTIAL_SCORE,
            (Signal::CategoryWord, _) => CATEGORY_WORD_SCORE,
            (Signal::CategoryPartial, _) => CATEGORY_PARTIAL_SCORE,
            (Signal::DescriptionWord, ItemKind::Product) => PRODUCT_DESCRIPTION_WORD_SCORE,
            (Signal::DescriptionWord, ItemKind::Service) => SERVICE_DESCRIPTION_WORD_SCORE,
            (Signal::DescriptionPartial, ItemKind::Product) => PRODUCT_DESCRIPTION_PARTIAL_SCORE,
            (Signal::DescriptionPartial, ItemKind::Service) => SERVICE_DESCRIPTION_PARTIAL_SCORE,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::ExactName => f.write_str("exact name"),
            Signal::AliasBinding => f.write_str("alias binding"),
            Signal::FuzzyName(similarity) => write!(f, "fuzzy name ({:.3})", similarity),
            Signal::NameWord => f.write_str("name word"),
            Signal::NamePartial => f.write_str("name partial"),
            Signal::CategoryWord => f.write_str("category word"),
            Signal::CategoryPartial => f.write_str("category partial"),
            Signal::DescriptionWord => f.write_str("description word"),
            Signal::DescriptionPartial => f.write_str("description partial"),
        }
    }
}

/// A signal that fired, with the term that fired it and its points.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalHit {
    pub term: String,
    pub signal: Signal,
    pub points: f64,
}

/// Running total for one item across all expanded terms.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    kind: ItemKind,
    total: f64,
    hits: Vec<SignalHit>,
}

impl ScoreCard {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            total: 0.0,
            hits: Vec::new(),
        }
    }

    /// Record a fired signal and add its points.
    pub fn add(&mut self, term: &str, signal: Signal) {
        let points = signal.points(self.kind);
        self.total += points;
        self.hits.push(SignalHit {
            term: term.to_string(),
            signal,
            points,
        });
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn hits(&self) -> &[SignalHit] {
        &self.hits
    }

    pub fn into_hits(self) -> Vec<SignalHit> {
        self.hits
    }

    /// An item is a match iff at least one signal fired and the sum is positive.
    pub fn is_match(&self) -> bool {
        !self.hits.is_empty() && self.total > 0.0
    }
}
