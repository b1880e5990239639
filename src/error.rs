// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading a catalog and its search settings.
//!
//! Searching itself never fails: a short query or an empty catalog yields an
//! empty result. Everything that can go wrong happens at the load boundary.

use crate::types::ItemKind;
use std::path::PathBuf;

/// Errors from reading, parsing or validating catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A catalog file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid JSON of the expected shape.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A search setting is out of range.
    #[error("config error: {0}")]
    Config(String),

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: ItemKind, id: String },

    /// Neither the requested language nor the fallback has a catalog.
    #[error("no catalog for language '{0}'")]
    MissingLanguage(String),
}

/// Convenience type alias for catalog loading results.
pub type Result<T> = std::result::Result<T, CatalogError>;
