// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the catalog comes from.
//!
//! The engine only needs three things: products, services and search
//! settings. [`CatalogProvider`] is that seam. [`StaticCatalog`] holds them
//! in memory; [`load_dir`] and [`load_language`] read them from the site's
//! per-language JSON layout:
//!
//! ```text
//! <root>/
//!   eng/
//!     products.json   {"products": [...]}
//!     data.json       {"services": [...], ...}
//!     search.json     {"searchConfig": {...}, "searchAliases": {...}, "quickRedirects": {...}}
//!   hin/
//!     ...
//! ```
//!
//! `search.json` is optional; a missing file means default settings. A
//! language without a directory falls back to [`DEFAULT_LANGUAGE`].
//!
//! [`CatalogStore`] keeps the current snapshot and swaps it atomically on a
//! language switch. Readers holding the old `Arc` finish on the old data.

use crate::config::SearchSettings;
use crate::error::{CatalogError, Result};
use crate::search::engine::CatalogSearcher;
use crate::types::{Product, Service};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Language used when the requested one has no catalog.
pub const DEFAULT_LANGUAGE: &str = "eng";

pub const PRODUCTS_FILE: &str = "products.json";
pub const SERVICES_FILE: &str = "data.json";
pub const SETTINGS_FILE: &str = "search.json";

/// Read-only access to the records and settings a searcher is built from.
pub trait CatalogProvider {
    fn products(&self) -> &[Product];
    fn services(&self) -> &[Service];
    fn settings(&self) -> &SearchSettings;
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    products: Vec<Product>,
    services: Vec<Service>,
    settings: SearchSettings,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>, services: Vec<Service>, settings: SearchSettings) -> Self {
        Self {
            products,
            services,
            settings,
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn services(&self) -> &[Service] {
        &self.services
    }

    fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

#[derive(Deserialize)]
struct ProductsFile {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct ServicesFile {
    #[serde(default)]
    services: Vec<Service>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load one language directory.
pub fn load_dir(dir: &Path) -> Result<StaticCatalog> {
    let products: ProductsFile = read_json(&dir.join(PRODUCTS_FILE))?;
    let services: ServicesFile = read_json(&dir.join(SERVICES_FILE))?;

    let settings_path = dir.join(SETTINGS_FILE);
    let settings = match read_json::<SearchSettings>(&settings_path) {
        Ok(settings) => settings,
        Err(CatalogError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %settings_path.display(), "no search settings, using defaults");
            SearchSettings::default()
        }
        Err(e) => return Err(e),
    };

    tracing::info!(
        dir = %dir.display(),
        products = products.products.len(),
        services = services.services.len(),
        "catalog loaded"
    );

    Ok(StaticCatalog::new(
        products.products,
        services.services,
        settings,
    ))
}

/// Resolve the directory for `language`, falling back to [`DEFAULT_LANGUAGE`].
///
/// Returns the directory and the language actually used.
pub fn resolve_language_dir(root: &Path, language: &str) -> Result<(PathBuf, String)> {
    let dir = root.join(language);
    if dir.is_dir() {
        return Ok((dir, language.to_string()));
    }

    let fallback = root.join(DEFAULT_LANGUAGE);
    if language != DEFAULT_LANGUAGE && fallback.is_dir() {
        tracing::warn!(
            requested = language,
            fallback = DEFAULT_LANGUAGE,
            "no catalog for language, falling back"
        );
        return Ok((fallback, DEFAULT_LANGUAGE.to_string()));
    }

    Err(CatalogError::MissingLanguage(language.to_string()))
}

/// Load the catalog for `language` under `root`.
pub fn load_language(root: &Path, language: &str) -> Result<StaticCatalog> {
    let (dir, _) = resolve_language_dir(root, language)?;
    load_dir(&dir)
}

/// The live catalog for a data root, switchable by language.
///
/// The language name and its searcher live under one lock, so a reader
/// never sees a searcher paired with another language's name.
#[derive(Debug)]
pub struct CatalogStore {
    root: PathBuf,
    active: RwLock<(String, Arc<CatalogSearcher>)>,
}

impl CatalogStore {
    /// Load `language` (or the fallback) and build its searcher.
    pub fn open(root: impl Into<PathBuf>, language: &str) -> Result<Self> {
        let root = root.into();
        let (searcher, resolved) = Self::build(&root, language)?;
        Ok(Self {
            root,
            active: RwLock::new((resolved, Arc::new(searcher))),
        })
    }

    /// The current snapshot. Cheap; hold it for as long as a search needs.
    pub fn current(&self) -> Arc<CatalogSearcher> {
        Arc::clone(&self.active.read().1)
    }

    /// The language actually loaded, after fallback.
    pub fn language(&self) -> String {
        self.active.read().0.clone()
    }

    /// Language and searcher read together.
    pub fn snapshot(&self) -> (String, Arc<CatalogSearcher>) {
        let active = self.active.read();
        (active.0.clone(), Arc::clone(&active.1))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rebuild for another language and swap it in.
    ///
    /// On error the current snapshot stays in place.
    pub fn switch_language(&self, language: &str) -> Result<()> {
        let (searcher, resolved) = Self::build(&self.root, language)?;
        tracing::info!(language = %resolved, "catalog language switched");
        *self.active.write() = (resolved, Arc::new(searcher));
        Ok(())
    }

    fn build(root: &Path, language: &str) -> Result<(CatalogSearcher, String)> {
        let (dir, resolved) = resolve_language_dir(root, language)?;
        let catalog = load_dir(&dir)?;
        Ok((CatalogSearcher::from_provider(&catalog)?, resolved))
    }
}
