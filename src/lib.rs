//! Fuzzy search over a small product and service catalog.
//!
//! A spice trader's site has a few dozen products and a handful of services.
//! Visitors type "tumeric", "haldi" or "hot" and expect turmeric, turmeric
//! and chilli. This crate ranks the catalog against such queries with a
//! small additive scoring model: exact names, curated aliases, Levenshtein
//! similarity, and word or substring hits in name, category and description.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  catalog.rs  │────▶│ search/engine.rs │────▶│ scoring/         │
//! │ (JSON load,  │     │ (CatalogSearcher,│     │ (ScoreCard,      │
//! │  fallback)   │     │  Searcher)       │     │  rank)           │
//! └──────────────┘     └──────────────────┘     └──────────────────┘
//!        │                │          │                   │
//!        ▼                ▼          ▼                   ▼
//! ┌──────────────┐ ┌────────────┐ ┌────────────┐ ┌──────────────────┐
//! │  config.rs   │ │ alias.rs   │ │ fuzzy/     │ │  contracts.rs    │
//! │ (search.json)│ │ redirect.rs│ │(Levenshtein│ │ (ranked results) │
//! └──────────────┘ └────────────┘ └────────────┘ └──────────────────┘
//!                         │
//!                         ▼
//!        ┌─────────────────────────────────────┐
//!        │ search/session.rs, cache.rs         │
//!        │ (navigation, searching flag, memo)  │
//!        └─────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use spicerack::testing::sample_searcher;
//! use spicerack::Searcher;
//!
//! let searcher = sample_searcher();
//! let results = searcher.search("tumeric");
//! assert_eq!(results[0].id, "turmeric");
//! assert_eq!(results[0].target, "/products/turmeric");
//! ```
//!
//! Loading from disk:
//!
//! ```ignore
//! let store = spicerack::CatalogStore::open("data", "eng")?;
//! let results = store.current().search("hot");
//! ```

pub mod catalog;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

pub mod testing;

// Re-exports for public API
pub use catalog::{
    load_dir, load_language, CatalogProvider, CatalogStore, StaticCatalog, DEFAULT_LANGUAGE,
};
pub use config::{RawAlias, SearchConfig, SearchConfigOverride, SearchSettings};
pub use error::{CatalogError, Result};
pub use fuzzy::{levenshtein_distance, similarity};
pub use search::alias::{AliasBinding, AliasEntry, AliasTable};
pub use search::cache::{CacheStats, CachedSearcher, DEFAULT_CACHE_CAPACITY};
pub use search::cursor::SelectionCursor;
pub use search::engine::{CatalogSearcher, Searcher};
pub use search::redirect::QuickRedirects;
pub use search::session::{Navigator, RecordingNavigator, SearchOutcome, SearchSession};
pub use types::{CatalogItem, ItemKind, Product, SearchResult, Service};
pub use util::normalize::normalize;
