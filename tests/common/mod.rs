//! Shared test utilities and fixtures.

#![allow(dead_code)]

use spicerack::{CatalogSearcher, CatalogStore, SearchResult};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Re-export canonical test utilities from spicerack::testing
pub use spicerack::testing::{make_product, make_service, sample_searcher, sample_settings};

// ============================================================================
// BUNDLED CATALOG
// ============================================================================

/// The catalog shipped in `data/`.
pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Bundled English catalog, loaded once per test binary.
static BUNDLED: LazyLock<CatalogSearcher> = LazyLock::new(|| {
    let store = CatalogStore::open(DATA_DIR, "eng").expect("bundled catalog loads");
    (*store.current()).clone()
});

pub fn bundled_searcher() -> &'static CatalogSearcher {
    &BUNDLED
}

// ============================================================================
// HELPERS
// ============================================================================

/// Result ids in rank order.
pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

/// Scores are non-increasing.
pub fn assert_ranked(results: &[SearchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].relevance_score >= pair[1].relevance_score,
            "{} ({}) ranked above {} ({})",
            pair[0].id,
            pair[0].relevance_score,
            pair[1].id,
            pair[1].relevance_score
        );
    }
}

/// Write a minimal language directory: products, services, optional settings.
pub fn write_language(root: &Path, lang: &str, products: &str, services: &str, settings: Option<&str>) {
    let dir = root.join(lang);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("products.json"), products).unwrap();
    fs::write(dir.join("data.json"), services).unwrap();
    if let Some(settings) = settings {
        fs::write(dir.join("search.json"), settings).unwrap();
    }
}
