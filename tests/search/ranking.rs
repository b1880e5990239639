//! Ordering and truncation of results.

use crate::common::{assert_ranked, ids, make_product, make_service, sample_searcher};
use spicerack::{CatalogSearcher, ItemKind, SearchConfigOverride, SearchSettings, Searcher};

#[test]
fn test_results_sorted_descending() {
    let searcher = sample_searcher();
    for query in ["seeds", "powder", "spices", "pepper", "hot", "cumin", "ship"] {
        assert_ranked(&searcher.search(query));
    }
}

#[test]
fn test_truncated_to_max_results() {
    let searcher = sample_searcher();
    // Every sample product sits in a "... Spices" or "Spice Blends" category
    let results = searcher.search("spice");
    assert_eq!(results.len(), 8);

    let overrides = SearchConfigOverride {
        max_results: Some(3),
        ..Default::default()
    };
    let top3 = searcher.search_with("spice", &overrides);
    assert_eq!(top3.len(), 3);
    assert_eq!(top3[..], results[..3]);
}

#[test]
fn test_ties_keep_catalog_order() {
    let searcher = CatalogSearcher::new(
        vec![
            make_product("b", "Fennel", "Whole Spices"),
            make_product("a", "Ajwain", "Whole Spices"),
            make_product("c", "Nigella", "Whole Spices"),
        ],
        vec![],
        &SearchSettings::default(),
    )
    .unwrap();

    // Only the category matches, so all three tie
    let results = searcher.search("whole");
    assert_eq!(ids(&results), vec!["b", "a", "c"]);
}

#[test]
fn test_products_precede_services_on_equal_score() {
    let mut product = make_product("packs", "Packs", "Retail");
    product.description = "custom packaging".to_string();
    let mut service = make_service("packs", "Packs");
    service.description = "custom packaging".to_string();

    let searcher =
        CatalogSearcher::new(vec![product], vec![service], &SearchSettings::default()).unwrap();
    let results = searcher.search("packs");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].relevance_score, results[1].relevance_score);
    assert_eq!(results[0].kind, ItemKind::Product);
    assert_eq!(results[1].kind, ItemKind::Service);
}

#[test]
fn test_service_description_weighs_more() {
    let mut product = make_product("packs", "Packs", "Retail");
    product.description = "custom packaging".to_string();
    let mut service = make_service("packing", "Packing");
    service.description = "custom packaging".to_string();

    let searcher =
        CatalogSearcher::new(vec![product], vec![service], &SearchSettings::default()).unwrap();
    let results = searcher.search("custom");
    assert_eq!(results[0].kind, ItemKind::Service);
    assert!((results[0].relevance_score - 0.45).abs() < 1e-9);
    assert!((results[1].relevance_score - 0.3).abs() < 1e-9);
}

#[test]
fn test_exact_name_beats_partial_matches() {
    let searcher = CatalogSearcher::new(
        vec![
            make_product("pepper-mix", "Pepper Mix", "Pepper Blends"),
            make_product("pepper", "Pepper", "Whole Spices"),
        ],
        vec![],
        &SearchSettings::default(),
    )
    .unwrap();
    assert_eq!(searcher.search("pepper")[0].id, "pepper");
}
