//! Edge cases: punctuation, whitespace, diacritics, redirects, empty data.

use crate::common::{ids, make_product, make_service, sample_searcher};
use spicerack::search::redirect::REDIRECT_ID;
use spicerack::{CatalogSearcher, ItemKind, SearchSettings, Searcher};

#[test]
fn test_punctuation_only_query() {
    let searcher = sample_searcher();
    assert!(searcher.search("!!!").is_empty());
    assert!(searcher.search("   ").is_empty());
    assert!(searcher.search("").is_empty());
}

#[test]
fn test_length_counts_normalized_characters() {
    let searcher = sample_searcher();
    // Four raw characters, one after normalization
    assert!(searcher.search("(c)!").is_empty());
}

#[test]
fn test_query_normalization_is_transparent() {
    let searcher = sample_searcher();
    assert_eq!(searcher.search("  BLACK   pepper?? "), searcher.search("black pepper"));
}

#[test]
fn test_redirect_result_shape() {
    let results = sample_searcher().search("About Us");
    assert_eq!(results.len(), 1);
    let redirect = &results[0];
    assert_eq!(redirect.kind, ItemKind::Service);
    assert_eq!(redirect.id, REDIRECT_ID);
    assert_eq!(redirect.name, "Go to about us");
    assert_eq!(redirect.description, "Redirect to about us page");
    assert_eq!(redirect.target, "/about");
    assert_eq!(redirect.relevance_score, 1.0);
}

#[test]
fn test_redirect_needs_whole_query() {
    let results = sample_searcher().search("contact sales");
    assert!(results.iter().all(|r| r.id != REDIRECT_ID));
}

#[test]
fn test_no_match_returns_empty() {
    assert!(sample_searcher().search("zzzzzz").is_empty());
}

#[test]
#[cfg(feature = "unicode-normalization")]
fn test_diacritics_fold() {
    let searcher = CatalogSearcher::new(
        vec![make_product("jeera", "Jīrā", "Whole Spices")],
        vec![],
        &SearchSettings::default(),
    )
    .unwrap();
    assert_eq!(ids(&searcher.search("jira")), vec!["jeera"]);
}

#[test]
fn test_empty_description_matches_nothing() {
    let mut product = make_product("mace", "Mace", "Whole Spices");
    product.description.clear();
    let mut service = make_service("audit", "Audit");
    service.description.clear();

    let searcher =
        CatalogSearcher::new(vec![product], vec![service], &SearchSettings::default()).unwrap();
    assert!(searcher.search("turmeric").is_empty());
}

#[test]
fn test_unicode_names_are_searchable() {
    let searcher = CatalogSearcher::new(
        vec![make_product("haldi", "हल्दी", "मसाले")],
        vec![],
        &SearchSettings::default(),
    )
    .unwrap();
    assert_eq!(searcher.search("हल्दी")[0].id, "haldi");
}

#[test]
fn test_serialized_result_shape() {
    let results = sample_searcher().search("cloves");
    let value = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(value["type"], "product");
    assert_eq!(value["id"], "cloves");
    assert_eq!(value["target"], "/products/cloves");
    assert!(value["relevanceScore"].as_f64().unwrap() > 0.0);
    assert_eq!(value["category"], "Whole Spices");
}
