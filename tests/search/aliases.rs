//! Alias expansion through the public API, both `search.json` shapes.

use crate::common::{ids, make_product, make_service};
use spicerack::{CatalogSearcher, SearchSettings, Searcher};

fn settings(json: &str) -> SearchSettings {
    serde_json::from_str(json).unwrap()
}

fn searcher(settings: &SearchSettings) -> CatalogSearcher {
    CatalogSearcher::new(
        vec![
            make_product("turmeric", "Turmeric", "Ground Spices"),
            make_product("chilli", "Chilli Powder", "Ground Spices"),
            make_product("cardamom", "Green Cardamom", "Whole Spices"),
        ],
        vec![make_service("logistics", "Global Logistics")],
        settings,
    )
    .unwrap()
}

#[test]
fn test_array_shape_expands_without_bonus() {
    let searcher = searcher(&settings(r#"{"searchAliases": {"haldi": ["turmeric"]}}"#));
    assert_eq!(searcher.expanded_terms("haldi"), vec!["haldi", "turmeric"]);

    let results = searcher.search("haldi");
    assert_eq!(ids(&results), vec!["turmeric"]);
    // "turmeric" as an expanded term is an exact name hit, no binding bonus
    assert!(results[0].relevance_score >= 10.0);
    assert!(results[0].relevance_score < 18.0);
}

#[test]
fn test_object_shape_binds_service() {
    let searcher = searcher(&settings(
        r#"{"searchAliases": {"shipping": {"terms": ["freight"], "serviceId": "logistics"}}}"#,
    ));
    let results = searcher.search("shipping");
    assert_eq!(ids(&results), vec!["logistics"]);
    assert_eq!(results[0].target, "/services");
    assert!(results[0].relevance_score >= 8.0);
}

#[test]
fn test_synonym_reaches_alias_key() {
    // Typing a term of an alias pulls in the key, and through it the binding
    let searcher = searcher(&settings(
        r#"{"searchAliases": {"hot": {"terms": ["spicy", "chilli"], "productId": "chilli"}}}"#,
    ));
    let terms = searcher.expanded_terms("spicy");
    assert!(terms.contains(&"hot".to_string()));
    assert_eq!(searcher.search("spicy")[0].id, "chilli");
}

#[test]
fn test_partial_term_expands() {
    let searcher = searcher(&settings(
        r#"{"searchAliases": {"hot": {"terms": ["spicy", "chilli"], "productId": "chilli"}}}"#,
    ));
    let terms = searcher.expanded_terms("chil");
    assert_eq!(terms, vec!["chil", "hot", "spicy", "chilli"]);
}

#[test]
fn test_alias_keys_are_normalized() {
    let searcher = searcher(&settings(r#"{"searchAliases": {"  Elaichi! ": ["Cardamom"]}}"#));
    assert_eq!(searcher.search("ELAICHI")[0].id, "cardamom");
}

#[test]
fn test_malformed_alias_is_skipped() {
    let searcher = searcher(&settings(
        r#"{"searchAliases": {"broken": 42, "haldi": ["turmeric"]}}"#,
    ));
    assert_eq!(searcher.aliases().len(), 1);
    assert!(searcher.search("broken").is_empty());
    assert_eq!(searcher.search("haldi")[0].id, "turmeric");
}

#[test]
fn test_expansion_deduplicates() {
    let searcher = searcher(&settings(
        r#"{"searchAliases": {"a1": ["turmeric", "haldi"], "haldi": ["turmeric"]}}"#,
    ));
    let terms = searcher.expanded_terms("haldi");
    let mut unique = terms.clone();
    unique.dedup();
    assert_eq!(terms.len(), unique.len());
    assert_eq!(terms.iter().filter(|t| *t == "turmeric").count(), 1);
}
