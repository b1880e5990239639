//! End-to-end queries against small hand-built catalogs.

use crate::common::{ids, make_product};
use spicerack::{CatalogSearcher, RawAlias, SearchSettings, Searcher};

fn searcher(settings: &SearchSettings) -> CatalogSearcher {
    CatalogSearcher::new(
        vec![
            make_product("turmeric", "Turmeric Powder", "Ground Spices"),
            make_product("chilli", "Chilli Powder", "Ground Spices"),
            make_product("cumin", "Cumin", "Whole Spices"),
        ],
        vec![],
        settings,
    )
    .unwrap()
}

#[test]
fn test_word_match_is_not_exact() {
    let results = searcher(&SearchSettings::default()).search("turmeric");
    assert_eq!(results[0].id, "turmeric");
    // word (2.0) + partial (1.0) + description word and partial (0.3)
    assert!((results[0].relevance_score - 3.3).abs() < 1e-9);
}

#[test]
fn test_misspelling_still_found() {
    let searcher = CatalogSearcher::new(
        vec![make_product("turmeric", "Turmeric", "Ground Spices")],
        vec![],
        &SearchSettings::default(),
    )
    .unwrap();

    let results = searcher.search("tumeric");
    assert_eq!(ids(&results), vec!["turmeric"]);
    // Fuzzy alone: 0.875 * 3.0
    assert!((results[0].relevance_score - 2.625).abs() < 1e-9);
}

#[test]
fn test_single_character_query() {
    let searcher = searcher(&SearchSettings::default());
    assert!(searcher.search("a").is_empty());
    assert!(searcher.search("c").is_empty());
}

#[test]
fn test_hot_alias_finds_chilli() {
    let mut settings = SearchSettings::default();
    settings.search_aliases.insert(
        "hot".to_string(),
        RawAlias::Bound {
            terms: vec!["spicy".to_string(), "chilli".to_string()],
            product_id: Some("chilli".to_string()),
            service_id: None,
        },
    );

    let results = searcher(&settings).search("hot");
    assert_eq!(ids(&results), vec!["chilli"]);
    // binding 8.0, "chilli" word 2.0 and partial 1.0, description word 0.2 and partial 0.1
    assert!((results[0].relevance_score - 11.3).abs() < 1e-9);
}

#[test]
fn test_exact_name_wins() {
    let results = searcher(&SearchSettings::default()).search("Cumin");
    assert_eq!(results[0].id, "cumin");
    assert!(results[0].relevance_score >= 10.0);
}

#[test]
fn test_category_word_reaches_whole_category() {
    let results = searcher(&SearchSettings::default()).search("ground");
    let mut found = ids(&results);
    found.sort_unstable();
    assert_eq!(found, vec!["chilli", "turmeric"]);
    for result in &results {
        // category word (0.5) + category partial (0.3)
        assert!((result.relevance_score - 0.8).abs() < 1e-9);
    }
}
