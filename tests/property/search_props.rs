//! Ranking invariants over random queries and random catalogs.

use crate::common::{make_product, make_service, sample_searcher};
use proptest::prelude::*;
use spicerack::search::redirect::REDIRECT_ID;
use spicerack::{
    normalize, CachedSearcher, CatalogSearcher, SearchConfigOverride, SearchSettings, Searcher,
};

fn query() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,14}").unwrap()
}

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,9}").unwrap()
}

/// A catalog of random one- and two-word names.
fn catalog() -> impl Strategy<Value = CatalogSearcher> {
    (
        prop::collection::vec((word(), prop::option::of(word()), word()), 0..12),
        prop::collection::vec((word(), word()), 0..4),
    )
        .prop_map(|(products, services)| {
            let products = products
                .into_iter()
                .enumerate()
                .map(|(i, (first, second, category))| {
                    let name = match second {
                        Some(second) => format!("{} {}", first, second),
                        None => first,
                    };
                    make_product(&format!("p{}", i), &name, &category)
                })
                .collect();
            let services = services
                .into_iter()
                .enumerate()
                .map(|(i, (first, second))| {
                    make_service(&format!("s{}", i), &format!("{} {}", first, second))
                })
                .collect();
            CatalogSearcher::new(products, services, &SearchSettings::default()).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sorted_truncated_positive(searcher in catalog(), q in query()) {
        let results = searcher.search(&q);
        prop_assert!(results.len() <= searcher.config().max_results);
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
        for result in &results {
            prop_assert!(result.relevance_score.is_finite());
            prop_assert!(result.relevance_score > 0.0);
        }
    }

    #[test]
    fn prop_deterministic(searcher in catalog(), q in query()) {
        prop_assert_eq!(searcher.search(&q), searcher.search(&q));
    }

    #[test]
    fn prop_short_queries_empty(searcher in catalog(), q in "[a-z]?") {
        prop_assert!(searcher.search(&q).is_empty());
    }

    /// An item whose name is exactly the query always outranks an item that
    /// only shares a word with it.
    #[test]
    fn prop_exact_name_ranks_first(name in word(), other in word()) {
        prop_assume!(name != other);
        let searcher = CatalogSearcher::new(
            vec![
                make_product("loose", &format!("{} {}", other, name), "misc"),
                make_product("exact", &name, "misc"),
            ],
            vec![],
            &SearchSettings::default(),
        )
        .unwrap();
        let results = searcher.search(&name);
        prop_assert_eq!(results[0].id.as_str(), "exact");
    }

    #[test]
    fn prop_limit_override_is_prefix(searcher in catalog(), q in query(), limit in 1usize..8) {
        let full = searcher.search(&q);
        let overrides = SearchConfigOverride { max_results: Some(limit), ..Default::default() };
        let limited = searcher.search_with(&q, &overrides);
        prop_assert_eq!(&limited[..], &full[..full.len().min(limit)]);
    }

    /// A higher fuzzy threshold can only drop matches, never add them.
    #[test]
    fn prop_threshold_monotone(searcher in catalog(), q in query()) {
        let loose = SearchConfigOverride { fuzzy_threshold: Some(0.5), max_results: Some(64), ..Default::default() };
        let strict = SearchConfigOverride { fuzzy_threshold: Some(0.9), max_results: Some(64), ..Default::default() };
        let loose_ids: Vec<String> = searcher.search_with(&q, &loose).into_iter().map(|r| r.id).collect();
        for result in searcher.search_with(&q, &strict) {
            prop_assert!(loose_ids.contains(&result.id));
        }
    }

    #[test]
    fn prop_normalization_invisible(q in "[a-zA-Z !?.]{0,14}") {
        let searcher = sample_searcher();
        prop_assert_eq!(searcher.search(&q), searcher.search(&normalize(&q)));
    }

    #[test]
    fn prop_arbitrary_input_is_ranked(q in any::<String>()) {
        let searcher = sample_searcher();
        let results = searcher.search(&q);
        prop_assert!(results.len() <= searcher.config().max_results);
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn prop_cached_matches_uncached(q in any::<String>()) {
        let plain = sample_searcher();
        let cached = CachedSearcher::new(plain.clone());
        let expected = plain.search(&q);
        prop_assert_eq!(cached.search(&q), expected.clone());
        prop_assert_eq!(cached.search(&q), expected);
    }

    #[test]
    fn prop_redirect_is_only_result(q in prop::sample::select(vec!["contact", "about", "about us", "faq"])) {
        let results = sample_searcher().search(&q.to_uppercase());
        prop_assert_eq!(results.len(), 1);
        prop_assert_eq!(results[0].id.as_str(), REDIRECT_ID);
        prop_assert_eq!(results[0].relevance_score, 1.0);
    }
}
