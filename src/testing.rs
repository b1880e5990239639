// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test searches the same catalog.

#![doc(hidden)]

use crate::catalog::StaticCatalog;
use crate::config::{RawAlias, SearchSettings};
use crate::search::engine::CatalogSearcher;
use crate::types::{Product, Service};
use std::collections::BTreeMap;

/// Create a product with a generated description.
pub fn make_product(id: &str, name: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("Description of {}", name),
        origin: None,
        image: None,
        specifications: BTreeMap::new(),
    }
}

/// Create a service with a generated description.
pub fn make_service(id: &str, title: &str) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Description of {}", title),
        icon: None,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        make_product("turmeric", "Turmeric", "Ground Spices"),
        make_product("cumin", "Cumin Seeds", "Whole Spices"),
        make_product("chilli", "Kashmiri Chilli Powder", "Ground Spices"),
        make_product("cardamom", "Green Cardamom", "Whole Spices"),
        make_product("cinnamon", "Ceylon Cinnamon", "Whole Spices"),
        make_product("garam-masala", "Garam Masala", "Spice Blends"),
        make_product("black-pepper", "Black Pepper", "Whole Spices"),
        make_product("coriander-powder", "Coriander Powder", "Ground Spices"),
        make_product("fenugreek-seeds", "Fenugreek Seeds", "Whole Spices"),
        make_product("mustard-seeds", "Mustard Seeds", "Whole Spices"),
        make_product("cloves", "Cloves", "Whole Spices"),
        make_product("star-anise", "Star Anise", "Whole Spices"),
        make_product("curry-powder", "Curry Powder", "Spice Blends"),
        make_product("mace", "Mace", "Whole Spices"),
    ]
}

pub fn sample_services() -> Vec<Service> {
    vec![
        make_service("logistics", "Global Logistics"),
        make_service("private-label", "Private Label Packaging"),
        make_service("quality", "Quality Testing"),
    ]
}

/// Aliases in both shapes, plus a handful of quick redirects.
pub fn sample_settings() -> SearchSettings {
    let mut settings = SearchSettings::default();

    settings.search_aliases.insert(
        "hot".to_string(),
        RawAlias::Bound {
            terms: vec!["spicy".to_string(), "chilli".to_string()],
            product_id: Some("chilli".to_string()),
            service_id: None,
        },
    );
    settings.search_aliases.insert(
        "jeera".to_string(),
        RawAlias::Bound {
            terms: vec!["cumin".to_string()],
            product_id: Some("cumin".to_string()),
            service_id: None,
        },
    );
    settings.search_aliases.insert(
        "ship".to_string(),
        RawAlias::Bound {
            terms: vec!["shipping".to_string(), "freight".to_string()],
            product_id: None,
            service_id: Some("logistics".to_string()),
        },
    );
    settings.search_aliases.insert(
        "haldi".to_string(),
        RawAlias::Terms(vec!["turmeric".to_string()]),
    );

    for (query, target) in [
        ("contact", "/contact"),
        ("about", "/about"),
        ("about us", "/about"),
        ("faq", "/faq"),
    ] {
        settings
            .quick_redirects
            .insert(query.to_string(), target.to_string());
    }

    settings
}

pub fn sample_catalog() -> StaticCatalog {
    StaticCatalog::new(sample_products(), sample_services(), sample_settings())
}

/// A searcher over [`sample_catalog`].
pub fn sample_searcher() -> CatalogSearcher {
    CatalogSearcher::from_provider(&sample_catalog()).expect("sample catalog is valid")
}
