// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the search engine reads and the results it produces.
//!
//! Catalog records arrive as JSON and are typed once at the load boundary.
//! After that, products and services flow through the engine as
//! [`CatalogItem`], a sum type, so scoring never has to guess whether a
//! record has a `name` or a `title`, or whether `category` exists.
//!
//! # Invariants
//!
//! - **Product/Service ids** are unique within their kind (checked at load).
//! - **SearchResult.relevance_score** is finite and `> 0.0` for every
//!   result the engine emits.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which source collection an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Product,
    Service,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Product => f.write_str("product"),
            ItemKind::Service => f.write_str("service"),
        }
    }
}

/// A product record from `products.json`.
///
/// Only `name`, `category` and `description` are scored. The rest is carried
/// so the presentation layer can render detail pages from the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
}

/// A service record from `data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A product or a service, viewed through the fields search cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    Product(Product),
    Service(Service),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Product(_) => ItemKind::Product,
            CatalogItem::Service(_) => ItemKind::Service,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Product(p) => &p.id,
            CatalogItem::Service(s) => &s.id,
        }
    }

    /// Product name or service title: the primary matchable field.
    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Product(p) => &p.name,
            CatalogItem::Service(s) => &s.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CatalogItem::Product(p) => &p.description,
            CatalogItem::Service(s) => &s.description,
        }
    }

    /// Products only. Services have no category.
    pub fn category(&self) -> Option<&str> {
        match self {
            CatalogItem::Product(p) => Some(&p.category),
            CatalogItem::Service(_) => None,
        }
    }

    /// Navigation path for this item.
    ///
    /// Products get a detail page. Services share one listing page.
    pub fn target(&self) -> String {
        match self {
            CatalogItem::Product(p) => format!("/products/{}", p.id),
            CatalogItem::Service(_) => "/services".to_string(),
        }
    }
}

impl From<Product> for CatalogItem {
    fn from(product: Product) -> Self {
        CatalogItem::Product(product)
    }
}

impl From<Service> for CatalogItem {
    fn from(service: Service) -> Self {
        CatalogItem::Service(service)
    }
}

/// One ranked hit.
///
/// Serialized with `type` for the kind, matching the shape the site's
/// dropdown consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub target: String,
    pub relevance_score: f64,
}

impl SearchResult {
    /// Build a result for a catalog item with the given score.
    pub fn from_item(item: &CatalogItem, relevance_score: f64) -> Self {
        Self {
            kind: item.kind(),
            id: item.id().to_string(),
            name: item.name().to_string(),
            description: item.description().to_string(),
            category: item.category().map(str::to_string),
            target: item.target(),
            relevance_score,
        }
    }
}
