//! Loading catalogs from disk and switching languages.

use crate::common::{write_language, DATA_DIR};
use spicerack::{load_language, CatalogError, CatalogStore, Searcher, DEFAULT_LANGUAGE};
use tempfile::TempDir;

const PRODUCTS: &str = r#"{"products": [
    {"id": "turmeric", "name": "Turmeric", "category": "Ground Spices", "description": "Yellow root"}
]}"#;

const HINDI_PRODUCTS: &str = r#"{"products": [
    {"id": "turmeric", "name": "हल्दी", "category": "पिसे मसाले", "description": "पीली जड़"}
]}"#;

const SERVICES: &str = r#"{"services": [
    {"id": "logistics", "title": "Global Logistics", "description": "Shipping worldwide", "icon": "truck"}
]}"#;

#[test]
fn test_unknown_language_falls_back() {
    let store = CatalogStore::open(DATA_DIR, "tel").unwrap();
    assert_eq!(store.language(), DEFAULT_LANGUAGE);
    assert_eq!(store.current().product_count(), 14);
}

#[test]
fn test_switch_and_fall_back() {
    let tmp = TempDir::new().unwrap();
    write_language(tmp.path(), "eng", PRODUCTS, SERVICES, None);
    write_language(tmp.path(), "hin", HINDI_PRODUCTS, SERVICES, None);

    let store = CatalogStore::open(tmp.path(), "hin").unwrap();
    assert_eq!(store.current().search("हल्दी")[0].id, "turmeric");

    store.switch_language("fra").unwrap();
    assert_eq!(store.language(), "eng");
    assert_eq!(store.current().search("turmeric")[0].name, "Turmeric");
}

#[test]
fn test_invalid_settings_rejected_at_load() {
    let tmp = TempDir::new().unwrap();
    write_language(
        tmp.path(),
        "eng",
        PRODUCTS,
        SERVICES,
        Some(r#"{"searchConfig": {"fuzzyThreshold": 1.5}}"#),
    );
    let err = CatalogStore::open(tmp.path(), "eng").unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn test_duplicate_ids_rejected_at_load() {
    let tmp = TempDir::new().unwrap();
    let services = r#"{"services": [
        {"id": "x", "title": "One", "description": "first"},
        {"id": "x", "title": "Two", "description": "second"}
    ]}"#;
    write_language(tmp.path(), "eng", PRODUCTS, services, None);
    let err = CatalogStore::open(tmp.path(), "eng").unwrap_err();
    assert_eq!(err.to_string(), "duplicate service id 'x'");
}

#[test]
fn test_error_names_the_file() {
    let tmp = TempDir::new().unwrap();
    write_language(tmp.path(), "eng", "[1, 2", SERVICES, None);
    let err = load_language(tmp.path(), "eng").unwrap_err();
    assert!(err.to_string().contains("products.json"), "{}", err);
}
