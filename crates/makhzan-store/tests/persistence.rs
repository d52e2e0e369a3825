//! Integration tests for the file backend and catalog persistence.
//!
//! These exercise the real on-disk path: snapshots written to a scratch
//! directory, reloaded by a fresh store, and corrupted on purpose.

use std::sync::Arc;

use makhzan_core::{ImageData, Product, ProductDraft};
use makhzan_store::{
    CatalogStore, FileBackend, OnboardingFlag, StorageBackend, CATALOG_SLOT,
};

fn sample(name: &str, barcode: &str) -> Product {
    let draft = ProductDraft {
        name: name.to_string(),
        price_cents: 2500,
        size: "L".to_string(),
        color: "Blue".to_string(),
        description: "Integration fixture".to_string(),
        raw_image: vec![9, 9, 9],
        ..ProductDraft::default()
    };
    Product::new(draft, barcode.to_string(), ImageData::new(vec![0xFF, 0xD8]))
}

#[tokio::test]
async fn test_catalog_survives_restart_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileBackend::new(dir.path()));

    let mut store = CatalogStore::open(Arc::clone(&backend) as Arc<dyn StorageBackend>).await;
    store.insert(sample("Kurta", "ART-100000001")).await.unwrap();
    store.insert(sample("Shawl", "ART-100000002")).await.unwrap();
    let expected: Vec<Product> = store.products().to_vec();

    let reopened = CatalogStore::open(backend).await;
    assert_eq!(reopened.products(), expected.as_slice());
}

#[tokio::test]
async fn test_reload_preserves_newest_first_order() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileBackend::new(dir.path()));

    let mut store = CatalogStore::open(Arc::clone(&backend) as Arc<dyn StorageBackend>).await;
    for i in 0..5 {
        store
            .insert(sample(&format!("Item {i}"), &format!("ART-10000000{i}")))
            .await
            .unwrap();
    }

    let reopened = CatalogStore::open(backend).await;
    let names: Vec<&str> = reopened.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Item 4", "Item 3", "Item 2", "Item 1", "Item 0"]);
}

#[tokio::test]
async fn test_corrupted_snapshot_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileBackend::new(dir.path()));

    backend.write(CATALOG_SLOT, "][ definitely not json").await.unwrap();

    let store = CatalogStore::open(backend).await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_recovered_store_can_persist_again() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileBackend::new(dir.path()));

    backend.write(CATALOG_SLOT, "garbage").await.unwrap();

    let mut store = CatalogStore::open(Arc::clone(&backend) as Arc<dyn StorageBackend>).await;
    store.insert(sample("Fresh", "ART-200000001")).await.unwrap();

    let reopened = CatalogStore::open(backend).await;
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.products()[0].name, "Fresh");
}

#[tokio::test]
async fn test_onboarding_flag_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileBackend::new(dir.path()));

    let flag = OnboardingFlag::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
    assert!(!flag.is_complete().await);
    flag.mark_complete().await.unwrap();

    let flag_again = OnboardingFlag::new(backend);
    assert!(flag_again.is_complete().await);
}

#[tokio::test]
async fn test_catalog_and_onboarding_slots_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileBackend::new(dir.path()));

    let mut store = CatalogStore::open(Arc::clone(&backend) as Arc<dyn StorageBackend>).await;
    store.insert(sample("Item", "ART-300000001")).await.unwrap();

    let flag = OnboardingFlag::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
    flag.mark_complete().await.unwrap();
    flag.reset().await.unwrap();

    let reopened = CatalogStore::open(backend).await;
    assert_eq!(reopened.len(), 1);
}
