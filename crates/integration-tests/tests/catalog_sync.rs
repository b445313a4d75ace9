//! Catalog synchronization tests: seeding, snapshot replacement and
//! subscription echo over the in-memory store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use green_blue_core::Category;
use green_blue_core::catalog::Catalog;
use green_blue_integration_tests::input;
use green_blue_store::sync::{SeedOutcome, bootstrap, ensure_seeded, refresh};
use green_blue_store::{CatalogStore, MemoryCatalog};

#[tokio::test]
async fn seeding_an_empty_collection_inserts_the_six_defaults() {
    let store = MemoryCatalog::new();

    let outcome = ensure_seeded(&store).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded { inserted: 6 });

    let products = store.list().await.unwrap();
    assert_eq!(products.len(), 6);
    for category in Category::ALL {
        assert!(
            products.iter().any(|p| p.category == category),
            "seeded catalog is missing {category}"
        );
    }
}

#[tokio::test]
async fn seeding_runs_at_most_once() {
    let store = MemoryCatalog::new();
    ensure_seeded(&store).await.unwrap();
    let outcome = ensure_seeded(&store).await.unwrap();

    assert_eq!(outcome, SeedOutcome::AlreadyPopulated);
    assert_eq!(store.list().await.unwrap().len(), 6);
}

#[tokio::test]
async fn bootstrap_leaves_no_blank_first_render() {
    let store = MemoryCatalog::new();
    let catalog = Catalog::new();

    bootstrap(&store, &catalog).await.unwrap();

    assert!(catalog.is_ready());
    assert_eq!(catalog.snapshot().len(), 6);
}

#[tokio::test]
async fn subscription_fires_immediately_and_on_every_echo() {
    let store = MemoryCatalog::new();
    let catalog = Catalog::new();
    bootstrap(&store, &catalog).await.unwrap();

    let seen = Arc::new(AtomicUsize::new(usize::MAX));
    let calls = Arc::new(AtomicUsize::new(0));
    let (seen_cb, calls_cb) = (Arc::clone(&seen), Arc::clone(&calls));
    let _sub = catalog.subscribe(move |products| {
        seen_cb.store(products.len(), Ordering::SeqCst);
        calls_cb.fetch_add(1, Ordering::SeqCst);
    });

    // Immediate invocation with the current snapshot.
    assert_eq!(seen.load(Ordering::SeqCst), 6);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // A mutation only reaches the snapshot through the store echo.
    store
        .create(&input("Sensor de Movimiento", Category::SeguridadElectronica, 90_000))
        .await
        .unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 6, "no optimistic update");

    refresh(&store, &catalog).await.unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn export_serialization_round_trips() {
    use green_blue_core::Product;

    let store = MemoryCatalog::new();
    let catalog = Catalog::new();
    bootstrap(&store, &catalog).await.unwrap();

    // Same serialization the admin panel offers as a download.
    let json = serde_json::to_string_pretty(catalog.snapshot().as_ref()).unwrap();
    assert!(json.contains("Cámara IP 4MP"));
    assert!(json.contains("Control de Acceso"));

    let back: Vec<Product> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 6);
    assert_eq!(&back, catalog.snapshot().as_ref());
}

#[tokio::test]
async fn failed_refresh_keeps_serving_the_stale_snapshot() {
    let store = MemoryCatalog::new();
    let catalog = Catalog::new();
    bootstrap(&store, &catalog).await.unwrap();

    store.set_offline(true);
    assert!(refresh(&store, &catalog).await.is_err());

    assert_eq!(catalog.snapshot().len(), 6);
    assert!(catalog.is_ready());
}
