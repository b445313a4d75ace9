//! Admin CRUD semantics over the in-memory store: explicit insert vs
//! replace, validation blocking the store call, and the
//! deleted-elsewhere edit case.

#![allow(clippy::unwrap_used)]

use green_blue_core::{Category, ProductDraft, ValidationError};
use green_blue_integration_tests::input;
use green_blue_store::{CatalogStore, MemoryCatalog};

#[tokio::test]
async fn create_inserts_exactly_one_record() {
    let store = MemoryCatalog::new();

    let id = store
        .create(&input("Cámara IP 4MP", Category::Cctv, 250_000))
        .await
        .unwrap();

    let products = store.list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, id);
}

#[tokio::test]
async fn update_replaces_in_place_and_creates_nothing() {
    let store = MemoryCatalog::new();
    let id = store
        .create(&input("Cámara IP 4MP", Category::Cctv, 250_000))
        .await
        .unwrap();
    store
        .create(&input("Lector Biométrico", Category::ControlDeAcceso, 320_000))
        .await
        .unwrap();

    let updated = input("Cámara IP 4MP PoE", Category::Cctv, 280_000);
    store.update(&id, &updated).await.unwrap();

    let products = store.list().await.unwrap();
    assert_eq!(products.len(), 2, "update must not insert");
    let edited = products.iter().find(|p| p.id == id).unwrap();
    assert_eq!(edited.name, "Cámara IP 4MP PoE");
    assert_eq!(edited.price, 280_000);
}

#[tokio::test]
async fn updating_a_record_deleted_elsewhere_fails_instead_of_duplicating() {
    let store = MemoryCatalog::new();
    let id = store
        .create(&input("Panel de Control", Category::SeguridadElectronica, 450_000))
        .await
        .unwrap();

    // Another admin deletes the record while the form is open.
    store.delete(&id).await.unwrap();

    let err = store
        .update(&id, &input("Panel de Control v2", Category::SeguridadElectronica, 460_000))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(store.list().await.unwrap().is_empty(), "no duplicate record");
}

#[tokio::test]
async fn invalid_drafts_never_reach_the_store() {
    let store = MemoryCatalog::new();

    let draft = ProductDraft {
        name: String::new(),
        category: Category::Cctv,
        price: 250_000,
        image: "https://images.example.com/c.jpg".to_string(),
        stock: None,
        description: None,
    };
    assert_eq!(draft.validate().unwrap_err(), ValidationError::EmptyName);

    let draft = ProductDraft {
        name: "Cámara IP 4MP".to_string(),
        category: Category::Cctv,
        price: 0,
        image: "https://images.example.com/c.jpg".to_string(),
        stock: None,
        description: None,
    };
    assert_eq!(draft.validate().unwrap_err(), ValidationError::ZeroPrice);

    // The failed validations made no store calls.
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_the_record_and_tolerates_repeats() {
    let store = MemoryCatalog::new();
    let id = store
        .create(&input("Cámara Domo PTZ", Category::Cctv, 550_000))
        .await
        .unwrap();

    store.delete(&id).await.unwrap();
    store.delete(&id).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
}
