//! Full shop flow over the in-memory store: seed → browse/filter →
//! cart → WhatsApp quote.

#![allow(clippy::unwrap_used)]

use green_blue_core::cart::{Cart, CartError};
use green_blue_core::catalog::Catalog;
use green_blue_core::checkout::{quote_message, quote_url};
use green_blue_core::filter::{CategoryFilter, visible};
use green_blue_core::Category;
use green_blue_integration_tests::{input, input_with_stock};
use green_blue_store::sync::{bootstrap, refresh};
use green_blue_store::{CatalogStore, MemoryCatalog};

#[tokio::test]
async fn browsing_the_seeded_catalog() {
    let store = MemoryCatalog::new();
    let catalog = Catalog::new();
    bootstrap(&store, &catalog).await.unwrap();
    let snapshot = catalog.snapshot();

    // No filter, no query: everything, catalog order.
    let todos = visible(&snapshot, CategoryFilter::Todos, "");
    assert_eq!(todos.len(), 6);
    assert_eq!(todos[0].name, "Cámara IP 4MP");

    // Category filter restricts to CCTV only.
    let cctv = visible(&snapshot, CategoryFilter::Solo(Category::Cctv), "");
    assert_eq!(cctv.len(), 3);
    assert!(cctv.iter().all(|p| p.category == Category::Cctv));

    // Case-insensitive substring search on the name.
    let camaras = visible(&snapshot, CategoryFilter::Todos, "cámara");
    let names: Vec<&str> = camaras.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Cámara IP 4MP", "Cámara Domo PTZ"]);

    // Nothing matches: explicit empty result, not an error.
    assert!(visible(&snapshot, CategoryFilter::Todos, "drone").is_empty());
}

#[tokio::test]
async fn cart_and_quote_flow() {
    let store = MemoryCatalog::new();
    let catalog = Catalog::new();
    store.create(&input("A", Category::Cctv, 1_000)).await.unwrap();
    store.create(&input("B", Category::Cctv, 2_000)).await.unwrap();
    refresh(&store, &catalog).await.unwrap();
    let snapshot = catalog.snapshot();

    let mut cart = Cart::new();
    let first = cart.add(snapshot[0].clone()).unwrap();
    cart.add(snapshot[0].clone()).unwrap();
    cart.add(snapshot[1].clone()).unwrap();
    assert_eq!(cart.len(), 3);
    assert_eq!(cart.total(), 4_000);

    // Duplicate lines are independently removable.
    cart.remove(first);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), 3_000);

    let message = quote_message(&cart);
    assert!(message.starts_with("🛒 *Hola, deseo cotizar los siguientes productos:*"));
    assert!(message.contains("• A - $1.000"));
    assert!(message.contains("• B - $2.000"));
    assert!(message.ends_with("💰 *Total: $3.000 COP*"));

    let url = quote_url("573134809376", &cart);
    assert!(url.starts_with("https://wa.me/573134809376?text="));
    assert!(!url.contains(' '));
}

#[tokio::test]
async fn out_of_stock_products_cannot_be_added() {
    let store = MemoryCatalog::new();
    let catalog = Catalog::new();
    store
        .create(&input_with_stock("Agotado", Category::Cctv, 100_000, 0))
        .await
        .unwrap();
    store
        .create(&input_with_stock("Disponible", Category::Cctv, 100_000, 5))
        .await
        .unwrap();
    refresh(&store, &catalog).await.unwrap();
    let snapshot = catalog.snapshot();

    let mut cart = Cart::new();
    let err = cart.add(snapshot[0].clone()).unwrap_err();
    assert_eq!(err, CartError::OutOfStock("Agotado".to_string()));
    assert!(cart.is_empty(), "cart unchanged after the warning");

    // Unknown stock (None) still sells; explicit stock sells too.
    cart.add(snapshot[1].clone()).unwrap();
    assert_eq!(cart.len(), 1);
}

#[tokio::test]
async fn admin_edits_reach_the_shop_through_the_echo() {
    let store = MemoryCatalog::new();
    let catalog = Catalog::new();
    bootstrap(&store, &catalog).await.unwrap();

    // Admin marks a product out of stock.
    let snapshot = catalog.snapshot();
    let target = snapshot.iter().find(|p| p.name == "Cámara IP 4MP").unwrap();
    let mut edited = input("Cámara IP 4MP", Category::Cctv, target.price);
    edited.stock = Some(0);
    store.update(&target.id, &edited).await.unwrap();
    refresh(&store, &catalog).await.unwrap();

    // The storefront snapshot reflects it; the add is now blocked.
    let snapshot = catalog.snapshot();
    let updated = snapshot.iter().find(|p| p.name == "Cámara IP 4MP").unwrap();
    let mut cart = Cart::new();
    assert!(cart.add(updated.clone()).is_err());
}
