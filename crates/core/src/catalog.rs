//! In-process mirror of the remote product collection.
//!
//! [`Catalog`] holds the latest full snapshot plus an observer registry.
//! The snapshot is replaced wholesale on every refresh - readers never
//! observe a partially applied update. Mutations never touch the snapshot
//! directly; they go to the remote store and come back through
//! [`Catalog::replace`] once the store echoes them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::types::Product;

type Callback = Arc<dyn Fn(&[Product]) + Send + Sync>;

struct CatalogInner {
    products: Arc<Vec<Product>>,
    subscribers: HashMap<u64, Callback>,
    next_subscriber_id: u64,
    /// Whether the first remote snapshot has been applied.
    ready: bool,
}

/// Shared catalog snapshot with change notification.
///
/// Cheaply cloneable; all clones observe the same snapshot.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<Mutex<CatalogInner>>,
}

/// Handle for a registered observer. Dropping it unsubscribes.
pub struct Subscription {
    catalog: Weak<Mutex<CatalogInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.catalog.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.subscribers.remove(&self.id);
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CatalogInner {
                products: Arc::new(Vec::new()),
                subscribers: HashMap::new(),
                next_subscriber_id: 0,
                ready: false,
            })),
        }
    }

    /// The current snapshot. Cheap; returns a handle to the shared list.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Product>> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&inner.products)
    }

    /// True once the first remote snapshot has been applied.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.ready
    }

    /// Replace the snapshot atomically and notify every subscriber.
    ///
    /// Callbacks run outside the registry lock, so a callback may itself
    /// subscribe or read the snapshot without deadlocking.
    pub fn replace(&self, products: Vec<Product>) {
        let (snapshot, callbacks) = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.products = Arc::new(products);
            inner.ready = true;
            let callbacks: Vec<Callback> = inner.subscribers.values().cloned().collect();
            (Arc::clone(&inner.products), callbacks)
        };
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    /// Register an observer.
    ///
    /// `on_change` is invoked once immediately with the current snapshot,
    /// then again after every [`Catalog::replace`], until the returned
    /// handle is dropped.
    #[must_use = "dropping the subscription unsubscribes"]
    pub fn subscribe(&self, on_change: impl Fn(&[Product]) + Send + Sync + 'static) -> Subscription {
        let callback: Callback = Arc::new(on_change);
        let (id, snapshot) = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = inner.next_subscriber_id;
            inner.next_subscriber_id += 1;
            inner.subscribers.insert(id, Arc::clone(&callback));
            (id, Arc::clone(&inner.products))
        };
        callback(&snapshot);
        Subscription {
            catalog: Arc::downgrade(&self.inner),
            id,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::types::{Category, ProductId};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {id}"),
            category: Category::Cctv,
            price: 100_000,
            image: "https://images.example.com/p.jpg".to_string(),
            stock: None,
            description: None,
        }
    }

    #[test]
    fn test_subscribe_fires_immediately_with_current_snapshot() {
        let catalog = Catalog::new();
        catalog.replace(vec![product("p1")]);

        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_cb = Arc::clone(&seen);
        let _sub = catalog.subscribe(move |products| {
            seen_in_cb.store(products.len(), Ordering::SeqCst);
        });

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_replace_notifies_subscribers() {
        let catalog = Catalog::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_cb = Arc::clone(&calls);
        let _sub = catalog.subscribe(move |_| {
            calls_in_cb.fetch_add(1, Ordering::SeqCst);
        });

        catalog.replace(vec![product("p1")]);
        catalog.replace(vec![product("p1"), product("p2")]);

        // One immediate call plus one per replace.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(catalog.snapshot().len(), 2);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let catalog = Catalog::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_cb = Arc::clone(&calls);
        let sub = catalog.subscribe(move |_| {
            calls_in_cb.fetch_add(1, Ordering::SeqCst);
        });
        drop(sub);

        catalog.replace(vec![product("p1")]);

        assert_eq!(calls.load(Ordering::SeqCst), 1, "only the immediate call");
    }

    #[test]
    fn test_snapshot_is_fully_replaced() {
        let catalog = Catalog::new();
        catalog.replace(vec![product("p1"), product("p2")]);
        catalog.replace(vec![product("p3")]);

        let snapshot = catalog.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, ProductId::new("p3"));
    }

    #[test]
    fn test_ready_tracks_first_snapshot() {
        let catalog = Catalog::new();
        assert!(!catalog.is_ready());
        catalog.replace(Vec::new());
        assert!(catalog.is_ready());
    }
}
