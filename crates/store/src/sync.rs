//! Snapshot refresh, seeding, and the periodic poll task.
//!
//! The remote store has no push channel, so every process polls the
//! collection and feeds full snapshots into its in-process
//! [`Catalog`]. Admin mutations call [`refresh`] directly afterwards so
//! the mutating process observes its own echo before rendering.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use green_blue_core::catalog::Catalog;

use crate::error::StoreError;
use crate::{CatalogStore, seed};

/// Outcome of [`ensure_seeded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection already had products; nothing was inserted.
    AlreadyPopulated,
    /// The collection was empty; the defaults were inserted.
    Seeded { inserted: usize },
}

/// Fetch the remote collection and replace the catalog snapshot.
///
/// Returns the number of products in the new snapshot.
///
/// # Errors
///
/// On any [`StoreError`] the previous snapshot is left untouched.
pub async fn refresh<S>(store: &S, catalog: &Catalog) -> Result<usize, StoreError>
where
    S: CatalogStore + ?Sized,
{
    let products = store.list().await?;
    let count = products.len();
    catalog.replace(products);
    Ok(count)
}

/// Insert the default products when the remote collection is empty.
///
/// Known race: two processes that both observe an empty collection will
/// both insert the defaults. This mirrors the collection's original
/// bootstrap behavior; deployments that must seed exactly once should
/// run `gb-cli seed` instead of relying on concurrent server startups.
///
/// # Errors
///
/// Propagates the first failing list or create call; earlier inserts are
/// not rolled back.
pub async fn ensure_seeded<S>(store: &S) -> Result<SeedOutcome, StoreError>
where
    S: CatalogStore + ?Sized,
{
    let existing = store.list().await?;
    if !existing.is_empty() {
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let defaults = seed::default_products();
    let mut inserted = 0;
    for input in &defaults {
        store.create(input).await?;
        inserted += 1;
    }
    Ok(SeedOutcome::Seeded { inserted })
}

/// Seed when empty, then apply a fresh snapshot to the catalog.
///
/// The post-seed listing happens before this returns, so the first
/// render after a fresh seed already shows the defaults instead of an
/// empty shop waiting for the next poll.
///
/// # Errors
///
/// Propagates any [`StoreError`] from seeding or the listing.
pub async fn bootstrap<S>(store: &S, catalog: &Catalog) -> Result<(), StoreError>
where
    S: CatalogStore + ?Sized,
{
    match ensure_seeded(store).await? {
        SeedOutcome::Seeded { inserted } => {
            info!(inserted, "seeded empty product collection");
        }
        SeedOutcome::AlreadyPopulated => {}
    }
    let count = refresh(store, catalog).await?;
    info!(products = count, "catalog snapshot applied");
    Ok(())
}

/// Spawn the periodic poll that stands in for a push subscription.
///
/// Each tick fully replaces the catalog snapshot. Failures keep the
/// previous snapshot and log a warning; the shop keeps serving stale
/// data rather than going down.
pub fn spawn_refresh_task(
    store: Arc<dyn CatalogStore>,
    catalog: Catalog,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // First tick fires immediately; bootstrap already applied a
        // snapshot, so skip it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match refresh(store.as_ref(), &catalog).await {
                Ok(count) => debug!(products = count, "catalog refreshed"),
                Err(e) => warn!("catalog refresh failed: {e}"),
            }
        }
    })
}
