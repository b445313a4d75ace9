//! Seed the remote collection with the default demonstration products.
//!
//! Inserts the six defaults only when the collection is empty. Running
//! this once per deployment avoids the double-seed race of two servers
//! bootstrapping an empty collection at the same time.

use tracing::info;

use green_blue_store::sync::{SeedOutcome, ensure_seeded};

use super::firestore_from_env;

/// Seed the collection when empty.
///
/// # Errors
///
/// Returns an error if environment variables are missing or the remote
/// store rejects a call.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let store = firestore_from_env()?;

    match ensure_seeded(&store).await? {
        SeedOutcome::Seeded { inserted } => {
            info!(inserted, "seeded empty product collection");
        }
        SeedOutcome::AlreadyPopulated => {
            info!("collection already has products; nothing to do");
        }
    }

    Ok(())
}
