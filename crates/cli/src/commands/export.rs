//! Export the remote catalog to a JSON file.
//!
//! Same serialization as the admin panel's export download; useful for
//! backups without opening the panel.

use tracing::info;

use green_blue_store::CatalogStore;

use super::firestore_from_env;

/// Export the catalog to `output`.
///
/// # Errors
///
/// Returns an error if environment variables are missing, the listing
/// fails, or the file cannot be written.
pub async fn run(output: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let store = firestore_from_env()?;
    let products = store.list().await?;

    let json = serde_json::to_string_pretty(&products)?;
    tokio::fs::write(output, json).await?;

    info!(products = products.len(), path = %output, "catalog exported");
    Ok(())
}
