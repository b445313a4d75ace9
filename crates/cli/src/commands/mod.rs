//! CLI command implementations.

pub mod export;
pub mod seed;

use secrecy::SecretString;

use green_blue_store::{FirestoreCatalog, FirestoreConfig};

/// Build the Firestore client from environment variables.
///
/// Uses the same variables as the server binaries, so one `.env` serves
/// everything.
pub(crate) fn firestore_from_env() -> Result<FirestoreCatalog, Box<dyn std::error::Error>> {
    let project_id =
        std::env::var("FIRESTORE_PROJECT_ID").map_err(|_| "FIRESTORE_PROJECT_ID not set")?;
    let api_key = std::env::var("FIRESTORE_API_KEY")
        .map(SecretString::from)
        .map_err(|_| "FIRESTORE_API_KEY not set")?;

    let config = FirestoreConfig {
        project_id,
        database: std::env::var("FIRESTORE_DATABASE").unwrap_or_else(|_| "(default)".to_string()),
        collection: std::env::var("CATALOG_COLLECTION").unwrap_or_else(|_| "products".to_string()),
        api_key,
    };
    Ok(FirestoreCatalog::new(&config))
}
