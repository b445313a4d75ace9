//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FIRESTORE_PROJECT_ID` - Google Cloud project holding the catalog
//! - `FIRESTORE_API_KEY` - Web API key for the Firestore REST API
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `FIRESTORE_DATABASE` - Database id (default: `(default)`)
//! - `CATALOG_COLLECTION` - Collection name (default: products)
//! - `CATALOG_REFRESH_SECONDS` - Poll interval for the catalog (default: 30)
//! - `WHATSAPP_PHONE` - Quote destination number (default: 573134809376)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use green_blue_store::FirestoreConfig;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Remote catalog collection settings
    pub firestore: FirestoreConfig,
    /// Poll interval standing in for the push subscription
    pub catalog_refresh: Duration,
    /// Destination phone for the WhatsApp quote handoff
    pub whatsapp_phone: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let firestore = firestore_from_env()?;
        let catalog_refresh = get_refresh_interval()?;
        let whatsapp_phone = get_env_or_default("WHATSAPP_PHONE", "573134809376");
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            firestore,
            catalog_refresh,
            whatsapp_phone,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the Firestore settings shared by every binary.
pub(crate) fn firestore_from_env() -> Result<FirestoreConfig, ConfigError> {
    Ok(FirestoreConfig {
        project_id: get_required_env("FIRESTORE_PROJECT_ID")?,
        database: get_env_or_default("FIRESTORE_DATABASE", "(default)"),
        collection: get_env_or_default("CATALOG_COLLECTION", "products"),
        api_key: get_required_secret("FIRESTORE_API_KEY")?,
    })
}

/// Parse the catalog poll interval.
pub(crate) fn get_refresh_interval() -> Result<Duration, ConfigError> {
    let seconds = get_env_or_default("CATALOG_REFRESH_SECONDS", "30")
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_REFRESH_SECONDS".to_string(), e.to_string())
        })?;
    if seconds == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "CATALOG_REFRESH_SECONDS".to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_secs(seconds))
}

/// Get a required environment variable.
pub(crate) fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
pub(crate) fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
pub(crate) fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
pub(crate) fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            firestore: FirestoreConfig {
                project_id: "green-and-blue-ind".to_string(),
                database: "(default)".to_string(),
                collection: "products".to_string(),
                api_key: SecretString::from("k3y"),
            },
            catalog_refresh: Duration::from_secs(30),
            whatsapp_phone: "573134809376".to_string(),
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
