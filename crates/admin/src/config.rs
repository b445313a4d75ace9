//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_PASSWORD` - Shared panel password (min 8 chars)
//! - `FIRESTORE_PROJECT_ID` - Google Cloud project holding the catalog
//! - `FIRESTORE_API_KEY` - Web API key for the Firestore REST API
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL (default: <http://localhost:3001>)
//! - `FIRESTORE_DATABASE` - Database id (default: `(default)`)
//! - `CATALOG_COLLECTION` - Collection name (default: products)
//! - `CATALOG_REFRESH_SECONDS` - Poll interval for the catalog (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use green_blue_store::FirestoreConfig;

/// The panel password is one shared secret for everybody, so at least
/// refuse trivially short values.
const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Shared panel password.
    ///
    /// A single static secret compared server-side; an acknowledged
    /// non-security boundary kept as a placeholder for real
    /// credential-based auth.
    pub admin_password: SecretString,
    /// Remote catalog collection settings
    pub firestore: FirestoreConfig,
    /// Poll interval standing in for the push subscription
    pub catalog_refresh: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid,
    /// or the panel password is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("ADMIN_BASE_URL", "http://localhost:3001");

        let admin_password = get_required_secret("ADMIN_PASSWORD")?;
        validate_admin_password(&admin_password)?;

        let firestore = firestore_from_env()?;
        let catalog_refresh = get_refresh_interval()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            admin_password,
            firestore,
            catalog_refresh,
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
fn firestore_from_env() -> Result<FirestoreConfig, ConfigError> {
    Ok(FirestoreConfig {
        project_id: get_required_env("FIRESTORE_PROJECT_ID")?,
        database: get_env_or_default("FIRESTORE_DATABASE", "(default)"),
        collection: get_env_or_default("CATALOG_COLLECTION", "products"),
        api_key: get_required_secret("FIRESTORE_API_KEY")?,
    })
}

/// Parse the catalog poll interval.
fn get_refresh_interval() -> Result<Duration, ConfigError> {
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
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Enforce the minimum panel password length.
fn validate_admin_password(secret: &SecretString) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            "ADMIN_PASSWORD".to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_ADMIN_PASSWORD_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_admin_password_too_short() {
        let secret = SecretString::from("corta");
        let result = validate_admin_password(&secret);
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_admin_password_ok() {
        let secret = SecretString::from("GreenBlue2024");
        assert!(validate_admin_password(&secret).is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = AdminConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            base_url: "http://localhost:3001".to_string(),
            admin_password: SecretString::from("GreenBlue2024"),
            firestore: FirestoreConfig {
                project_id: "green-and-blue-ind".to_string(),
                database: "(default)".to_string(),
                collection: "products".to_string(),
                api_key: SecretString::from("k3y"),
            },
            catalog_refresh: Duration::from_secs(30),
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3001);
    }
}
