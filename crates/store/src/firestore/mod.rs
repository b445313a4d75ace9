//! Firestore REST implementation of [`CatalogStore`].
//!
//! Talks to `firestore.googleapis.com` with `reqwest`; authentication is
//! the project's web API key as a query parameter, exactly like the
//! browser SDK the collection was originally written with. Documents
//! that fail conversion are skipped with a warning rather than failing
//! the whole listing.

mod wire;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{instrument, warn};

use green_blue_core::{Product, ProductId, ProductInput};

use crate::CatalogStore;
use crate::error::StoreError;
use wire::{Document, ListDocumentsResponse, document_to_product, fields_payload};

/// Page size for `documents.list`; the catalog is small, so one page is
/// the common case.
const LIST_PAGE_SIZE: u32 = 300;

/// Upper bound on any single remote call. Without it a hung connection
/// would leave the caller pending forever.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the hosted collection.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct FirestoreConfig {
    /// Google Cloud project id (e.g. `green-and-blue-ind`).
    pub project_id: String,
    /// Database id; `(default)` unless a named database is used.
    pub database: String,
    /// Collection holding the products.
    pub collection: String,
    /// Web API key passed as the `key` query parameter.
    pub api_key: SecretString,
}

impl std::fmt::Debug for FirestoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreConfig")
            .field("project_id", &self.project_id)
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// REST client for the remote product collection.
#[derive(Clone)]
pub struct FirestoreCatalog {
    inner: Arc<FirestoreCatalogInner>,
}

struct FirestoreCatalogInner {
    client: reqwest::Client,
    /// `.../documents/{collection}` - list/create endpoint.
    collection_url: String,
    api_key: String,
}

impl FirestoreCatalog {
    /// Create a new client. Performs no I/O.
    #[must_use]
    pub fn new(config: &FirestoreConfig) -> Self {
        let collection_url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/{}/documents/{}",
            config.project_id, config.database, config.collection
        );
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            inner: Arc::new(FirestoreCatalogInner {
                client,
                collection_url,
                api_key: config.api_key.expose_secret().to_string(),
            }),
        }
    }

    fn document_url(&self, id: &ProductId) -> String {
        format!("{}/{}", self.inner.collection_url, id)
    }

    /// Map a response to an error unless it is a success status.
    async fn check_status(
        response: reqwest::Response,
        target: &str,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(target.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogStore for FirestoreCatalog {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let mut products = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .inner
                .client
                .get(&self.inner.collection_url)
                .query(&[("key", self.inner.api_key.as_str())])
                .query(&[("pageSize", LIST_PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;
            let response = Self::check_status(response, &self.inner.collection_url).await?;
            let page: ListDocumentsResponse = response
                .json()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;

            for document in &page.documents {
                match document_to_product(document) {
                    Ok(product) => products.push(product),
                    Err(e) => warn!("skipping malformed document: {e}"),
                }
            }

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(products)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create(&self, input: &ProductInput) -> Result<ProductId, StoreError> {
        let response = self
            .inner
            .client
            .post(&self.inner.collection_url)
            .query(&[("key", self.inner.api_key.as_str())])
            .json(&fields_payload(input))
            .send()
            .await?;
        let response = Self::check_status(response, &self.inner.collection_url).await?;

        let created: Document = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(ProductId::new(created.doc_id()))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn update(&self, id: &ProductId, input: &ProductInput) -> Result<(), StoreError> {
        let mut request = self
            .inner
            .client
            .patch(self.document_url(id))
            .query(&[("key", self.inner.api_key.as_str())])
            // Replace, never resurrect: a record deleted elsewhere stays
            // deleted and the caller gets NotFound.
            .query(&[("currentDocument.exists", "true")]);
        for path in wire::FIELD_PATHS {
            request = request.query(&[("updateMask.fieldPaths", path)]);
        }

        let response = request.json(&fields_payload(input)).send().await?;
        Self::check_status(response, id.as_str()).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let response = self
            .inner
            .client
            .delete(self.document_url(id))
            .query(&[("key", self.inner.api_key.as_str())])
            .send()
            .await?;

        // Firestore deletes are idempotent; tolerate an already-gone id.
        match Self::check_status(response, id.as_str()).await {
            Ok(_) | Err(StoreError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FirestoreConfig {
        FirestoreConfig {
            project_id: "green-and-blue-ind".to_string(),
            database: "(default)".to_string(),
            collection: "products".to_string(),
            api_key: SecretString::from("k3y"),
        }
    }

    #[test]
    fn test_collection_url_shape() {
        let client = FirestoreCatalog::new(&config());
        assert_eq!(
            client.inner.collection_url,
            "https://firestore.googleapis.com/v1/projects/green-and-blue-ind/databases/(default)/documents/products"
        );
        assert_eq!(
            client.document_url(&ProductId::new("abc123")),
            "https://firestore.googleapis.com/v1/projects/green-and-blue-ind/databases/(default)/documents/products/abc123"
        );
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let debug_output = format!("{:?}", config());
        assert!(debug_output.contains("green-and-blue-ind"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("k3y"));
    }
}
