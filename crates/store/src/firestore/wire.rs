//! JSON wire format of the Firestore REST API.
//!
//! Documents carry typed value objects (`{"stringValue": ...}`,
//! `{"integerValue": "250000"}`); integers travel as decimal strings.
//! An empty collection is a list response without a `documents` array,
//! not an empty array.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use green_blue_core::{Category, Product, ProductId, ProductInput};

use crate::error::StoreError;

/// One document as returned by the REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Full resource name; the document id is the last path segment.
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

/// Response of `documents.list`.
#[derive(Debug, Default, Deserialize)]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default, rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl Document {
    /// The document id (last segment of the resource name).
    #[must_use]
    pub fn doc_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn string_field(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)?
            .get("stringValue")?
            .as_str()
            .map(ToString::to_string)
    }

    fn u64_field(&self, key: &str) -> Option<u64> {
        let value = self.fields.get(key)?;
        if let Some(int) = value.get("integerValue").and_then(Value::as_str) {
            return int.parse().ok();
        }
        // The web SDK writes numbers it considers non-integral as
        // doubles; clamp to whole pesos and refuse negatives.
        let double = value.get("doubleValue").and_then(Value::as_f64)?;
        if double < 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = double as u64;
        Some(whole)
    }
}

/// Convert a remote document into the domain model.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] when a required field is missing or
/// the category label is unknown.
pub fn document_to_product(doc: &Document) -> Result<Product, StoreError> {
    let id = doc.doc_id().to_string();
    let missing = |field: &str| StoreError::Decode(format!("document {id} missing {field}"));

    let name = doc.string_field("name").ok_or_else(|| missing("name"))?;
    let category_label = doc
        .string_field("category")
        .ok_or_else(|| missing("category"))?;
    let category = Category::parse(&category_label)
        .map_err(|e| StoreError::Decode(format!("document {id}: {e}")))?;
    let price = doc.u64_field("price").ok_or_else(|| missing("price"))?;
    let image = doc.string_field("image").ok_or_else(|| missing("image"))?;

    Ok(Product {
        id: ProductId::new(id),
        name,
        category,
        price,
        image,
        stock: doc.u64_field("stock"),
        description: doc.string_field("description"),
    })
}

/// Build the `{"fields": ...}` body for create and update calls.
///
/// Absent optionals are omitted; together with a full update mask that
/// clears them remotely.
#[must_use]
pub fn fields_payload(input: &ProductInput) -> Value {
    let mut fields = serde_json::Map::new();
    fields.insert("name".to_string(), json!({"stringValue": input.name}));
    fields.insert(
        "category".to_string(),
        json!({"stringValue": input.category.label()}),
    );
    fields.insert(
        "price".to_string(),
        json!({"integerValue": input.price.to_string()}),
    );
    fields.insert("image".to_string(), json!({"stringValue": input.image}));
    if let Some(stock) = input.stock {
        fields.insert(
            "stock".to_string(),
            json!({"integerValue": stock.to_string()}),
        );
    }
    if let Some(description) = &input.description {
        fields.insert(
            "description".to_string(),
            json!({"stringValue": description}),
        );
    }
    json!({ "fields": fields })
}

/// Every persisted field, for the update mask.
pub const FIELD_PATHS: [&str; 6] = ["name", "category", "price", "image", "stock", "description"];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn doc(json: Value) -> Document {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_document_to_product_full() {
        let document = doc(json!({
            "name": "projects/green-and-blue-ind/databases/(default)/documents/products/abc123",
            "fields": {
                "name": {"stringValue": "Cámara IP 4MP"},
                "category": {"stringValue": "CCTV"},
                "price": {"integerValue": "250000"},
                "image": {"stringValue": "https://images.example.com/camara.jpg"},
                "stock": {"integerValue": "8"},
                "description": {"stringValue": "Visión nocturna"}
            }
        }));

        let product = document_to_product(&document).unwrap();
        assert_eq!(product.id, ProductId::new("abc123"));
        assert_eq!(product.name, "Cámara IP 4MP");
        assert_eq!(product.category, Category::Cctv);
        assert_eq!(product.price, 250_000);
        assert_eq!(product.stock, Some(8));
        assert_eq!(product.description.as_deref(), Some("Visión nocturna"));
    }

    #[test]
    fn test_document_to_product_without_optionals() {
        let document = doc(json!({
            "name": "projects/p/databases/(default)/documents/products/abc",
            "fields": {
                "name": {"stringValue": "Grabador NVR 8ch"},
                "category": {"stringValue": "CCTV"},
                "price": {"integerValue": "400000"},
                "image": {"stringValue": "https://images.example.com/nvr.jpg"}
            }
        }));

        let product = document_to_product(&document).unwrap();
        assert_eq!(product.stock, None);
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_double_price_is_accepted() {
        let document = doc(json!({
            "name": "projects/p/databases/(default)/documents/products/abc",
            "fields": {
                "name": {"stringValue": "Panel de Control"},
                "category": {"stringValue": "Seguridad Electrónica"},
                "price": {"doubleValue": 450000.0},
                "image": {"stringValue": "https://images.example.com/panel.jpg"}
            }
        }));

        assert_eq!(document_to_product(&document).unwrap().price, 450_000);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let document = doc(json!({
            "name": "projects/p/databases/(default)/documents/products/abc",
            "fields": {
                "name": {"stringValue": "Dron"},
                "category": {"stringValue": "Drones"},
                "price": {"integerValue": "1"},
                "image": {"stringValue": "https://images.example.com/d.jpg"}
            }
        }));

        let err = document_to_product(&document).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn test_empty_list_response_has_no_documents_key() {
        let response: ListDocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.documents.is_empty());
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn test_fields_payload_omits_absent_optionals() {
        let input = ProductInput {
            name: "Lector Biométrico".to_string(),
            category: Category::ControlDeAcceso,
            price: 320_000,
            image: "https://images.example.com/lector.jpg".to_string(),
            stock: None,
            description: None,
        };

        let payload = fields_payload(&input);
        let fields = payload.get("fields").unwrap();
        assert_eq!(
            fields.get("price").unwrap().get("integerValue").unwrap(),
            "320000"
        );
        assert_eq!(
            fields.get("category").unwrap().get("stringValue").unwrap(),
            "Control de Acceso"
        );
        assert!(fields.get("stock").is_none());
        assert!(fields.get("description").is_none());
    }
}
