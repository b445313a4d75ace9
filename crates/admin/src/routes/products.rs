//! Catalog management route handlers.
//!
//! Create and update are explicit, separately-routed operations: the
//! form for a new product posts to `/products`, the form for an existing
//! one posts to `/products/{id}`. Updating a record that was deleted
//! elsewhere mid-edit fails with a visible notice instead of quietly
//! inserting a duplicate. Deletes go through a confirmation page first.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use green_blue_core::checkout::format_cop;
use green_blue_core::{Category, Product, ProductDraft, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdminGate;
use crate::models::session::{set_flash, take_flash};
use crate::state::AppState;

/// Warning shown when required form fields are missing.
const INCOMPLETE_FORM_WARNING: &str = "⚠️ Por favor completa todos los campos";

// =============================================================================
// Views
// =============================================================================

/// One entry in the dashboard stats row.
pub struct StatView {
    pub icon: &'static str,
    pub number: usize,
    pub label: &'static str,
    pub class: &'static str,
}

/// Product display data for the dashboard grid.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.label(),
            price: format!("${}", format_cop(product.price)),
            image: product.image.clone(),
        }
    }
}

/// One option of the category select.
pub struct CategoryOption {
    pub label: &'static str,
    pub selected: bool,
}

fn category_options(selected: Category) -> Vec<CategoryOption> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryOption {
            label: category.label(),
            selected: category == selected,
        })
        .collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Dashboard template: stats plus the product grid.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub stats: Vec<StatView>,
    pub products: Vec<ProductView>,
    pub flash: Option<String>,
}

/// Create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub heading: &'static str,
    /// Where the form posts: `/products` or `/products/{id}`.
    pub action: String,
    pub name: String,
    pub categories: Vec<CategoryOption>,
    pub price: String,
    pub image: String,
    pub stock: String,
    pub description: String,
    pub warning: Option<String>,
}

/// Delete confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "products/confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Forms
// =============================================================================

/// Raw create/edit form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub description: String,
}

impl ProductForm {
    /// Stage the raw fields for validation.
    ///
    /// Mirrors the form's own behavior: an unparseable price counts as
    /// zero (and is then rejected), an empty or unparseable stock means
    /// "unknown", an unknown category falls back to the select's default.
    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: Category::parse(&self.category).unwrap_or(Category::Cctv),
            price: self.price.trim().parse().unwrap_or(0),
            image: self.image.clone(),
            stock: self.stock.trim().parse().ok(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }

    /// Re-render the form with the submitted values and a warning.
    fn into_template(
        self,
        heading: &'static str,
        action: String,
        warning: &str,
    ) -> ProductFormTemplate {
        let category = Category::parse(&self.category).unwrap_or(Category::Cctv);
        ProductFormTemplate {
            heading,
            action,
            name: self.name,
            categories: category_options(category),
            price: self.price,
            image: self.image,
            stock: self.stock,
            description: self.description,
            warning: Some(warning.to_string()),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Dashboard: stats plus the product grid.
///
/// GET /
#[instrument(skip(_gate, state, session))]
pub async fn index(
    _gate: RequireAdminGate,
    State(state): State<AppState>,
    session: Session,
) -> impl IntoResponse {
    let snapshot = state.catalog().snapshot();

    let count_in = |category: Category| {
        snapshot
            .iter()
            .filter(|p| p.category == category)
            .count()
    };
    let stats = vec![
        StatView {
            icon: "📦",
            number: snapshot.len(),
            label: "Productos totales",
            class: "stat-azul",
        },
        StatView {
            icon: "📹",
            number: count_in(Category::Cctv),
            label: "Productos CCTV",
            class: "stat-verde",
        },
        StatView {
            icon: "🔐",
            number: count_in(Category::ControlDeAcceso),
            label: "Control de Acceso",
            class: "stat-morado",
        },
    ];

    ProductsIndexTemplate {
        stats,
        products: snapshot.iter().map(ProductView::from).collect(),
        flash: take_flash(&session).await,
    }
}

/// Empty form for a new product.
///
/// GET /products/new
pub async fn new_form(_gate: RequireAdminGate) -> impl IntoResponse {
    ProductFormTemplate {
        heading: "Nuevo Producto",
        action: "/products".to_string(),
        name: String::new(),
        categories: category_options(Category::Cctv),
        price: String::new(),
        image: String::new(),
        stock: String::new(),
        description: String::new(),
        warning: None,
    }
}

/// Create a new product (explicit insert).
///
/// POST /products
#[instrument(skip(_gate, state, session, form))]
pub async fn create(
    _gate: RequireAdminGate,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let input = match form.to_draft().validate() {
        Ok(input) => input,
        Err(_) => {
            return Ok(form
                .into_template("Nuevo Producto", "/products".to_string(), INCOMPLETE_FORM_WARNING)
                .into_response());
        }
    };

    match state.store().create(&input).await {
        Ok(id) => {
            tracing::info!(%id, "product created");
            refresh_after_mutation(&state).await;
            set_flash(&session, "✅ Producto guardado").await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::error!("failed to create product: {e}");
            Ok(form
                .into_template(
                    "Nuevo Producto",
                    "/products".to_string(),
                    "❌ Error al guardar el producto",
                )
                .into_response())
        }
    }
}

/// Pre-filled form for an existing product.
///
/// GET /products/{id}/edit
#[instrument(skip(_gate, state))]
pub async fn edit_form(
    _gate: RequireAdminGate,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductFormTemplate> {
    let snapshot = state.catalog().snapshot();
    let product = snapshot
        .iter()
        .find(|p| p.id.as_str() == id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    Ok(ProductFormTemplate {
        heading: "Editar Producto",
        action: format!("/products/{id}"),
        name: product.name.clone(),
        categories: category_options(product.category),
        price: product.price.to_string(),
        image: product.image.clone(),
        stock: product.stock.map(|s| s.to_string()).unwrap_or_default(),
        description: product.description.clone().unwrap_or_default(),
        warning: None,
    })
}

/// Update an existing product (explicit replace).
///
/// POST /products/{id}
#[instrument(skip(_gate, state, session, form))]
pub async fn update(
    _gate: RequireAdminGate,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let action = format!("/products/{id}");

    let input = match form.to_draft().validate() {
        Ok(input) => input,
        Err(_) => {
            return Ok(form
                .into_template("Editar Producto", action, INCOMPLETE_FORM_WARNING)
                .into_response());
        }
    };

    let product_id = ProductId::new(id);
    match state.store().update(&product_id, &input).await {
        Ok(()) => {
            tracing::info!(id = %product_id, "product updated");
            refresh_after_mutation(&state).await;
            set_flash(&session, "✅ Producto guardado").await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(e) if e.is_not_found() => {
            // Deleted elsewhere mid-edit: keep it deleted and say so
            // instead of inserting a duplicate.
            tracing::warn!(id = %product_id, "update target vanished");
            Ok(form
                .into_template(
                    "Editar Producto",
                    action,
                    "❌ El producto ya no existe en el catálogo",
                )
                .into_response())
        }
        Err(e) => {
            tracing::error!("failed to update product: {e}");
            Ok(form
                .into_template("Editar Producto", action, "❌ Error al guardar el producto")
                .into_response())
        }
    }
}

/// Delete confirmation page.
///
/// GET /products/{id}/delete
#[instrument(skip(_gate, state))]
pub async fn confirm_delete(
    _gate: RequireAdminGate,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ConfirmDeleteTemplate> {
    let snapshot = state.catalog().snapshot();
    let product = snapshot
        .iter()
        .find(|p| p.id.as_str() == id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    Ok(ConfirmDeleteTemplate {
        id,
        name: product.name.clone(),
    })
}

/// Perform the delete after confirmation.
///
/// POST /products/{id}/delete
#[instrument(skip(_gate, state, session))]
pub async fn delete(
    _gate: RequireAdminGate,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let product_id = ProductId::new(id);

    match state.store().delete(&product_id).await {
        Ok(()) => {
            tracing::info!(id = %product_id, "product deleted");
            refresh_after_mutation(&state).await;
            set_flash(&session, "🗑️ Producto eliminado").await?;
        }
        Err(e) => {
            tracing::error!("failed to delete product: {e}");
            set_flash(&session, "❌ Error al eliminar el producto").await?;
        }
    }
    Ok(Redirect::to("/"))
}

/// Refresh the snapshot after a successful mutation.
///
/// The mutation itself already succeeded, so a refresh failure only
/// delays the echo until the next poll; it never fails the request.
async fn refresh_after_mutation(state: &AppState) {
    if let Err(e) = state.refresh_catalog().await {
        tracing::warn!("catalog refresh after mutation failed: {e}");
    }
}
