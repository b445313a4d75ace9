//! Shop (tienda) route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use green_blue_core::checkout::format_cop;
use green_blue_core::filter::{CategoryFilter, visible};
use green_blue_core::{Category, Product};

use crate::filters;
use crate::models::session::{load_cart, take_flash};
use crate::state::AppState;

/// Shop query parameters.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    pub categoria: Option<String>,
    pub q: Option<String>,
}

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub image: String,
    pub description: Option<String>,
    pub availability: String,
    pub availability_class: &'static str,
    pub purchasable: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        let (availability, availability_class) = match product.stock {
            Some(0) => ("⚠️ Producto agotado".to_string(), "agotado"),
            Some(units) => (format!("✓ Disponible: {units} unidades"), "disponible"),
            None => ("Stock no disponible".to_string(), "desconocido"),
        };

        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.label(),
            price: format!("${}", format_cop(product.price)),
            image: product.image.clone(),
            description: product.description.clone(),
            availability,
            availability_class,
            purchasable: product.is_purchasable(),
        }
    }
}

/// One category filter button.
#[derive(Clone)]
pub struct FilterLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

fn filter_links(current: CategoryFilter, query: &str) -> Vec<FilterLink> {
    let mut filters = vec![CategoryFilter::Todos];
    filters.extend(Category::ALL.map(CategoryFilter::Solo));

    filters
        .into_iter()
        .map(|filter| {
            let mut href = format!("/tienda?categoria={}", urlencoding::encode(filter.label()));
            if !query.is_empty() {
                href.push_str("&q=");
                href.push_str(&urlencoding::encode(query));
            }
            FilterLink {
                label: filter.label(),
                href,
                active: filter == current,
            }
        })
        .collect()
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub products: Vec<ProductCardView>,
    pub filter_links: Vec<FilterLink>,
    pub query: String,
    pub flash: Option<String>,
    pub cart_count: usize,
}

/// Display the shop page with the current filter and search applied.
///
/// Result order always equals catalog order; an empty result renders the
/// explicit "no products found" state rather than an error.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ShopQuery>,
) -> impl IntoResponse {
    let filter = CategoryFilter::parse(params.categoria.as_deref().unwrap_or("Todos"));
    let query = params.q.unwrap_or_default();

    let snapshot = state.catalog().snapshot();
    let products: Vec<ProductCardView> = visible(&snapshot, filter, &query)
        .iter()
        .map(ProductCardView::from)
        .collect();

    let cart = load_cart(&session).await;

    ShopTemplate {
        products,
        filter_links: filter_links(filter, &query),
        query,
        flash: take_flash(&session).await,
        cart_count: cart.len(),
    }
}
