//! Cart route handlers.
//!
//! The cart lives in the visitor's session as a plain value; every
//! mutation loads it, applies one operation from the core state machine
//! and writes it back. Checkout is a redirect to the WhatsApp deep link
//! built from the cart contents.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use green_blue_core::cart::{CartError, CartLineId};
use green_blue_core::checkout::{format_cop, quote_url};

use crate::error::Result;
use crate::filters;
use crate::models::session::{load_cart, save_cart, set_flash, take_flash};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub line_id: u64,
    pub name: String,
    pub price: String,
    pub image: String,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: u64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartShowTemplate {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub flash: Option<String>,
    pub cart_count: usize,
}

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    let lines: Vec<CartLineView> = cart
        .lines()
        .iter()
        .map(|line| CartLineView {
            line_id: line.line_id.as_u64(),
            name: line.product.name.clone(),
            price: format!("${}", format_cop(line.product.price)),
            image: line.product.image.clone(),
        })
        .collect();

    CartShowTemplate {
        lines,
        total: format!("${}", format_cop(cart.total())),
        flash: take_flash(&session).await,
        cart_count: cart.len(),
    }
}

/// Add a product to the cart.
///
/// The product snapshot is taken from the current catalog; an id that no
/// longer exists (edited away between render and click) just bounces
/// back to the shop with a notice.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let snapshot = state.catalog().snapshot();
    let Some(product) = snapshot.iter().find(|p| p.id.as_str() == form.product_id) else {
        set_flash(&session, "El producto ya no está disponible").await?;
        return Ok(Redirect::to("/tienda").into_response());
    };

    let mut cart = load_cart(&session).await;
    match cart.add(product.clone()) {
        Ok(_) => {
            save_cart(&session, &cart).await?;
            Ok(Redirect::to("/carrito").into_response())
        }
        Err(CartError::OutOfStock(_)) => {
            set_flash(&session, "⚠️ Este producto está agotado").await?;
            Ok(Redirect::to("/tienda").into_response())
        }
    }
}

/// Remove one line from the cart. Unknown line ids are a no-op.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    let mut cart = load_cart(&session).await;
    cart.remove(CartLineId::new(form.line_id));
    save_cart(&session, &cart).await?;
    Ok(Redirect::to("/carrito"))
}

/// Redirect to the WhatsApp quote deep link.
///
/// Fire-and-forget handoff: no delivery confirmation, no retry. An empty
/// cart just returns to the cart page.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Redirect {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/carrito");
    }

    let url = quote_url(&state.config().whatsapp_phone, &cart);
    Redirect::to(&url)
}
