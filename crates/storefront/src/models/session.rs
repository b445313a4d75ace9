//! Session-related types and helpers.
//!
//! The visitor's cart and one-shot flash notices live in the session;
//! nothing here is ever persisted remotely. A page reload keeps the
//! cart, a new session starts empty.

use tower_sessions::Session;

use green_blue_core::cart::Cart;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the one-shot flash notice shown on the next page.
    pub const FLASH: &str = "flash";
}

/// Load the cart from the session, defaulting to an empty one.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart back into the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Queue a one-shot notice for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_flash(
    session: &Session,
    message: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::FLASH, message).await
}

/// Take the pending notice, clearing it from the session.
pub async fn take_flash(session: &Session) -> Option<String> {
    session
        .remove::<String>(keys::FLASH)
        .await
        .ok()
        .flatten()
}
