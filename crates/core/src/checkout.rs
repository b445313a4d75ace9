//! WhatsApp quote handoff.
//!
//! Checkout is a fire-and-forget handoff: the cart is serialized into a
//! pre-filled WhatsApp message and the visitor is sent to a `wa.me` deep
//! link. There is no order pipeline, no delivery confirmation and no
//! retry.

use crate::cart::Cart;

/// Format a whole-peso amount with es-CO thousands grouping.
///
/// `1000` becomes `"1.000"`, `250000` becomes `"250.000"`.
#[must_use]
pub fn format_cop(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Build the quote message for the cart: header, one bullet per line,
/// then the total.
#[must_use]
pub fn quote_message(cart: &Cart) -> String {
    let mut msg = String::from("🛒 *Hola, deseo cotizar los siguientes productos:*\n\n");
    for line in cart.lines() {
        msg.push_str("• ");
        msg.push_str(&line.product.name);
        msg.push_str(" - $");
        msg.push_str(&format_cop(line.product.price));
        msg.push('\n');
    }
    msg.push_str("\n💰 *Total: $");
    msg.push_str(&format_cop(cart.total()));
    msg.push_str(" COP*");
    msg
}

/// Build the `wa.me` deep link carrying the percent-encoded quote.
#[must_use]
pub fn quote_url(phone: &str, cart: &Cart) -> String {
    format!(
        "https://wa.me/{phone}?text={}",
        urlencoding::encode(&quote_message(cart))
    )
}
