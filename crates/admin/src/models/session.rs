//! Session-related helpers for the admin panel.
//!
//! The session holds exactly two things: the gate flag and a one-shot
//! flash notice. There is no server-side account record - logging out
//! (or losing the session) relocks the panel.

use tower_sessions::Session;

/// Session keys for admin data.
pub mod keys {
    /// Key for the gate flag (panel unlocked).
    pub const ADMIN_UNLOCKED: &str = "admin_unlocked";

    /// Key for the one-shot flash notice shown on the next page.
    pub const FLASH: &str = "flash";
}

/// Read the gate flag; an absent flag means locked.
pub async fn gate_flag(session: &Session) -> bool {
    session
        .get::<bool>(keys::ADMIN_UNLOCKED)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Persist the gate flag.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_gate_flag(
    session: &Session,
    unlocked: bool,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::ADMIN_UNLOCKED, unlocked).await
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
