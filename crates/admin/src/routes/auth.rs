//! Authentication route handlers for admin.
//!
//! One shared panel password; a correct submission flips the gate flag
//! in the session, logout clears it. A wrong password re-renders the
//! login page with a notice and an empty field.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use green_blue_core::gate::{AdminGate, LoginOutcome};

use crate::error::Result;
use crate::models::session::{gate_flag, set_gate_flag};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginPageTemplate {
    pub error: Option<String>,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_page).post(login))
        .route("/auth/logout", post(logout))
}

/// Render the login page.
///
/// GET /auth/login
async fn login_page(session: Session) -> Response {
    if gate_flag(&session).await {
        return Redirect::to("/").into_response();
    }
    LoginPageTemplate { error: None }.into_response()
}

/// Check the submitted password against the configured secret.
///
/// POST /auth/login
#[instrument(skip(state, session, form))]
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let mut gate = AdminGate::from_session(gate_flag(&session).await);

    match gate.submit(&form.password, state.config().admin_password.expose_secret()) {
        LoginOutcome::Unlocked => {
            set_gate_flag(&session, gate.is_unlocked()).await?;
            Ok(Redirect::to("/").into_response())
        }
        LoginOutcome::Rejected => {
            tracing::warn!("rejected panel login attempt");
            // The password field is never echoed back, so the input
            // comes back cleared.
            Ok(LoginPageTemplate {
                error: Some("❌ Contraseña incorrecta".to_string()),
            }
            .into_response())
        }
    }
}

/// Relock the panel and clear the session flag.
///
/// POST /auth/logout
async fn logout(session: Session) -> Result<Redirect> {
    let mut gate = AdminGate::from_session(gate_flag(&session).await);
    gate.logout();
    set_gate_flag(&session, gate.is_unlocked()).await?;

    Ok(Redirect::to("/auth/login"))
}
