//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::models::session::load_cart;
use crate::state::AppState;

// =============================================================================
// Static content (hero, stats, services)
// =============================================================================

/// One entry in the hero stats row.
#[derive(Clone)]
pub struct StatView {
    pub icon: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

/// A service card; either links into a shop category or to WhatsApp.
#[derive(Clone)]
pub struct ServiceCardView {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub link_href: String,
    pub link_label: &'static str,
}

fn stats() -> Vec<StatView> {
    vec![
        StatView {
            icon: "✅",
            number: "500+",
            label: "Proyectos",
        },
        StatView {
            icon: "😊",
            number: "200+",
            label: "Clientes",
        },
        StatView {
            icon: "🏆",
            number: "10+",
            label: "Años",
        },
        StatView {
            icon: "🛠️",
            number: "24/7",
            label: "Soporte",
        },
    ]
}

fn service_cards(whatsapp_phone: &str) -> Vec<ServiceCardView> {
    let shop_link = |category: &str| {
        format!("/tienda?categoria={}", urlencoding::encode(category))
    };
    let contact_link = format!("https://api.whatsapp.com/send?phone={whatsapp_phone}");

    vec![
        ServiceCardView {
            icon: "📹",
            title: "Seguridad Electrónica",
            desc: "Sistemas avanzados de seguridad con tecnología de última generación.",
            link_href: shop_link("Seguridad Electrónica"),
            link_label: "Ver productos →",
        },
        ServiceCardView {
            icon: "🔐",
            title: "Control de Acceso",
            desc: "Soluciones biométricas y RFID para gestión eficiente de accesos.",
            link_href: shop_link("Control de Acceso"),
            link_label: "Ver productos →",
        },
        ServiceCardView {
            icon: "📡",
            title: "CCTV",
            desc: "Monitoreo inteligente 24/7 con cámaras IP de alta definición.",
            link_href: shop_link("CCTV"),
            link_label: "Ver productos →",
        },
        ServiceCardView {
            icon: "📊",
            title: "Gestión de Proyectos",
            desc: "Planificación y optimización técnica de proyectos complejos.",
            link_href: contact_link.clone(),
            link_label: "Contactar →",
        },
        ServiceCardView {
            icon: "🎓",
            title: "Capacitaciones",
            desc: "Formación en liderazgo y sistemas electrónicos avanzados.",
            link_href: contact_link.clone(),
            link_label: "Contactar →",
        },
        ServiceCardView {
            icon: "💼",
            title: "Consultoría",
            desc: "Asesoría técnica para proyectos de innovación tecnológica.",
            link_href: contact_link,
            link_label: "Contactar →",
        },
    ]
}

// =============================================================================
// Template + handler
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub stats: Vec<StatView>,
    pub services: Vec<ServiceCardView>,
    pub whatsapp_phone: String,
    pub cart_count: usize,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    let whatsapp_phone = state.config().whatsapp_phone.clone();

    HomeTemplate {
        stats: stats(),
        services: service_cards(&whatsapp_phone),
        whatsapp_phone,
        cart_count: cart.len(),
    }
}
