//! Axum router construction.
//!
//! Assembles the HTML pages, the nested admin section and the JSON API into
//! a single [`Router`] with CORS and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::pages;
use crate::state::AppState;

/// Build the complete router.
///
/// Pages:
/// - `GET /`, `GET /home` -- landing page
/// - `GET /history`, `POST /history/ask` -- history page and ask form
/// - `GET /map` -- event map
/// - `GET /login`, `GET /register` -- placeholders
/// - `GET /dashboard`, `GET /admin` -- redirect to `/admin/dashboard`
/// - `GET /admin/dashboard` -- dashboard in the admin layout
///
/// API:
/// - `GET /api/events`, `GET /api/events/{id}`
/// - `GET /api/history`, `GET /api/map/overlays`
/// - `POST /api/chat`, `GET /api/health`
///
/// Anything else renders the not-found page with status 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin = Router::new()
        .route("/", get(pages::to_dashboard))
        .route("/dashboard", get(pages::dashboard));

    let api = Router::new()
        .route("/events", get(handlers::list_events))
        .route("/events/{id}", get(handlers::get_event))
        .route("/history", get(handlers::get_history))
        .route("/map/overlays", get(handlers::list_overlays))
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health));

    Router::new()
        // Main layout
        .route("/", get(pages::home))
        .route("/home", get(pages::home))
        .route("/history", get(pages::history))
        .route("/history/ask", post(pages::ask))
        .route("/map", get(pages::map))
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        // Admin layout
        .route("/dashboard", get(pages::to_dashboard))
        .nest("/admin", admin)
        // JSON API
        .nest("/api", api)
        .fallback(pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
