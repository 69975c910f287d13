//! curtail — a shortcode redirect service.
//!
//! Trusted clients register `key → url` mappings over a small JSON API;
//! anyone may dereference a key and be redirected to its URL. Every route
//! except the redirect itself is restricted to a configured IP allow-list.

pub mod config;
pub mod db;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod shortcode;

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: AppConfig,
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// Route registration doubles as the access policy: everything in the
/// protected group sits behind the allow-list guard, and the redirect route
/// — GET on a single path segment — is the one public route.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route(
            "/",
            post(handlers::links::create_link).get(handlers::links::list_links),
        )
        .route("/:key", delete(handlers::links::delete_link))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_trusted,
        ));

    Router::new()
        .route("/:key", get(handlers::redirect::redirect))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
