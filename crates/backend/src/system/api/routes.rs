use std::sync::Arc;

use axum::{routing::get, Router};

use super::handlers;
use super::state::AppState;

/// System routes of the application
pub fn configure_system_routes() -> Router<Arc<AppState>> {
    Router::new()
        // ========================================
        // HEALTH CHECK
        // ========================================
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ATTRIBUTE MAP
        // ========================================
        .route(
            "/api/system/attribute-map",
            get(handlers::attribute_map::get_attribute_map),
        )
}
