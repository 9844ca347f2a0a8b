use std::sync::Arc;

use axum::http::Method;
use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::system;
use crate::system::api::state::AppState;
use crate::system::middleware::error_handler::{handle_panic, not_found};
use crate::system::middleware::request_logger::request_logger;

/// Configure all application routes
pub fn configure_routes(state: AppState) -> Router {
    let expose_details = state.expose_error_details;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .merge(system::api::routes::configure_system_routes())
        .fallback(not_found)
        .with_state(Arc::new(state))
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn std::any::Any + Send + 'static>| handle_panic(err, expose_details),
        ))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
