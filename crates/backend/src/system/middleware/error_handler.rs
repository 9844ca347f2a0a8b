//! JSON error responses for panics and unknown routes

use std::any::Any;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::system::error_response::ErrorResponse;
use uuid::Uuid;

/// Convert a handler panic into a 500 `ErrorResponse`.
///
/// The panic message goes to the log; it is copied into `details` only
/// when `expose_details` is set.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>, expose_details: bool) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    let trace_id = Uuid::new_v4().to_string();
    tracing::error!("Unhandled panic | trace_id: {} | {}", trace_id, message);

    let mut body = ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        "An unexpected error occurred. Please try again later.",
    )
    .with_trace_id(trace_id);
    if expose_details {
        body = body.with_details(message);
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(
            ErrorResponse::new(StatusCode::NOT_FOUND.as_u16(), "Resource not found")
                .with_details(format!("No route for {}", uri.path())),
        ),
    )
}
