use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// HTTP request logging middleware
///
/// Logs:
/// - Method and path
/// - Status code and its reason
/// - Duration (ms)
/// - Response size (formatted)
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let reason = parts.status.canonical_reason().unwrap_or("Unknown");

    // Read the body to get the real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} | {} ({}) | {}ms | body error: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                reason,
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = bytes.len();
    let duration = start.elapsed();

    if parts.status.is_server_error() {
        tracing::error!(
            "{} {} | {} ({}) | {}ms | {}",
            method,
            uri.path(),
            parts.status.as_u16(),
            reason,
            duration.as_millis(),
            format_size(size)
        );
    } else {
        tracing::info!(
            "{} {} | {} ({}) | {}ms | {}",
            method,
            uri.path(),
            parts.status.as_u16(),
            reason,
            duration.as_millis(),
            format_size(size)
        );
    }

    // Rebuild the response with the buffered body
    Response::from_parts(parts, Body::from(bytes))
}
