//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, warn};

/// Log each request with its method, path, status, and latency.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_server_error() {
        warn!(%method, %uri, %status, ?duration, "Request failed");
    } else {
        debug!(%method, %uri, %status, ?duration, "Request completed");
    }

    response
}
