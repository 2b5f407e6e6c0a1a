use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emit one `api_request` event per call with latency. Server errors are
/// raised to `warn` so they stand out under the default `info` filter.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "api_request");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "api_request");
    }

    response
}
