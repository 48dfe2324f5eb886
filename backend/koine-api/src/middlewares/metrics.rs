use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

/// Collects HTTP latency and request counts
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &path])
        .observe(duration);

    response
}

/// Replaces the caller-chosen segment after `games` or `views` with a
/// placeholder so unknown ids cannot blow up label cardinality.
fn normalize_path(path: &str) -> String {
    let mut normalized = Vec::new();
    let mut placeholder: Option<&str> = None;

    for segment in path.split('/') {
        if let Some(name) = placeholder.take() {
            normalized.push(name);
            continue;
        }
        placeholder = match segment {
            "games" => Some("{game_id}"),
            "views" => Some("{slug}"),
            _ => None,
        };
        normalized.push(segment);
    }

    normalized.join("/")
}
