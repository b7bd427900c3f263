use axum::body::Body;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Форматирование чисел с разделителями триад
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Response size as announced by `Content-Length`, `-` for streamed bodies.
pub fn response_size(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(format_number)
        .unwrap_or_else(|| "-".to_string())
}

/// One log line per request; the response body passes through untouched.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    let line = format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        start.elapsed().as_millis(),
        response_size(response.headers()),
        response.status().as_u16(),
        method,
        path
    );
    if response.status().is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    response
}
