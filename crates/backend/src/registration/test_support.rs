use axum::body::Body;
use axum::extract::{FromRequest, Multipart};
use axum::http::Request;

pub const BOUNDARY: &str = "X-REGISTRATION-BOUNDARY";

pub fn text_part(name: &str, value: &str) -> String {
    format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
}

pub fn file_part(name: &str, file_name: &str, content_type: &str, content: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n{content}\r\n"
    )
}

/// Join parts and close the body with the final boundary.
pub fn body(parts: &[String]) -> String {
    format!("{}--{BOUNDARY}--\r\n", parts.concat())
}

pub async fn multipart_from(body: String) -> Multipart {
    let request = Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}
