//! Content-type gate for requests that carry a body.

use axum::extract::Request;
use axum::http::{HeaderMap, Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Rejects POST, PUT and PATCH requests whose body is not JSON.
pub async fn require_json(request: Request, next: Next) -> Response {
    let has_body = matches!(*request.method(), Method::POST | Method::PUT | Method::PATCH);
    if has_body && !is_json(request.headers()) {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "rejected non-JSON body");
        return ApiError::BadRequest {
            message: "invalid format".to_string(),
            error: "only json is allowed".to_string(),
        }
        .into_response();
    }

    next.run(request).await
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}
