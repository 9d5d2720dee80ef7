use axum::{
    body::{Body, to_bytes},
    extract::Request,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

/// Matches axum's default request body limit.
const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// Logs method, path and body of every request, then hands the request on untouched.
pub async fn request_logger(request: Request, next: Next) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    tracing::info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %String::from_utf8_lossy(&bytes),
        "incoming request"
    );

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
