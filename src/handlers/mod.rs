pub mod rest;

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use std::path::PathBuf;

const DEFAULT_INDEX: &str = "<h1>Hello World</h1>";

/// Serves the bundled front page, or a placeholder when no build is present.
pub async fn root(index: PathBuf) -> Html<String> {
    match tokio::fs::read_to_string(&index).await {
        Ok(page) => Html(page),
        Err(e) => {
            tracing::debug!("no index page at {}: {}", index.display(), e);
            Html(DEFAULT_INDEX.to_string())
        }
    }
}

pub async fn unknown_endpoint() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
        .into_response()
}
