use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("migration error: {0}")]
    Migration(#[from] refinery::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error("note not found")]
    NotFound,

    #[error("malformatted id: {0}")]
    MalformedId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::MalformedId(id) => {
                tracing::warn!("rejected malformatted id '{}'", id);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "malformatted id" })),
                )
                    .into_response()
            }
            Self::MalformedBody(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Store(e) => {
                tracing::error!("unhandled store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
