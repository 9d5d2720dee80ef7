use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use axum_macros::FromRequest;

use crate::{error::ApiError, models::NoteId};

/// Note id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct NoteIdPath(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::MalformedId(e.body_text()))?;

        raw.parse().map(Self)
    }
}

/// `axum::Json` with rejections routed through `ApiError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
