mod extract;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, ErrorResponse, NoteResponse, UpdateNoteRequest},
    error::ApiError,
    service::NoteService,
};

pub use extract::{JsonBody, NoteIdPath};

#[derive(OpenApi)]
#[openapi(
    paths(
        create_note,
        update_note,
        delete_note,
        get_one_note,
        get_all_notes
    ),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        ErrorResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Content missing or body malformed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    JsonBody(payload): JsonBody<CreateNoteRequest>,
) -> Result<Response, ApiError> {
    let note = service.create_note(payload).await?;
    tracing::info!("created note {}", note.id);
    Ok((StatusCode::CREATED, Json(note)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "Malformatted id or content missing", body = ErrorResponse),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    NoteIdPath(id): NoteIdPath,
    JsonBody(payload): JsonBody<UpdateNoteRequest>,
) -> Result<Response, ApiError> {
    let note = service.update_note(id, payload).await?;
    Ok((StatusCode::OK, Json(note)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted, or never existed"),
        (status = 400, description = "Malformatted id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    NoteIdPath(id): NoteIdPath,
) -> Result<Response, ApiError> {
    service.delete_note(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "Malformatted id", body = ErrorResponse),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    NoteIdPath(id): NoteIdPath,
) -> Result<Response, ApiError> {
    let note = service.get_one_note(id).await?;
    Ok((StatusCode::OK, Json(note)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Result<Response, ApiError> {
    let notes = service.get_all_notes().await?;
    Ok((StatusCode::OK, Json(notes)).into_response())
}
