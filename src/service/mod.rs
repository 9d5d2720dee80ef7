use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    error::ApiError,
    models::NoteId,
    repository::NoteStore,
};

use std::sync::Arc;

const CONTENT_MISSING: &str = "content missing";

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteStore>) -> Self {
        Self { repo }
    }

    pub async fn create_note(&self, request: CreateNoteRequest) -> Result<NoteResponse, ApiError> {
        let content = match request.content {
            Some(content) if !content.is_empty() => content,
            _ => return Err(ApiError::Validation(CONTENT_MISSING)),
        };

        let note = self
            .repo
            .insert(content, request.important.unwrap_or(false))
            .await?;

        Ok(note.into())
    }

    /// Full replacement of `content` and `important`; the last writer wins.
    pub async fn update_note(
        &self,
        id: NoteId,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, ApiError> {
        let content = request
            .content
            .ok_or(ApiError::Validation(CONTENT_MISSING))?;

        self.repo
            .replace(id, content, request.important.unwrap_or(false))
            .await?
            .map(Into::into)
            .ok_or(ApiError::NotFound)
    }

    pub async fn delete_note(&self, id: NoteId) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            tracing::debug!("delete of unknown note {}", id);
        }
        Ok(())
    }

    pub async fn get_one_note(&self, id: NoteId) -> Result<NoteResponse, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or(ApiError::NotFound)
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, ApiError> {
        let notes = self.repo.find_all().await?;
        Ok(notes.into_iter().map(Into::into).collect())
    }
}
