use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Note, NoteId};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID, assigned by the store
    #[schema(value_type = String, example = "1")]
    pub id: NoteId,
    /// Note content
    pub content: String,
    /// Importance flag
    pub important: bool,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            important: note.important,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note content, must not be empty
    pub content: Option<String>,
    /// Importance flag, false when omitted
    pub important: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// Replacement content
    pub content: Option<String>,
    /// Replacement importance flag, false when omitted
    pub important: Option<bool>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    pub error: String,
}
