use std::sync::Mutex;

use async_trait::async_trait;

use super::NoteStore;
use crate::{
    error::RepositoryError,
    models::{Note, NoteId},
};

/// Vec-backed store used by handler tests in place of PostgreSQL.
#[derive(Default)]
pub struct MemoryRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    last_id: i64,
}

impl MemoryRepository {
    pub fn seeded(notes: Vec<Note>) -> Self {
        let last_id = notes.iter().map(|n| n.id.0).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner { notes, last_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().notes.len()
    }
}

#[async_trait]
impl NoteStore for MemoryRepository {
    async fn find_all(&self) -> Result<Vec<Note>, RepositoryError> {
        Ok(self.inner.lock().unwrap().notes.clone())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.notes.iter().find(|n| n.id == id).cloned())
    }

    async fn insert(&self, content: String, important: bool) -> Result<Note, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let note = Note {
            id: NoteId(inner.last_id),
            content,
            important,
        };
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn replace(
        &self,
        id: NoteId,
        content: String,
        important: bool,
    ) -> Result<Option<Note>, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.notes.iter_mut().find(|n| n.id == id).map(|note| {
            note.content = content;
            note.important = important;
            note.clone()
        }))
    }

    async fn delete(&self, id: NoteId) -> Result<bool, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.notes.len();
        inner.notes.retain(|n| n.id != id);
        Ok(inner.notes.len() < before)
    }
}
