mod embedded;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use embedded::migrations;

use tokio_postgres::{Client, NoTls, Row};

use crate::{
    error::RepositoryError,
    models::{Note, NoteId},
};

/// Document-style storage for notes. The store owns id assignment and ordering.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Note>, RepositoryError>;

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, RepositoryError>;

    async fn insert(&self, content: String, important: bool) -> Result<Note, RepositoryError>;

    /// Replaces both fields of an existing note. `None` if the id is unknown.
    async fn replace(
        &self,
        id: NoteId,
        content: String,
        important: bool,
    ) -> Result<Option<Note>, RepositoryError>;

    /// Returns whether a note was actually removed.
    async fn delete(&self, id: NoteId) -> Result<bool, RepositoryError>;
}

pub struct Repository {
    client: Client,
}

impl Repository {
    pub async fn new(database_url: &str) -> Result<Self, RepositoryError> {
        let (client, con) = tokio_postgres::connect(database_url, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), RepositoryError> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: NoteId(row.get("id")),
        content: row.get("content"),
        important: row.get("important"),
    }
}

#[async_trait]
impl NoteStore for Repository {
    async fn find_all(&self) -> Result<Vec<Note>, RepositoryError> {
        let rows = self
            .client
            .query("SELECT id, content, important FROM notes ORDER BY id", &[])
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, RepositoryError> {
        let row = self
            .client
            .query_opt(
                "SELECT id, content, important FROM notes WHERE id = $1",
                &[&id.0],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn insert(&self, content: String, important: bool) -> Result<Note, RepositoryError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notes (content, important) VALUES ($1, $2) RETURNING id, content, important",
                &[&content, &important],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn replace(
        &self,
        id: NoteId,
        content: String,
        important: bool,
    ) -> Result<Option<Note>, RepositoryError> {
        let row = self
            .client
            .query_opt(
                "UPDATE notes SET content = $1, important = $2 WHERE id = $3 RETURNING id, content, important",
                &[&content, &important, &id.0],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn delete(&self, id: NoteId) -> Result<bool, RepositoryError> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id.0])
            .await?;

        Ok(rows == 1)
    }
}
