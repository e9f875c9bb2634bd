//! SQLite storage for the phrasebook
//!
//! Provides CRUD operations for saved phrases using SQLite.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::types::Phrase;

/// Repository for phrase persistence
pub struct PhrasebookRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PhrasebookRepository<'a> {
    /// Create a new repository
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the phrases table
    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS phrases (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                text TEXT NOT NULL,
                src TEXT NOT NULL,
                tgt TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_phrases_created ON phrases(created_at);
            "#,
        )
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Save a phrase
    pub async fn save(&self, phrase: &Phrase) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO phrases (id, title, text, src, tgt, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&phrase.id)
        .bind(&phrase.title)
        .bind(&phrase.text)
        .bind(&phrase.src)
        .bind(&phrase.tgt)
        .bind(phrase.created_at.to_rfc3339())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Get a phrase by ID
    pub async fn get(&self, id: &str) -> Result<Option<Phrase>> {
        let row = sqlx::query_as::<_, PhraseRow>(
            r#"
            SELECT id, title, text, src, tgt, created_at
            FROM phrases
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(|r| r.into_phrase()).transpose()
    }

    /// List all phrases, newest first
    pub async fn list(&self) -> Result<Vec<Phrase>> {
        let rows = sqlx::query_as::<_, PhraseRow>(
            r#"
            SELECT id, title, text, src, tgt, created_at
            FROM phrases
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_phrase()).collect()
    }

    /// Delete a phrase; returns whether anything was removed
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM phrases WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for SQLite queries
#[derive(sqlx::FromRow)]
struct PhraseRow {
    id: String,
    title: String,
    text: String,
    src: String,
    tgt: String,
    created_at: String,
}

impl PhraseRow {
    fn into_phrase(self) -> Result<Phrase> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)?.with_timezone(&Utc);

        Ok(Phrase {
            id: self.id,
            title: self.title,
            text: self.text,
            src: self.src,
            tgt: self.tgt,
            created_at,
        })
    }
}
