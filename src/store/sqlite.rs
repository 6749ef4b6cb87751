//! SQLite word store
//!
//! Durable storage backed by a `sqlx` pool. Words are returned in insertion
//! order; ids and timestamps are stored as text.

use std::fmt::Display;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::{error, info};
use uuid::Uuid;

use super::{WordStore, DELETE_FAILED, DELETE_OK, FETCH_OK, SAVE_FAILED, SAVE_OK};
use crate::error::{Result, WordError};
use crate::models::{FetchedWords, NewWord, SensitiveWord};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS sensitive_words (
        id           TEXT PRIMARY KEY NOT NULL,
        word         TEXT NOT NULL,
        date_created TEXT NOT NULL,
        date_updated TEXT NOT NULL
    )";

const SELECT_WORDS: &str = "
    SELECT id, word, date_created, date_updated
    FROM sensitive_words
    WHERE ?1 IS NULL OR id = ?1
    ORDER BY rowid";

const SELECT_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM sensitive_words WHERE id = ?1)";

const DELETE_WORD: &str = "DELETE FROM sensitive_words WHERE id = ?1";

const UPSERT_WORD: &str = "
    INSERT INTO sensitive_words (id, word, date_created, date_updated)
    VALUES (?1, ?2, ?3, ?3)
    ON CONFLICT(id) DO UPDATE SET
        word = excluded.word,
        date_updated = excluded.date_updated";

#[derive(Debug, Clone)]
pub struct SqliteWordStore {
    pool: SqlitePool,
}

impl SqliteWordStore {
    /// Opens (creating if needed) the database at `url` and ensures the schema.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(store_error("connect"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(store_error("connect"))?;

        info!(url, "Connected to SQLite word store");
        Self::from_pool(pool).await
    }

    /// Private in-memory database on a single pinned connection.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(store_error("connect"))?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the table if it is missing.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(store_error("migrate"))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl WordStore for SqliteWordStore {
    async fn fetch_all(&self, id: Option<Uuid>) -> Result<FetchedWords> {
        let rows = sqlx::query(SELECT_WORDS)
            .bind(id.map(|id| id.to_string()))
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("fetch_all"))?;

        let words = rows
            .iter()
            .map(word_from_row)
            .collect::<Result<Vec<_>>>()?;
        Ok(FetchedWords::new(words, FETCH_OK))
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let found: i64 = sqlx::query_scalar(SELECT_EXISTS)
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("exists"))?;
        Ok(found != 0)
    }

    async fn delete(&self, id: Uuid) -> Result<String> {
        let result = sqlx::query(DELETE_WORD)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(store_error("delete"))?;

        if result.rows_affected() > 0 {
            Ok(DELETE_OK.to_string())
        } else {
            Err(WordError::Store(DELETE_FAILED.to_string()))
        }
    }

    async fn upsert(&self, word: NewWord) -> Result<String> {
        let id = word.id.unwrap_or_else(Uuid::new_v4);
        let result = sqlx::query(UPSERT_WORD)
            .bind(id.to_string())
            .bind(word.word)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(store_error("upsert"))?;

        if result.rows_affected() > 0 {
            Ok(SAVE_OK.to_string())
        } else {
            Err(WordError::Store(SAVE_FAILED.to_string()))
        }
    }
}

fn word_from_row(row: &SqliteRow) -> Result<SensitiveWord> {
    let id: String = row.try_get("id").map_err(store_error("decode"))?;
    let word: String = row.try_get("word").map_err(store_error("decode"))?;
    let created: String = row.try_get("date_created").map_err(store_error("decode"))?;
    let updated: String = row.try_get("date_updated").map_err(store_error("decode"))?;

    Ok(SensitiveWord {
        id: Uuid::parse_str(id.trim()).map_err(store_error("decode"))?,
        word,
        date_created: parse_timestamp(&created)?,
        date_updated: parse_timestamp(&updated)?,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(store_error("decode"))
}

/// Logs a driver failure and turns it into the relayed store error.
fn store_error<E: Display>(operation: &'static str) -> impl Fn(E) -> WordError {
    move |e| {
        error!(operation, error = %e, "Word store call failed");
        WordError::Store(format!("Error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteWordStore {
        SqliteWordStore::in_memory().await.unwrap()
    }

    fn new_word(id: Option<Uuid>, word: &str) -> NewWord {
        NewWord {
            id,
            word: word.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_in_order() {
        let store = store().await;
        for word in ["select", "drop", "insert"] {
            assert_eq!(store.upsert(new_word(None, word)).await.unwrap(), SAVE_OK);
        }

        let fetched = store.fetch_all(None).await.unwrap();
        let words: Vec<_> = fetched.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["select", "drop", "insert"]);
        assert_eq!(fetched.message, FETCH_OK);
    }

    #[tokio::test]
    async fn test_fetch_by_id_and_exists() {
        let store = store().await;
        let id = Uuid::new_v4();
        store.upsert(new_word(Some(id), "grant")).await.unwrap();
        store.upsert(new_word(None, "revoke")).await.unwrap();

        let fetched = store.fetch_all(Some(id)).await.unwrap();
        assert_eq!(fetched.words.len(), 1);
        assert_eq!(fetched.words[0].id, id);

        assert!(store.exists(id).await.unwrap());
        assert!(!store.exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_keeps_position_and_created_date() {
        let store = store().await;
        let id = Uuid::new_v4();
        store.upsert(new_word(Some(id), "alter")).await.unwrap();
        store.upsert(new_word(None, "drop")).await.unwrap();
        let before = store.fetch_all(Some(id)).await.unwrap().words[0].clone();

        store.upsert(new_word(Some(id), "truncate")).await.unwrap();

        let words = store.fetch_all(None).await.unwrap().words;
        assert_eq!(words[0].id, id);
        assert_eq!(words[0].word, "truncate");
        assert_eq!(words[0].date_created, before.date_created);
        assert!(words[0].date_updated >= before.date_updated);
    }

    #[tokio::test]
    async fn test_delete_reports_zero_rows() {
        let store = store().await;
        let id = Uuid::new_v4();
        store.upsert(new_word(Some(id), "exec")).await.unwrap();

        assert_eq!(store.delete(id).await.unwrap(), DELETE_OK);
        assert_eq!(
            store.delete(id).await,
            Err(WordError::Store(DELETE_FAILED.to_string()))
        );
        assert!(store.fetch_all(None).await.unwrap().words.is_empty());
    }

    #[tokio::test]
    async fn test_closed_pool_is_a_store_failure() {
        let store = store().await;
        store.pool.close().await;

        match store.fetch_all(None).await {
            Err(WordError::Store(msg)) => assert!(msg.starts_with("Error: ")),
            other => panic!("expected store failure, got {:?}", other),
        }
    }
}
