//! In-memory word store
//!
//! Keeps words in insertion order. Used for `STORE_BACKEND=memory` and as
//! the backing store in tests; call counters make store traffic observable.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{WordStore, DELETE_FAILED, DELETE_OK, FETCH_OK, SAVE_OK};
use crate::error::{Result, WordError};
use crate::models::{FetchedWords, NewWord, SensitiveWord};

#[derive(Debug, Default)]
pub struct InMemoryWordStore {
    words: RwLock<Vec<SensitiveWord>>,
    fetch_calls: AtomicUsize,
    exists_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    upsert_calls: AtomicUsize,
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `words`, in order.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|w| SensitiveWord::new(Uuid::new_v4(), w))
            .collect();
        Self {
            words: RwLock::new(words),
            ..Self::default()
        }
    }

    /// Snapshot of the stored words.
    pub async fn words(&self) -> Vec<SensitiveWord> {
        self.words.read().await.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordStore for InMemoryWordStore {
    async fn fetch_all(&self, id: Option<Uuid>) -> Result<FetchedWords> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let words = self
            .words
            .read()
            .await
            .iter()
            .filter(|w| id.map_or(true, |id| w.id == id))
            .cloned()
            .collect();
        Ok(FetchedWords::new(words, FETCH_OK))
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.words.read().await.iter().any(|w| w.id == id))
    }

    async fn delete(&self, id: Uuid) -> Result<String> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut words = self.words.write().await;
        let before = words.len();
        words.retain(|w| w.id != id);

        if words.len() < before {
            Ok(DELETE_OK.to_string())
        } else {
            Err(WordError::Store(DELETE_FAILED.to_string()))
        }
    }

    async fn upsert(&self, word: NewWord) -> Result<String> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        let mut words = self.words.write().await;

        let id = word.id.unwrap_or_else(Uuid::new_v4);
        match words.iter_mut().find(|w| w.id == id) {
            Some(existing) => {
                existing.word = word.word;
                existing.date_updated = Utc::now();
            }
            None => words.push(SensitiveWord::new(id, word.word)),
        }
        Ok(SAVE_OK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_preserves_order() {
        let store = InMemoryWordStore::with_words(["drop", "alter", "drop"]);

        let fetched = store.fetch_all(None).await.unwrap();
        let words: Vec<_> = fetched.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["drop", "alter", "drop"]);
        assert_eq!(fetched.message, FETCH_OK);
        assert_eq!(store.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let store = InMemoryWordStore::with_words(["drop", "alter"]);
        let id = store.words().await[1].id;

        let fetched = store.fetch_all(Some(id)).await.unwrap();
        assert_eq!(fetched.words.len(), 1);
        assert_eq!(fetched.words[0].word, "alter");
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates() {
        let store = InMemoryWordStore::new();

        let msg = store
            .upsert(NewWord {
                id: None,
                word: "grant".into(),
            })
            .await
            .unwrap();
        assert_eq!(msg, SAVE_OK);

        let id = store.words().await[0].id;
        store
            .upsert(NewWord {
                id: Some(id),
                word: "revoke".into(),
            })
            .await
            .unwrap();

        let words = store.words().await;
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].id, id);
        assert_eq!(words[0].word, "revoke");
        assert!(words[0].date_updated >= words[0].date_created);
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let store = InMemoryWordStore::with_words(["truncate"]);
        let id = store.words().await[0].id;

        assert!(store.exists(id).await.unwrap());
        assert_eq!(store.delete(id).await.unwrap(), DELETE_OK);
        assert!(!store.exists(id).await.unwrap());
        assert_eq!(
            store.delete(id).await,
            Err(WordError::Store(DELETE_FAILED.to_string()))
        );
        assert_eq!(store.delete_calls(), 2);
        assert_eq!(store.exists_calls(), 2);
    }
}
