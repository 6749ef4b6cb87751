//! Word Service
//!
//! Coordinates the word cache, the word store and the redaction engine.
//! Writes invalidate the affected cache keys before touching the store, so a
//! read that misses during the write window re-fetches instead of reviving
//! stale data.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::{CacheKey, WordCache};
use crate::error::{Result, WordError};
use crate::models::{MessageResponse, NewWord, ResourceResponse, SaveWordRequest, WordResource};
use crate::redaction;
use crate::store::{WordStore, WORD_EXISTS, WORD_NOT_FOUND};

/// Confirmation returned by every redaction request.
pub const REDACTION_MESSAGE: &str = "Successfully transformed the string and removed the sensitive characters where it was deemed applicable.";

/// Orchestrates cache, store and redaction. Cheap to clone.
#[derive(Clone)]
pub struct WordService {
    store: Arc<dyn WordStore>,
    cache: WordCache,
}

impl WordService {
    pub fn new(store: Arc<dyn WordStore>, cache: WordCache) -> Self {
        Self { store, cache }
    }

    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    /// Lists all words, or the single word with `id`.
    ///
    /// A cache hit answers without touching the store. On a miss with an id,
    /// existence is checked first and a missing word short-circuits with
    /// `NotFound`, caching nothing. Only successful fetches are cached.
    pub async fn get_words(&self, id: Option<Uuid>) -> Result<ResourceResponse<Vec<WordResource>>> {
        let key = CacheKey::for_lookup(id);

        let fetched = match self.cache.get(&key).await {
            Some(fetched) => fetched,
            None => {
                if let Some(id) = id {
                    self.ensure_exists(id).await?;
                }
                let fetched = self.store.fetch_all(id).await?;
                self.cache.set(&key, fetched.clone()).await;
                fetched
            }
        };

        Ok(ResourceResponse::new(
            fetched.to_resources(),
            fetched.message,
        ))
    }

    /// Deletes the word with `id` after confirming it exists.
    pub async fn delete_word(&self, id: Uuid) -> Result<MessageResponse> {
        self.invalidate(Some(id)).await;
        self.ensure_exists(id).await?;

        let message = self.store.delete(id).await?;
        info!(%id, "Sensitive word deleted");
        Ok(MessageResponse::new(message))
    }

    /// Creates a word (no id) or updates the existing word with `id`.
    pub async fn save_word(&self, request: &SaveWordRequest, id: Option<Uuid>) -> Result<MessageResponse> {
        self.invalidate(id).await;
        if let Some(id) = id {
            self.ensure_exists(id).await?;
        }

        let message = self.store.upsert(NewWord::from_request(request, id)).await?;
        info!(id = ?id, "Sensitive word saved");
        Ok(MessageResponse::new(message))
    }

    /// Masks every listed word in `sentence`.
    ///
    /// Always succeeds. If the word list cannot be fetched the sentence is
    /// returned trimmed but otherwise untouched.
    pub async fn redact_sentence(&self, sentence: &str) -> ResourceResponse<String> {
        let redacted = match self.get_words(None).await {
            Ok(list) => redaction::redact(sentence, list.resource.iter().map(|w| w.word.as_str())),
            Err(e) => {
                warn!(error = %e, "Word list unavailable, sentence left unredacted");
                sentence.trim().to_string()
            }
        };

        ResourceResponse::new(redacted, REDACTION_MESSAGE)
    }

    /// Drops the per-id entry (if any) and the full list.
    async fn invalidate(&self, id: Option<Uuid>) {
        if let Some(id) = id {
            self.cache.invalidate(&CacheKey::Word(id)).await;
        }
        self.cache.invalidate(&CacheKey::AllWords).await;
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<()> {
        if self.store.exists(id).await? {
            debug!(%id, "{}", WORD_EXISTS);
            Ok(())
        } else {
            Err(WordError::NotFound(WORD_NOT_FOUND.to_string()))
        }
    }
}
