//! Shared word cache handle
//!
//! Process-wide cache of word-list fetches. Created once at startup, cloned
//! into the service and the cleanup task; synchronisation stays internal.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, CacheStore, ExpirationPolicy};
use crate::models::FetchedWords;

/// Thread-safe cache of successful word fetches keyed by `CacheKey`.
///
/// Operations have no error channel. Cloning yields another handle to the
/// same cache.
#[derive(Debug, Clone)]
pub struct WordCache {
    inner: Arc<RwLock<CacheStore<FetchedWords>>>,
}

impl WordCache {
    pub fn new(policy: ExpirationPolicy) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheStore::new(policy))),
        }
    }

    /// Returns the cached value for `key` if present and unexpired.
    pub async fn get(&self, key: &CacheKey) -> Option<FetchedWords> {
        // Write lock: a hit touches the entry and updates stats
        let value = self.inner.write().await.get(&key.to_string());
        debug!(%key, hit = value.is_some(), "Cache lookup");
        value
    }

    /// Inserts or replaces the entry for `key`.
    pub async fn set(&self, key: &CacheKey, value: FetchedWords) {
        self.inner.write().await.set(&key.to_string(), value);
        debug!(%key, "Cache entry stored");
    }

    /// Removes the entry for `key`; absent keys are ignored.
    pub async fn invalidate(&self, key: &CacheKey) {
        let removed = self.inner.write().await.invalidate(&key.to_string());
        debug!(%key, removed, "Cache entry invalidated");
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new(ExpirationPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn fetched(message: &str) -> FetchedWords {
        FetchedWords::new(Vec::new(), message)
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = WordCache::default();
        cache.set(&CacheKey::AllWords, fetched("all")).await;

        assert_eq!(cache.get(&CacheKey::AllWords).await, Some(fetched("all")));
    }

    #[tokio::test]
    async fn test_invalidate_then_get() {
        let cache = WordCache::default();
        let key = CacheKey::Word(Uuid::new_v4());

        cache.set(&key, fetched("one")).await;
        cache.invalidate(&key).await;

        assert_eq!(cache.get(&key).await, None);
        // Second invalidation is a no-op
        cache.invalidate(&key).await;
        assert_eq!(cache.stats().await.invalidations, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = WordCache::default();
        let other = cache.clone();

        cache.set(&CacheKey::AllWords, fetched("shared")).await;
        assert_eq!(other.len().await, 1);
        assert!(!other.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_sets_last_write_wins() {
        let cache = WordCache::default();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    cache
                        .set(&CacheKey::AllWords, fetched(&format!("fetch-{}", i)))
                        .await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let value = cache.get(&CacheKey::AllWords).await.unwrap();
        assert!(value.message.starts_with("fetch-"));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_cache_never_hits() {
        let cache = WordCache::new(ExpirationPolicy::from_secs(0, 0));
        cache.set(&CacheKey::AllWords, fetched("gone")).await;

        assert_eq!(cache.get(&CacheKey::AllWords).await, None);
        assert_eq!(cache.cleanup_expired().await, 0);
        assert!(cache.is_empty().await);
    }
}
