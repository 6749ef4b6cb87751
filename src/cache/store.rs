//! Cache Store Module
//!
//! Cache engine combining HashMap storage with sliding/absolute TTL expiration.
//! Not synchronised; `WordCache` wraps it for shared use.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats, ExpirationPolicy};

// == Cache Store ==
/// Main cache storage keyed by rendered cache key.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Lifetime limits applied to each new entry
    policy: ExpirationPolicy,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore applying `policy` to every entry.
    pub fn new(policy: ExpirationPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ExpirationPolicy {
        self.policy
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, starting both timers at `now`.
    pub fn set_at(&mut self, key: &str, value: V, now: u64) {
        let entry = CacheEntry::new_at(value, self.policy, now);
        self.entries.insert(key.to_string(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    /// Inserts or replaces the entry for `key` using the wall clock.
    pub fn set(&mut self, key: &str, value: V) {
        self.set_at(key, value, current_timestamp_ms());
    }

    // == Get ==
    /// Retrieves a value by key at `now`.
    ///
    /// A hit restarts the entry's sliding timer. Expired entries are removed
    /// and counted as misses.
    pub fn get_at(&mut self, key: &str, now: u64) -> Option<V> {
        let expired = match self.entries.get_mut(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                entry.touch_at(now);
                let value = entry.value.clone();
                self.stats.record_hit();
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
            debug!(key, "Cache entry expired");
        }
        self.stats.record_miss();
        None
    }

    /// Retrieves a value by key using the wall clock.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, current_timestamp_ms())
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Returns whether an entry was present;
    /// removing an absent key is a no-op.
    pub fn invalidate(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.stats.record_invalidation();
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all entries expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired_at(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Removes all entries expired according to the wall clock.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(current_timestamp_ms())
    }

    // == Length ==
    /// Returns the number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
