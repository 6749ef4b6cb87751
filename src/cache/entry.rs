//! Cache Entry Module
//!
//! Defines individual cache entries and the sliding/absolute expiration rule.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::{DEFAULT_ABSOLUTE_TTL, DEFAULT_SLIDING_TTL};

// == Expiration Policy ==
/// Lifetime limits applied to every entry of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    /// Entry expires if unused for this long
    pub sliding: Duration,
    /// Entry expires this long after insertion, whatever its use
    pub absolute: Duration,
}

impl ExpirationPolicy {
    pub fn new(sliding: Duration, absolute: Duration) -> Self {
        Self { sliding, absolute }
    }

    /// Builds a policy from second counts as found in `Config`.
    pub fn from_secs(sliding_secs: u64, absolute_secs: u64) -> Self {
        Self::new(
            Duration::from_secs(sliding_secs),
            Duration::from_secs(absolute_secs),
        )
    }
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self::from_secs(DEFAULT_SLIDING_TTL, DEFAULT_ABSOLUTE_TTL)
    }
}

// == Cache Entry ==
/// Represents a single cache entry with value and timing metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Last successful read, or insertion (Unix milliseconds)
    pub last_accessed: u64,
    /// Hard deadline: `inserted_at + absolute` (Unix milliseconds)
    pub absolute_deadline: u64,
    sliding_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry inserted at `now`, starting both timers.
    pub fn new_at(value: V, policy: ExpirationPolicy, now: u64) -> Self {
        Self {
            value,
            inserted_at: now,
            last_accessed: now,
            absolute_deadline: now.saturating_add(duration_ms(policy.absolute)),
            sliding_ms: duration_ms(policy.sliding),
        }
    }

    // == Expires At ==
    /// Returns the instant (Unix milliseconds) at which this entry expires,
    /// whichever of the two deadlines comes first.
    pub fn expires_at(&self) -> u64 {
        self.last_accessed
            .saturating_add(self.sliding_ms)
            .min(self.absolute_deadline)
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired once `now` reaches its expiration time, so an entry
    /// is never served at or past either deadline.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_at()
    }

    /// Checks expiry against the wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Touch ==
    /// Restarts the sliding timer. The absolute deadline is unaffected.
    pub fn touch_at(&mut self, now: u64) {
        self.last_accessed = now.max(self.last_accessed);
    }

    /// Remaining lifetime in milliseconds at `now`, 0 once expired.
    pub fn ttl_remaining_ms_at(&self, now: u64) -> u64 {
        self.expires_at().saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as 0, which only makes entries look
/// fresher than they are until the clock recovers.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
