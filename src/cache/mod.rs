//! Cache Module
//!
//! Provides the in-memory word list cache with sliding and absolute expiration.

mod entry;
mod key;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, ExpirationPolicy};
pub use key::CacheKey;
pub use shared::WordCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default sliding expiration in seconds
pub const DEFAULT_SLIDING_TTL: u64 = 30;

/// Default absolute expiration in seconds
pub const DEFAULT_ABSOLUTE_TTL: u64 = 300;
