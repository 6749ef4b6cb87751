//! Response DTOs for the word API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Successful response carrying a resource (list of words, redacted sentence)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceResponse<T> {
    /// Always true; failures are rendered as `ErrorResponse`
    pub success: bool,
    pub message: Option<String>,
    pub resource: T,
}

impl<T> ResourceResponse<T> {
    /// Creates a new ResourceResponse
    pub fn new(resource: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            resource,
        }
    }
}

/// Successful response for writes (save, delete)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses (absent or expired)
    pub misses: u64,
    /// Number of entries removed by writes
    pub invalidations: u64,
    /// Number of entries removed because a TTL elapsed
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            invalidations: stats.invalidations,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Messages describing what went wrong
    pub messages: Vec<String>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse, dropping blank messages
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            success: false,
            messages: messages
                .into_iter()
                .filter(|m| !m.trim().is_empty())
                .collect(),
        }
    }
}
