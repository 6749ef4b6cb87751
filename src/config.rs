//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Which `WordStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Store implementation to use
    pub store_backend: StoreBackend,
    /// Connection string for the SQLite store
    pub database_url: String,
    /// Cache entries expire if unused for this many seconds
    pub sliding_ttl: u64,
    /// Cache entries expire this many seconds after insertion regardless of use
    pub absolute_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STORE_BACKEND` - `sqlite` or `memory` (default: sqlite)
    /// - `DATABASE_URL` - SQLite connection string (default: sqlite://sensitive_words.db)
    /// - `CACHE_SLIDING_TTL` - Sliding expiration in seconds (default: 30)
    /// - `CACHE_ABSOLUTE_TTL` - Absolute expiration in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            store_backend: parse_var("STORE_BACKEND").unwrap_or(defaults.store_backend),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            sliding_ttl: parse_var("CACHE_SLIDING_TTL").unwrap_or(defaults.sliding_ttl),
            absolute_ttl: parse_var("CACHE_ABSOLUTE_TTL").unwrap_or(defaults.absolute_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            store_backend: StoreBackend::Sqlite,
            database_url: "sqlite://sensitive_words.db".to_string(),
            sliding_ttl: 30,
            absolute_ttl: 300,
            cleanup_interval: 30,
        }
    }
}
