//! Sensitive Words - A word list service with whole-word redaction
//!
//! Stores a list of sensitive words, serves it through a read-through TTL
//! cache and masks those words in arbitrary sentences.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod redaction;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use cache::WordCache;
pub use config::Config;
pub use service::WordService;
pub use tasks::spawn_cleanup_task;
