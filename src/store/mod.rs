//! Word Store Module
//!
//! Persistent CRUD for sensitive words behind the `WordStore` trait, with an
//! in-memory and a SQLite implementation.

mod memory;
mod sqlite;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{FetchedWords, NewWord};

pub use memory::InMemoryWordStore;
pub use sqlite::SqliteWordStore;

// == Store Messages ==
// Relayed to callers verbatim.
pub const FETCH_OK: &str = "Sql words successfully retrieved.";
pub const WORD_EXISTS: &str = "Sql word does exist.";
pub const WORD_NOT_FOUND: &str = "Sql word does not exist in the system.";
pub const DELETE_OK: &str = "Sql word deleted successfully.";
pub const DELETE_FAILED: &str = "Failed to delete sql word.";
pub const SAVE_OK: &str = "Sql word saved successfully.";
pub const SAVE_FAILED: &str = "Failed to save sql word.";

/// Persistent storage for sensitive words.
///
/// Failures are `WordError::Store` carrying the caller-facing message;
/// implementations never retry.
#[async_trait]
pub trait WordStore: Send + Sync + 'static {
    /// Fetches every word, or only the word with `id`, in store order.
    async fn fetch_all(&self, id: Option<Uuid>) -> Result<FetchedWords>;

    /// Reports whether a word with `id` exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;

    /// Deletes the word with `id`, returning the success message.
    /// Deleting zero rows is a failure.
    async fn delete(&self, id: Uuid) -> Result<String>;

    /// Updates the word when `word.id` is set, otherwise creates one with a
    /// fresh id. Returns the success message.
    async fn upsert(&self, word: NewWord) -> Result<String>;
}
