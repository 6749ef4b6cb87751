//! Sensitive word records
//!
//! `SensitiveWord` is what the store owns; `WordResource` is the projection
//! handed to callers; `NewWord` is the upsert payload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::SaveWordRequest;

/// Timestamp layout used by `WordResource`, e.g. `03/07/2024 01:05:09 PM`.
pub const RESOURCE_DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

// == Sensitive Word ==
/// A stored word or phrase targeted for redaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitiveWord {
    /// Assigned by the store at creation, never changes
    pub id: Uuid,
    /// The text to redact
    pub word: String,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl SensitiveWord {
    /// Creates a word stamped with the current time.
    pub fn new(id: Uuid, word: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            word: word.into(),
            date_created: now,
            date_updated: now,
        }
    }
}

// == New Word ==
/// Upsert payload: an absent id means "create with a fresh id".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub id: Option<Uuid>,
    pub word: String,
}

impl NewWord {
    /// Builds the payload from a validated request, trimming the text.
    pub fn from_request(req: &SaveWordRequest, id: Option<Uuid>) -> Self {
        Self {
            id,
            word: req.word.trim().to_string(),
        }
    }
}

// == Fetched Words ==
/// A successful fetch from the store together with its message.
///
/// This is the value held by the word cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedWords {
    pub words: Vec<SensitiveWord>,
    pub message: String,
}

impl FetchedWords {
    pub fn new(words: Vec<SensitiveWord>, message: impl Into<String>) -> Self {
        Self {
            words,
            message: message.into(),
        }
    }

    /// Projects every word into its external shape, preserving store order.
    pub fn to_resources(&self) -> Vec<WordResource> {
        self.words.iter().map(WordResource::from).collect()
    }
}

// == Word Resource ==
/// External representation of a sensitive word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordResource {
    pub id: String,
    pub word: String,
    pub date_created: String,
    pub date_updated: String,
}

impl From<&SensitiveWord> for WordResource {
    fn from(word: &SensitiveWord) -> Self {
        Self {
            id: word.id.to_string().trim().to_string(),
            word: word.word.trim().to_string(),
            date_created: word.date_created.format(RESOURCE_DATE_FORMAT).to_string(),
            date_updated: word.date_updated.format(RESOURCE_DATE_FORMAT).to_string(),
        }
    }
}
