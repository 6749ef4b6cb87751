//! Request DTOs for the word API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use uuid::Uuid;

use crate::error::WordError;

/// Maximum number of characters a sensitive word may have
pub const MAX_WORD_LENGTH: usize = 50;

/// Request body for creating or updating a word (POST /api/words, PUT /api/words/:id)
#[derive(Debug, Clone, Deserialize)]
pub struct SaveWordRequest {
    /// The word or phrase to store
    #[serde(default)]
    pub word: String,
}

impl SaveWordRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let word = self.word.trim();
        if word.is_empty() {
            return Some("The word field is required.".to_string());
        }
        if word.chars().count() > MAX_WORD_LENGTH {
            return Some(format!(
                "The word field must not exceed {} characters.",
                MAX_WORD_LENGTH
            ));
        }
        None
    }
}

/// Query string for GET /api/words
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// Query string for GET /api/words/redact
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedactQuery {
    #[serde(default)]
    pub sentence: Option<String>,
}

impl RedactQuery {
    /// Returns the sentence, or a validation error when it was not supplied.
    pub fn into_sentence(self) -> Result<String, WordError> {
        self.sentence
            .ok_or_else(|| WordError::invalid("The sentence field is required."))
    }
}

/// Parses a caller-supplied word id.
pub fn parse_word_id(raw: &str) -> Result<Uuid, WordError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| WordError::invalid(format!("The value '{}' is not a valid word id.", raw)))
}
