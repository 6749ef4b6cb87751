//! Domain records and the DTOs used on the HTTP surface
//!
//! `word` holds the stored record and its external projection; `requests`
//! and `responses` define the serialized request/response bodies.

pub mod requests;
pub mod responses;
pub mod word;

// Re-export commonly used types
pub use requests::{parse_word_id, ListQuery, RedactQuery, SaveWordRequest, MAX_WORD_LENGTH};
pub use responses::{
    ErrorResponse, HealthResponse, MessageResponse, ResourceResponse, StatsResponse,
};
pub use word::{FetchedWords, NewWord, SensitiveWord, WordResource};
