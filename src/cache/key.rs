//! Cache keys for the word list.

use std::fmt;

use uuid::Uuid;

const ALL_WORDS_KEY: &str = "word:all";

/// Identifies a cached fetch: the whole list, or a single word by id.
///
/// Rendered keys never collide: `word:all` is not a valid UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    AllWords,
    Word(Uuid),
}

impl CacheKey {
    /// Key for a `GetWords` lookup with an optional id filter.
    pub fn for_lookup(id: Option<Uuid>) -> Self {
        match id {
            Some(id) => CacheKey::Word(id),
            None => CacheKey::AllWords,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::AllWords => f.write_str(ALL_WORDS_KEY),
            CacheKey::Word(id) => write!(f, "word:{}", id),
        }
    }
}
