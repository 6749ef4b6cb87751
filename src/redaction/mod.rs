//! Redaction Engine
//!
//! Masks sensitive words in a sentence. A word is redacted only when it
//! occurs at least once as a whole word (case-insensitive, bounded by the
//! string edges or non-word characters). Once that holds, every
//! case-insensitive occurrence of it is masked, including occurrences
//! embedded in longer tokens.
//!
//! Words are applied in the order given, each against the output of the
//! previous one, so overlapping words resolve by list order.


use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Character used to mask a redacted word
pub const MASK_CHAR: char = '*';

/// Redacts `words` from `sentence`, returning the trimmed result.
///
/// Empty words are skipped. Never fails.
pub fn redact<I, S>(sentence: &str, words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut redacted = sentence.to_string();

    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            continue;
        }

        let Some((whole_word, occurrence)) = compile(word) else {
            continue;
        };

        if whole_word.is_match(&redacted) {
            redacted = occurrence
                .replace_all(&redacted, |caps: &regex::Captures<'_>| mask(&caps[0]))
                .into_owned();
        }
    }

    redacted.trim().to_string()
}

/// Returns a run of `MASK_CHAR` as long as `matched`, in characters.
fn mask(matched: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(matched.chars().count())
        .collect()
}

/// Builds the whole-word gate and the unanchored occurrence matcher for `word`.
fn compile(word: &str) -> Option<(Regex, Regex)> {
    let escaped = regex::escape(word);
    let build = |pattern: &str| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| warn!(word, error = %e, "Skipping word that cannot be matched"))
            .ok()
    };

    let whole_word = build(&format!(r"(?:^|[^\w]){}(?:[^\w]|$)", escaped))?;
    let occurrence = build(&escaped)?;
    Some((whole_word, occurrence))
}
