//! Topic tokenization.

use crate::analysis::ingest::stopwords::is_stop_word;

/// Lower-case `text` and drop everything but ASCII word characters and
/// whitespace.
#[must_use]
pub fn normalize_for_topics(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Split `text` into topic candidates.
///
/// Tokens shorter than `min_word_chars` and stop words are dropped. Order
/// and repetitions are preserved.
#[must_use]
pub fn tokenize(text: &str, min_word_chars: usize) -> Vec<String> {
    normalize_for_topics(text)
        .split_whitespace()
        .filter(|token| token.len() >= min_word_chars && !is_stop_word(token))
        .map(ToString::to_string)
        .collect()
}
