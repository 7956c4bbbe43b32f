//! Payload ingestion and tokenization.

pub mod payload;
pub mod stopwords;
pub mod tokenize;

pub use payload::messages_from_value;
pub use stopwords::{STOP_WORDS, is_stop_word};
pub use tokenize::{normalize_for_topics, tokenize};
