//! Statistics computed over valid messages.

pub mod duration;
pub mod sentiment;
pub mod topics;

pub use duration::{duration_seconds, fallback_seconds, timestamp_span_seconds};
pub use sentiment::{score_sentiment, sentiment_score};
pub use topics::{TopicScore, rank_topics, score_topics};
