//! Screening conversation analysis.
//!
//! - `core`: message model, analysis result, configuration, errors
//! - `ingest`: payload parsing, tokenization, stop words
//! - `scoring`: duration, topic ranking, sentiment
//! - `engine`: the analyzer tying the pieces together

pub mod core;
pub mod engine;
pub mod ingest;
pub mod scoring;

pub use self::core::{
    AnalysisError, AnalysisResult, AnalyzerConfig, ConversationAnalysis, ConversationMessage,
    DurationConfig, RoleBucket, Sentiment, SentimentConfig, TopicConfig,
};
pub use engine::{ConversationAnalyzer, analyze_conversation};
pub use ingest::{is_stop_word, messages_from_value, tokenize};
pub use scoring::{TopicScore, duration_seconds, rank_topics, score_sentiment, score_topics};
