//! Core analysis types and configuration.

pub mod config;
pub mod errors;
pub mod message;
pub mod report;

pub use config::{AnalyzerConfig, DurationConfig, SentimentConfig, TopicConfig};
pub use errors::{AnalysisError, AnalysisResult};
pub use message::{ConversationMessage, RoleBucket};
pub use report::{ConversationAnalysis, Sentiment};
