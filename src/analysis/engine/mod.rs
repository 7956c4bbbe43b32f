//! Analyzer entry points.

pub mod core;

pub use self::core::{ConversationAnalyzer, analyze_conversation};
