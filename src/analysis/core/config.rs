//! Configuration for the conversation analyzer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::core::errors::{AnalysisError, AnalysisResult};

/// Placeholder emitted when a non-empty conversation yields no topic words.
pub const NO_TOPICS_PLACEHOLDER: &str = "No key topics identified";

/// Words whose presence pushes the sentiment score up.
const DEFAULT_POSITIVE: [&str; 8] = [
    "great",
    "excellent",
    "good",
    "impressive",
    "well",
    "perfect",
    "amazing",
    "wonderful",
];

/// Words whose presence pushes the sentiment score down.
const DEFAULT_NEGATIVE: [&str; 7] = [
    "bad",
    "poor",
    "terrible",
    "awful",
    "disappointing",
    "weak",
    "concern",
];

/// Top-level configuration for the analyzer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Key topic extraction settings.
    pub topics: TopicConfig,
    /// Duration fallback settings.
    pub duration: DurationConfig,
    /// Sentiment lexicons.
    pub sentiment: SentimentConfig,
}

impl AnalyzerConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing sections fall back to their defaults. The result is validated.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_json_file(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or invalid.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.topics.max_topics == 0 {
            return Err(AnalysisError::InvalidConfig(
                "topics.max_topics must be > 0".to_string(),
            ));
        }

        if self.topics.min_word_chars == 0 {
            return Err(AnalysisError::InvalidConfig(
                "topics.min_word_chars must be > 0".to_string(),
            ));
        }

        if self.topics.placeholder.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "topics.placeholder must not be empty".to_string(),
            ));
        }

        for (name, words) in [
            ("positive", &self.sentiment.positive),
            ("negative", &self.sentiment.negative),
        ] {
            if words.iter().any(|word| word.trim().is_empty()) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "sentiment.{name} must not contain blank words"
                )));
            }
        }

        Ok(())
    }
}

/// Key topic extraction settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    /// Maximum number of topics to report.
    pub max_topics: usize,
    /// Minimum token length in characters; shorter tokens are discarded.
    pub min_word_chars: usize,
    /// Single topic reported when nothing qualifies.
    pub placeholder: String,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            max_topics: 5,
            min_word_chars: 4,
            placeholder: NO_TOPICS_PLACEHOLDER.to_string(),
        }
    }
}

/// Duration heuristic used when timestamps cannot give a span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationConfig {
    /// Lower bound of the fallback duration.
    pub min_fallback_seconds: u64,
    /// Seconds assumed per valid message.
    pub seconds_per_message: u64,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            min_fallback_seconds: 30,
            seconds_per_message: 15,
        }
    }
}

/// Sentiment lexicons, matched by lower-case substring presence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Positive words.
    pub positive: Vec<String>,
    /// Negative words.
    pub negative: Vec<String>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE.iter().map(ToString::to_string).collect(),
            negative: DEFAULT_NEGATIVE.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.topics.max_topics, 5);
        assert_eq!(config.topics.min_word_chars, 4);
        assert_eq!(config.topics.placeholder, NO_TOPICS_PLACEHOLDER);
        assert_eq!(config.duration.min_fallback_seconds, 30);
        assert_eq!(config.duration.seconds_per_message, 15);
        assert_eq!(config.sentiment.positive.len(), 8);
        assert_eq!(config.sentiment.negative.len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_topics() {
        let mut config = AnalyzerConfig::default();
        config.topics.max_topics = 0;
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_blank_lexicon_word() {
        let mut config = AnalyzerConfig::default();
        config.sentiment.negative.push("  ".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sentiment.negative"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"topics": {"max_topics": 3}}"#).unwrap();
        assert_eq!(config.topics.max_topics, 3);
        assert_eq!(config.topics.min_word_chars, 4);
        assert_eq!(config.duration, DurationConfig::default());
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "screening-insights-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"duration": {"seconds_per_message": 20}}"#).unwrap();
        let config = AnalyzerConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.duration.seconds_per_message, 20);
        assert_eq!(config.duration.min_fallback_seconds, 30);
    }

    #[test]
    fn test_from_missing_file() {
        let result = AnalyzerConfig::from_json_file("/nonexistent/analyzer.json");
        assert!(matches!(result, Err(AnalysisError::Io(_))));
    }
}
