//! Conversation analyzer orchestration.

use std::sync::LazyLock;

use serde_json::Value;
use tracing::debug;

use crate::analysis::core::config::AnalyzerConfig;
use crate::analysis::core::errors::AnalysisResult;
use crate::analysis::core::message::{ConversationMessage, RoleBucket};
use crate::analysis::core::report::ConversationAnalysis;
use crate::analysis::ingest::payload::messages_from_value;
use crate::analysis::scoring::duration::duration_seconds;
use crate::analysis::scoring::sentiment::score_sentiment;
use crate::analysis::scoring::topics::rank_topics;

static DEFAULT_ANALYZER: LazyLock<ConversationAnalyzer> =
    LazyLock::new(ConversationAnalyzer::default);

/// Analyze `messages` with the default configuration.
#[must_use]
pub fn analyze_conversation(messages: &[ConversationMessage]) -> ConversationAnalysis {
    DEFAULT_ANALYZER.analyze(messages)
}

/// Stateless analyzer for screening conversations.
///
/// Holds only configuration; one instance can serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct ConversationAnalyzer {
    config: AnalyzerConfig,
}

impl ConversationAnalyzer {
    /// Create an analyzer.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: AnalyzerConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Summarize a conversation. Never fails; unusable messages are ignored.
    #[must_use]
    pub fn analyze(&self, messages: &[ConversationMessage]) -> ConversationAnalysis {
        let valid: Vec<&ConversationMessage> = messages.iter().filter(|m| m.is_valid()).collect();
        if valid.is_empty() {
            debug!("no valid messages among {} entries", messages.len());
            return ConversationAnalysis::empty();
        }

        let mut agent_messages = 0;
        let mut customer_messages = 0;
        for message in &valid {
            match message.role_bucket() {
                RoleBucket::Agent => agent_messages += 1,
                RoleBucket::Customer => customer_messages += 1,
                RoleBucket::Other => {}
            }
        }

        let texts: Vec<&str> = valid
            .iter()
            .filter_map(|message| message.extracted_text())
            .collect();

        let analysis = ConversationAnalysis {
            total_messages: valid.len(),
            agent_messages,
            customer_messages,
            duration: duration_seconds(messages, valid.len(), &self.config.duration),
            key_topics: rank_topics(&texts, &self.config.topics),
            sentiment: score_sentiment(&texts, &self.config.sentiment),
        };

        debug!(
            total = analysis.total_messages,
            agent = analysis.agent_messages,
            customer = analysis.customer_messages,
            duration = analysis.duration,
            sentiment = %analysis.sentiment,
            "conversation analyzed"
        );
        analysis
    }

    /// Summarize a raw JSON payload.
    ///
    /// Accepts the shapes understood by [`messages_from_value`]; malformed
    /// entries are skipped.
    #[must_use]
    pub fn analyze_value(&self, payload: &Value) -> ConversationAnalysis {
        self.analyze(&messages_from_value(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::core::config::NO_TOPICS_PLACEHOLDER;
    use crate::analysis::core::report::Sentiment;
    use crate::analysis::ingest::stopwords::is_stop_word;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn screening_fixture() -> Vec<ConversationMessage> {
        vec![
            ConversationMessage::new(
                "agent",
                "Hello, thank you for joining the interview screening. How are you today?",
            )
            .with_id("1"),
            ConversationMessage::new(
                "user",
                "I'm doing well, thank you. I'm excited about this opportunity.",
            )
            .with_id("2"),
            ConversationMessage::new(
                "agent",
                "Great! Let's start with your background. Can you tell me about your experience?",
            )
            .with_id("3"),
            ConversationMessage::new(
                "user",
                "I have 5 years of experience in software development, primarily working with React and Node.js.",
            )
            .with_id("4"),
        ]
    }

    #[test]
    fn test_screening_scenario() {
        let analysis = analyze_conversation(&screening_fixture());
        assert_eq!(analysis.total_messages, 4);
        assert_eq!(analysis.agent_messages, 2);
        assert_eq!(analysis.customer_messages, 2);
        assert_eq!(analysis.duration, 60);
        assert!(analysis.key_topics.contains(&"experience".to_string()));
        assert!(analysis.key_topics.len() <= 5);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(analyze_conversation(&[]), ConversationAnalysis::empty());
    }

    #[test]
    fn test_only_system_messages() {
        let messages = vec![ConversationMessage::new("system", "x")];
        assert_eq!(analyze_conversation(&messages), ConversationAnalysis::empty());
    }

    #[test]
    fn test_only_empty_messages() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let messages = vec![
            ConversationMessage::new("user", "").with_timestamp(base),
            ConversationMessage::default().with_timestamp(base + chrono::Duration::minutes(5)),
        ];
        assert_eq!(analyze_conversation(&messages), ConversationAnalysis::empty());
    }

    #[test]
    fn test_whitespace_message_is_counted() {
        let analysis = analyze_conversation(&[ConversationMessage::new("user", "   ")]);
        assert_eq!(analysis.total_messages, 1);
        assert_eq!(analysis.customer_messages, 1);
        assert_eq!(analysis.duration, 30);
        assert_eq!(analysis.key_topics, vec![NO_TOPICS_PLACEHOLDER.to_string()]);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_whitespace_content_shadows_later_fields() {
        let message = ConversationMessage {
            role: Some("user".to_string()),
            content: Some("  ".to_string()),
            text: Some("terrible".to_string()),
            ..ConversationMessage::default()
        };
        let analysis = analyze_conversation(&[message]);
        assert_eq!(analysis.total_messages, 1);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_single_message_fallback_duration() {
        let analysis = analyze_conversation(&[ConversationMessage::new("candidate", "Sure")]);
        assert_eq!(analysis.total_messages, 1);
        assert_eq!(analysis.duration, 30);
        assert_eq!(analysis.key_topics, vec![NO_TOPICS_PLACEHOLDER.to_string()]);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_duration_uses_invalid_messages_timestamps() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let messages = vec![
            ConversationMessage::new("system", "call started").with_timestamp(base),
            ConversationMessage::new("agent", "Welcome aboard")
                .with_timestamp(base + chrono::Duration::seconds(20)),
            ConversationMessage::new("user", "")
                .with_timestamp(base + chrono::Duration::seconds(200)),
        ];
        let analysis = analyze_conversation(&messages);
        assert_eq!(analysis.total_messages, 1);
        assert_eq!(analysis.duration, 200);
    }

    #[test]
    fn test_unknown_roles_count_only_in_total() {
        let messages = vec![
            ConversationMessage::new("recruiter", "Compensation expectations"),
            ConversationMessage::new("assistant", "Noted"),
            ConversationMessage {
                transcript: Some("Relocation question".to_string()),
                ..ConversationMessage::default()
            },
        ];
        let analysis = analyze_conversation(&messages);
        assert_eq!(analysis.total_messages, 3);
        assert_eq!(analysis.agent_messages, 1);
        assert_eq!(analysis.customer_messages, 0);
        assert!(analysis.agent_messages + analysis.customer_messages <= analysis.total_messages);
    }

    #[test]
    fn test_uppercase_system_counts_as_agent() {
        let messages = vec![
            ConversationMessage::new("SYSTEM", "Reminder about scheduling"),
            ConversationMessage::new("system", "Hidden prompt"),
        ];
        let analysis = analyze_conversation(&messages);
        assert_eq!(analysis.total_messages, 1);
        assert_eq!(analysis.agent_messages, 1);
    }

    #[test]
    fn test_topics_exclude_stop_words_and_short_words() {
        let messages = vec![
            ConversationMessage::new(
                "agent",
                "What about your salary expectations and notice period?",
            ),
            ConversationMessage::new(
                "candidate",
                "I would want around the market rate, with a two week notice period.",
            ),
            ConversationMessage::new("agent", "Any questions about the team or the stack?"),
        ];
        let analysis = analyze_conversation(&messages);
        assert!(analysis.key_topics.len() <= 5);
        for topic in &analysis.key_topics {
            assert!(topic.len() > 3, "{topic} is too short");
            assert!(!is_stop_word(topic), "{topic} is a stop word");
        }
    }

    #[test]
    fn test_sentiment_outcomes() {
        let positive = analyze_conversation(&[ConversationMessage::new("user", "That went great")]);
        assert_eq!(positive.sentiment, Sentiment::Positive);

        let negative =
            analyze_conversation(&[ConversationMessage::new("user", "The audio was terrible")]);
        assert_eq!(negative.sentiment, Sentiment::Negative);

        let neutral = analyze_conversation(&[
            ConversationMessage::new("agent", "Excellent portfolio"),
            ConversationMessage::new("user", "Sorry, the demo was weak"),
        ]);
        assert_eq!(neutral.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_idempotent() {
        let messages = screening_fixture();
        let copy = messages.clone();
        let first = analyze_conversation(&messages);
        let second = analyze_conversation(&copy);
        assert_eq!(first, second);
        assert_eq!(messages, copy);
    }

    #[test]
    fn test_analyze_value_with_malformed_entries() {
        let payload = json!([
            null,
            {"role": "agent", "text": "Tell me about Kubernetes"},
            "garbage",
            {"role": "candidate", "message": "Kubernetes clusters in production", "timestamp": 1_700_000_000_000_i64},
            {"role": "candidate", "transcript": "Terraform modules", "timestamp": 1_700_000_095_000_i64},
            {"content": 7}
        ]);
        let analysis = ConversationAnalyzer::default().analyze_value(&payload);
        assert_eq!(analysis.total_messages, 3);
        assert_eq!(analysis.agent_messages, 1);
        assert_eq!(analysis.customer_messages, 2);
        assert_eq!(analysis.duration, 95);
    }

    #[test]
    fn test_custom_config() {
        let mut config = AnalyzerConfig::default();
        config.topics.max_topics = 1;
        config.duration.seconds_per_message = 60;
        let analyzer = ConversationAnalyzer::new(config).unwrap();
        let analysis = analyzer.analyze(&screening_fixture());
        assert_eq!(analysis.key_topics, vec!["experience".to_string()]);
        assert_eq!(analysis.duration, 240);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalyzerConfig::default();
        config.topics.placeholder = String::new();
        assert!(ConversationAnalyzer::new(config).is_err());
    }
}
