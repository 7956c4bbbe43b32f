//! Analysis result types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse sentiment label for a conversation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative lexicon words present.
    Positive,
    /// Balanced or no lexicon words present.
    #[default]
    Neutral,
    /// More negative than positive lexicon words present.
    Negative,
}

impl Sentiment {
    /// Label for a net lexicon score.
    #[must_use]
    pub const fn from_score(score: i64) -> Self {
        if score > 0 {
            Self::Positive
        } else if score < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            _ => Err(value.to_string()),
        }
    }
}

/// Summary of a screening conversation, built fresh on every call.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAnalysis {
    /// Number of valid messages.
    pub total_messages: usize,
    /// Valid messages from agent-like roles.
    pub agent_messages: usize,
    /// Valid messages from customer-like roles.
    pub customer_messages: usize,
    /// Conversation length in seconds.
    pub duration: u64,
    /// Up to five ranked topic words.
    pub key_topics: Vec<String>,
    /// Overall sentiment.
    pub sentiment: Sentiment,
}

impl ConversationAnalysis {
    /// Zeroed result for conversations with nothing to analyze.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentiment_from_score() {
        assert_eq!(Sentiment::from_score(2), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-1), Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_parse() {
        assert_eq!("negative".parse::<Sentiment>(), Ok(Sentiment::Negative));
        assert!("mixed".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_empty_analysis_json_shape() {
        let value = serde_json::to_value(ConversationAnalysis::empty()).unwrap();
        assert_eq!(
            value,
            json!({
                "totalMessages": 0,
                "agentMessages": 0,
                "customerMessages": 0,
                "duration": 0,
                "keyTopics": [],
                "sentiment": "neutral"
            })
        );
    }
}
