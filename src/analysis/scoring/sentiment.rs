//! Lexicon-based sentiment scoring.

use crate::analysis::core::config::SentimentConfig;
use crate::analysis::core::report::Sentiment;

/// Net lexicon score for `documents`.
///
/// Documents are joined and lower-cased, then each lexicon word adds or
/// subtracts one if it occurs anywhere as a substring. Repeats do not count
/// twice, and "goodbye" does count as "good".
#[must_use]
pub fn sentiment_score(documents: &[&str], config: &SentimentConfig) -> i64 {
    let combined = documents.join(" ").to_lowercase();
    let present = |words: &[String]| {
        let hits = words
            .iter()
            .filter(|word| combined.contains(word.to_lowercase().as_str()))
            .count();
        i64::try_from(hits).unwrap_or(i64::MAX)
    };

    present(config.positive.as_slice()) - present(config.negative.as_slice())
}

/// Sentiment label for `documents`.
#[must_use]
pub fn score_sentiment(documents: &[&str], config: &SentimentConfig) -> Sentiment {
    Sentiment::from_score(sentiment_score(documents, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        let config = SentimentConfig::default();
        assert_eq!(
            score_sentiment(&["That was a Great answer"], &config),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_negative() {
        let config = SentimentConfig::default();
        assert_eq!(
            score_sentiment(&["The connection was terrible"], &config),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_balanced_is_neutral() {
        let config = SentimentConfig::default();
        assert_eq!(
            score_sentiment(&["great start", "awful ending"], &config),
            Sentiment::Neutral
        );
        assert_eq!(score_sentiment(&["Let us begin."], &config), Sentiment::Neutral);
    }

    #[test]
    fn test_presence_not_frequency() {
        let config = SentimentConfig::default();
        let documents = ["great great great", "one small concern"];
        assert_eq!(sentiment_score(&documents, &config), 0);
    }

    #[test]
    fn test_substring_matching() {
        let config = SentimentConfig::default();
        assert_eq!(sentiment_score(&["Goodbye for now"], &config), 1);
        assert_eq!(sentiment_score(&["My background is in finance"], &config), 0);
        assert_eq!(sentiment_score(&["We raised concerns"], &config), -1);
    }

    #[test]
    fn test_custom_lexicon() {
        let config = SentimentConfig {
            positive: vec!["Hired".to_string()],
            negative: Vec::new(),
        };
        assert_eq!(
            score_sentiment(&["she got hired"], &config),
            Sentiment::Positive
        );
    }
}
