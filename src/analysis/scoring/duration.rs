//! Conversation duration estimation.

use chrono::{DateTime, Utc};

use crate::analysis::core::config::DurationConfig;
use crate::analysis::core::message::ConversationMessage;

/// Conversation length in whole seconds.
///
/// Uses the span between the earliest and latest timestamp across all
/// `messages`, valid or not, rounded to the nearest second. Falls back to
/// `max(min_fallback_seconds, valid_count * seconds_per_message)` when fewer
/// than two timestamps exist or the span rounds to zero.
#[must_use]
pub fn duration_seconds(
    messages: &[ConversationMessage],
    valid_count: usize,
    config: &DurationConfig,
) -> u64 {
    timestamp_span_seconds(messages).unwrap_or_else(|| fallback_seconds(valid_count, config))
}

/// Rounded span between the earliest and latest timestamps, if positive.
#[must_use]
pub fn timestamp_span_seconds(messages: &[ConversationMessage]) -> Option<u64> {
    let mut stamps: Vec<DateTime<Utc>> = messages.iter().filter_map(|m| m.timestamp).collect();
    if stamps.len() < 2 {
        return None;
    }
    stamps.sort_unstable();

    let first = stamps.first()?;
    let last = stamps.last()?;
    let millis = last.signed_duration_since(*first).num_milliseconds();
    let seconds = millis.saturating_add(500) / 1000;
    if seconds <= 0 {
        return None;
    }
    u64::try_from(seconds).ok()
}

/// Heuristic duration for conversations without a usable timestamp span.
#[must_use]
pub fn fallback_seconds(valid_count: usize, config: &DurationConfig) -> u64 {
    u64::try_from(valid_count)
        .unwrap_or(u64::MAX)
        .saturating_mul(config.seconds_per_message)
        .max(config.min_fallback_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(offset_millis: i64) -> ConversationMessage {
        let base = Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap();
        ConversationMessage::new("user", "words")
            .with_timestamp(base + Duration::milliseconds(offset_millis))
    }

    #[test]
    fn test_span_from_unordered_timestamps() {
        let messages = vec![at(90_000), at(0), at(45_000)];
        assert_eq!(duration_seconds(&messages, 3, &DurationConfig::default()), 90);
    }

    #[test]
    fn test_span_rounds_to_nearest_second() {
        assert_eq!(timestamp_span_seconds(&[at(0), at(61_499)]), Some(61));
        assert_eq!(timestamp_span_seconds(&[at(0), at(61_500)]), Some(62));
    }

    #[test]
    fn test_single_timestamp_falls_back() {
        let messages = vec![at(0), ConversationMessage::new("agent", "no time")];
        assert_eq!(duration_seconds(&messages, 2, &DurationConfig::default()), 30);
    }

    #[test]
    fn test_zero_span_falls_back() {
        let messages = vec![at(0), at(0), at(300)];
        assert_eq!(duration_seconds(&messages, 3, &DurationConfig::default()), 45);
    }

    #[test]
    fn test_fallback_minimum() {
        let config = DurationConfig::default();
        assert_eq!(fallback_seconds(0, &config), 30);
        assert_eq!(fallback_seconds(1, &config), 30);
        assert_eq!(fallback_seconds(2, &config), 30);
        assert_eq!(fallback_seconds(3, &config), 45);
        assert_eq!(fallback_seconds(10, &config), 150);
    }
}
