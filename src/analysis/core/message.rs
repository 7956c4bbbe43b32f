//! Conversation message model for screening transcripts.
//!
//! Upstream payloads are loosely shaped: text can arrive under several field
//! names and any field can be missing or carry the wrong JSON type. Every
//! field is therefore optional and deserializes leniently.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Role string that is never analyzed.
const SYSTEM_ROLE: &str = "system";

/// Roles counted as the interviewing side.
const AGENT_ROLES: [&str; 3] = ["agent", "assistant", "system"];

/// Roles counted as the interviewed side.
const CUSTOMER_ROLES: [&str; 3] = ["user", "candidate", "customer"];

/// Naive timestamp layouts accepted besides RFC 3339, read as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Coarse speaker bucket used for message tallies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoleBucket {
    /// Agent-like speaker (`agent`, `assistant`, `system`).
    Agent,
    /// Customer-like speaker (`user`, `candidate`, `customer`).
    Customer,
    /// Anything else, including a missing role.
    Other,
}

impl RoleBucket {
    /// Classify a role string, ignoring case.
    #[must_use]
    pub fn classify(role: Option<&str>) -> Self {
        let Some(role) = role else {
            return Self::Other;
        };
        let role = role.to_lowercase();
        if AGENT_ROLES.contains(&role.as_str()) {
            Self::Agent
        } else if CUSTOMER_ROLES.contains(&role.as_str()) {
            Self::Customer
        } else {
            Self::Other
        }
    }
}

/// One turn of a screening conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Identifier, unique within a conversation.
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form speaker tag.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Primary text field.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Alternate text field.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Alternate text field.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Alternate text field, typically from speech-to-text.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    /// When the turn happened. Only used for duration.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConversationMessage {
    /// Build a message with a role and primary content.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Attach an identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach a timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// First non-empty text among `content`, `text`, `message`, `transcript`.
    ///
    /// Whitespace-only text is non-empty and stops the fallback.
    #[must_use]
    pub fn extracted_text(&self) -> Option<&str> {
        [&self.content, &self.text, &self.message, &self.transcript]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.is_empty())
    }

    /// Whether the message takes part in counts, topics and sentiment.
    ///
    /// The `system` comparison is case-sensitive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.role.as_deref() != Some(SYSTEM_ROLE) && self.extracted_text().is_some()
    }

    /// Speaker bucket of this message.
    #[must_use]
    pub fn role_bucket(&self) -> RoleBucket {
        RoleBucket::classify(self.role.as_deref())
    }
}

/// Parse a timestamp from a JSON value.
///
/// Strings may be RFC 3339 or a naive `YYYY-MM-DD HH:MM:SS` form; numbers are
/// epoch milliseconds, fractional values truncated.
#[must_use]
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_timestamp_str(raw),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(truncate_millis))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_millis(millis: f64) -> Option<i64> {
    let millis = millis.trunc();
    // i64::MAX is not representable; the bound keeps the cast exact.
    if millis.is_finite() && millis.abs() < 9.0e18 {
        Some(millis as i64)
    } else {
        None
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}
