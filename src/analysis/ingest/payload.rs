//! Conversion of raw JSON payloads into conversation messages.

use serde_json::Value;
use tracing::debug;

use crate::analysis::core::message::ConversationMessage;

/// Keys under which wrapped payloads carry their message list.
const LIST_KEYS: [&str; 3] = ["messages", "data", "transcript"];

/// Read messages from an API payload.
///
/// Accepts a bare array or an object wrapping the array under `messages`,
/// `data` or `transcript`. Null and non-object elements are skipped; any
/// other shape yields no messages.
#[must_use]
pub fn messages_from_value(value: &Value) -> Vec<ConversationMessage> {
    let Some(items) = message_list(value) else {
        debug!("payload carries no message list");
        return Vec::new();
    };

    let mut messages = Vec::with_capacity(items.len());
    let mut skipped = 0_usize;
    for item in items {
        match ConversationMessage::deserialize_lenient(item) {
            Some(message) => messages.push(message),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("skipped {skipped} malformed message entries");
    }
    messages
}

fn message_list(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => LIST_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

impl ConversationMessage {
    /// Deserialize one message object, `None` if it is not an object.
    #[must_use]
    pub fn deserialize_lenient(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
