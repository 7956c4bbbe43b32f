//! Transcript sources.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::analysis::core::message::ConversationMessage;
use crate::analysis::ingest::payload::messages_from_value;
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// Boxed future type for transcript source operations.
pub type SourceFuture<'a, T> = BoxFuture<'a, T>;

/// Keys that may carry the call identifier on a screening record.
const CALL_ID_KEYS: [&str; 2] = ["callId", "call_id"];

/// Anything that can produce the messages of a screening.
pub trait TranscriptSource: Send + Sync {
    /// Fetch the conversation messages recorded for a screening.
    ///
    /// # Errors
    /// Returns an error if the screening or its call cannot be resolved.
    fn fetch_messages<'a>(
        &'a self,
        screening_id: &'a str,
    ) -> SourceFuture<'a, UpstreamResult<Vec<ConversationMessage>>>;
}

/// Connection settings for the staffing API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `https://staffing.example.com/api`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Config with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP transcript source.
///
/// Resolves `GET {base}/screenings/{id}` to a call id, then reads
/// `GET {base}/calls/{call_id}/messages`.
pub struct HttpTranscriptSource {
    client: Client,
    base_url: String,
}

impl HttpTranscriptSource {
    /// Create a source for the given API.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the client cannot be built.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a screening record.
    ///
    /// # Errors
    /// Returns an error if the resulting URL is invalid.
    pub fn screening_url(&self, screening_id: &str) -> UpstreamResult<Url> {
        let url = format!(
            "{}/screenings/{}",
            self.base_url,
            urlencoding::encode(screening_id)
        );
        Ok(Url::parse(&url)?)
    }

    /// URL of a call's message list.
    ///
    /// # Errors
    /// Returns an error if the resulting URL is invalid.
    pub fn messages_url(&self, call_id: &str) -> UpstreamResult<Url> {
        let url = format!(
            "{}/calls/{}/messages",
            self.base_url,
            urlencoding::encode(call_id)
        );
        Ok(Url::parse(&url)?)
    }

    async fn get_json(&self, url: Url) -> UpstreamResult<Option<Value>> {
        debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn fetch_call_id(&self, screening_id: &str) -> UpstreamResult<String> {
        let url = self.screening_url(screening_id)?;
        let record = self
            .get_json(url)
            .await?
            .ok_or_else(|| UpstreamError::ScreeningNotFound(screening_id.to_string()))?;
        extract_call_id(&record).ok_or_else(|| UpstreamError::MissingCallId(screening_id.to_string()))
    }

    async fn fetch_call_messages(&self, call_id: &str) -> UpstreamResult<Vec<ConversationMessage>> {
        let url = self.messages_url(call_id)?;
        Ok(self
            .get_json(url)
            .await?
            .map(|payload| messages_from_value(&payload))
            .unwrap_or_default())
    }
}

impl TranscriptSource for HttpTranscriptSource {
    fn fetch_messages<'a>(
        &'a self,
        screening_id: &'a str,
    ) -> SourceFuture<'a, UpstreamResult<Vec<ConversationMessage>>> {
        async move {
            let call_id = self.fetch_call_id(screening_id).await?;
            let messages = self.fetch_call_messages(&call_id).await?;
            info!(
                "fetched {} messages for screening {screening_id} (call {call_id})",
                messages.len()
            );
            Ok(messages)
        }
        .boxed()
    }
}

/// Read the call identifier from a screening record.
///
/// Looks at the top level first, then under `data`. Numeric ids are accepted.
#[must_use]
pub fn extract_call_id(record: &Value) -> Option<String> {
    let lookup = |value: &Value| {
        CALL_ID_KEYS.iter().find_map(|key| match value.get(*key) {
            Some(Value::String(id)) if !id.trim().is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        })
    };
    lookup(record).or_else(|| record.get("data").and_then(lookup))
}
