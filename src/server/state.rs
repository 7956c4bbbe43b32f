//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::analysis::engine::ConversationAnalyzer;
use crate::server::config::{ConfigError, ServiceConfig};
use crate::upstream::error::UpstreamError;
use crate::upstream::source::{HttpTranscriptSource, TranscriptSource};

/// Shared application state.
pub struct AppState {
    /// Analyzer used by every request.
    pub analyzer: ConversationAnalyzer,
    /// Transcript source for screening lookups, if configured.
    pub transcripts: Option<Arc<dyn TranscriptSource>>,
}

impl AppState {
    /// Create state from explicit parts.
    #[must_use]
    pub fn new(
        analyzer: ConversationAnalyzer,
        transcripts: Option<Arc<dyn TranscriptSource>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            analyzer,
            transcripts,
        })
    }

    /// Build state from service configuration.
    ///
    /// # Errors
    /// Returns an error if the analyzer config is invalid or the HTTP client
    /// cannot be created.
    pub fn from_config(
        config: &ServiceConfig,
    ) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let analyzer =
            ConversationAnalyzer::new(config.analyzer.clone()).map_err(ConfigError::from)?;

        let transcripts = match &config.upstream {
            Some(upstream) => {
                let source = HttpTranscriptSource::new(upstream)
                    .map_err(|e: UpstreamError| format!("Failed to create upstream client: {e}"))?;
                Some(Arc::new(source) as Arc<dyn TranscriptSource>)
            }
            None => None,
        };

        Ok(Self::new(analyzer, transcripts))
    }
}
