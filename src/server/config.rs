//! Service configuration read from the environment.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::analysis::core::config::AnalyzerConfig;
use crate::analysis::core::errors::AnalysisError;
use crate::upstream::source::UpstreamConfig;

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Listening port.
pub const ENV_PORT: &str = "SCREENING_INSIGHTS_PORT";
/// Base URL of the staffing API.
pub const ENV_UPSTREAM_URL: &str = "SCREENING_INSIGHTS_UPSTREAM_URL";
/// Upstream request timeout in seconds.
pub const ENV_UPSTREAM_TIMEOUT: &str = "SCREENING_INSIGHTS_UPSTREAM_TIMEOUT_SECS";
/// Path to a JSON analyzer configuration.
pub const ENV_ANALYZER_CONFIG: &str = "SCREENING_INSIGHTS_ANALYZER_CONFIG";

/// Errors raised while reading service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port is not a valid `u16`.
    #[error("invalid SCREENING_INSIGHTS_PORT: {0}")]
    InvalidPort(String),
    /// Timeout is not a positive integer.
    #[error("invalid SCREENING_INSIGHTS_UPSTREAM_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
    /// Upstream URL cannot be parsed.
    #[error("invalid SCREENING_INSIGHTS_UPSTREAM_URL: {0}")]
    InvalidUpstreamUrl(#[from] url::ParseError),
    /// Analyzer configuration could not be loaded.
    #[error("analyzer configuration: {0}")]
    Analyzer(#[from] AnalysisError),
}

/// Runtime settings for the HTTP service.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Listening port.
    pub port: u16,
    /// Staffing API settings; screening lookups are disabled when absent.
    pub upstream: Option<UpstreamConfig>,
    /// Analyzer settings.
    pub analyzer: AnalyzerConfig,
}

impl ServiceConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    /// Returns an error if any variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps variable names to values.
    ///
    /// # Errors
    /// Returns an error if any variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let upstream = match lookup(ENV_UPSTREAM_URL).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => {
                let base_url = raw.trim().to_string();
                Url::parse(&base_url)?;
                let mut config = UpstreamConfig::new(base_url);
                if let Some(raw_timeout) = lookup(ENV_UPSTREAM_TIMEOUT) {
                    let seconds: u64 = raw_timeout
                        .trim()
                        .parse()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ConfigError::InvalidTimeout(raw_timeout.clone()))?;
                    config = config.with_timeout(Duration::from_secs(seconds));
                }
                Some(config)
            }
            None => None,
        };

        let analyzer = match lookup(ENV_ANALYZER_CONFIG) {
            Some(path) => AnalyzerConfig::from_json_file(path.trim())?,
            None => AnalyzerConfig::default(),
        };

        Ok(Self {
            port,
            upstream,
            analyzer,
        })
    }
}
