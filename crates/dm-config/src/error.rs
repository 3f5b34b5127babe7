//! Errors from loading configuration or checking that a backend can run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `DIALOGA_*` variable could not be merged.
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    /// `llm.backend = "http"` without a bearer token.
    #[error("llm.backend is \"http\" but no API key is set (llm.api_key or OPENAI_API_KEY)")]
    MissingApiKey,

    /// `llm.endpoint` is not an http(s) base URL.
    #[error("llm.endpoint must be an http(s) URL, got '{endpoint}'")]
    InvalidEndpoint { endpoint: String },

    /// `llm.fixture_path` is set but the reply file cannot be read.
    #[error("failed to read fixture reply {}: {source}", path.display())]
    FixtureUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Whether the problem is missing credentials rather than a bad setting.
    #[must_use]
    pub const fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}
