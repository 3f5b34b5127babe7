//! Text-generation endpoint configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which text generator the CLI builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmBackend {
    /// OpenAI-compatible chat-completions endpoint over HTTP.
    #[default]
    Http,
    /// Fixed replies, no network. Used offline and in tests.
    Fixture,
}

fn default_endpoint() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_papp_model() -> String {
    String::from("gemini-2.5-flash")
}

fn default_sentiment_model() -> String {
    String::from("gpt-4.1-mini")
}

const fn default_sentiment_temperature() -> f32 {
    0.3
}

const fn default_sentiment_max_tokens() -> u32 {
    500
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_max_retries() -> u32 {
    2
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub backend: LlmBackend,

    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token. Falls back to `OPENAI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_papp_model")]
    pub papp_model: String,

    #[serde(default = "default_sentiment_model")]
    pub sentiment_model: String,

    #[serde(default = "default_sentiment_temperature")]
    pub sentiment_temperature: f32,

    #[serde(default = "default_sentiment_max_tokens")]
    pub sentiment_max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts for transient failures (0 disables retrying).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// File whose contents the fixture backend replies with. Empty means the
    /// built-in simulated reply.
    #[serde(default)]
    pub fixture_path: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: LlmBackend::default(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            papp_model: default_papp_model(),
            sentiment_model: default_sentiment_model(),
            sentiment_temperature: default_sentiment_temperature(),
            sentiment_max_tokens: default_sentiment_max_tokens(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            fixture_path: String::new(),
        }
    }
}

impl LlmConfig {
    /// Check if the selected backend has what it needs to run.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        match self.backend {
            LlmBackend::Http => !self.endpoint.is_empty() && !self.api_key.is_empty(),
            LlmBackend::Fixture => true,
        }
    }

    /// Like [`is_configured`](Self::is_configured), as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] for an HTTP backend without an
    /// API key, and [`ConfigError::InvalidEndpoint`] when its endpoint is not
    /// an http(s) URL.
    pub fn ensure_configured(&self) -> Result<(), ConfigError> {
        if self.backend == LlmBackend::Fixture {
            return Ok(());
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
            });
        }
        Ok(())
    }

    /// The fixture reply file, resolved against `root` like the `paths.*`
    /// settings. `None` when unset.
    #[must_use]
    pub fn fixture_path(&self, root: &Path) -> Option<PathBuf> {
        (!self.fixture_path.is_empty()).then(|| root.join(&self.fixture_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = LlmConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.endpoint, "https://api.openai.com/v1");
        assert_eq!(config.sentiment_model, "gpt-4.1-mini");
        assert!(config.fixture_path(Path::new("/srv/dialoga")).is_none());
    }

    #[test]
    fn fixture_backend_needs_no_key() {
        let config = LlmConfig {
            backend: LlmBackend::Fixture,
            ..Default::default()
        };
        assert!(config.ensure_configured().is_ok());
    }

    #[test]
    fn http_backend_with_key_is_configured() {
        let config = LlmConfig {
            api_key: "sk-test".into(),
            ..Default::default()
        };
        assert!(config.ensure_configured().is_ok());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = LlmConfig {
            api_key: "sk-test".into(),
            endpoint: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.ensure_configured(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn http_backend_without_key_is_missing_credentials() {
        assert!(matches!(
            LlmConfig::default().ensure_configured(),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn relative_fixture_path_resolves_against_root() {
        let config = LlmConfig {
            backend: LlmBackend::Fixture,
            fixture_path: "fixtures/reply.json".into(),
            ..Default::default()
        };
        assert_eq!(
            config.fixture_path(Path::new("/srv/dialoga")),
            Some(PathBuf::from("/srv/dialoga/fixtures/reply.json"))
        );

        let absolute = LlmConfig {
            fixture_path: "/tmp/reply.json".into(),
            ..config
        };
        assert_eq!(
            absolute.fixture_path(Path::new("/srv/dialoga")),
            Some(PathBuf::from("/tmp/reply.json"))
        );
    }
}
