//! The text-generation seam: request type, trait, backend selection and the
//! retry loop shared by every flow.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use dm_config::{ConfigError, LlmBackend, LlmConfig};

use crate::error::LlmError;
use crate::fixture::FixtureGenerator;
use crate::openai::HttpGenerator;

/// Longest we are willing to sleep on a server-provided `Retry-After`.
const MAX_RETRY_AFTER: Duration = Duration::from_secs(30);

/// One chat-style generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    /// Ask the endpoint to constrain the reply to a JSON object.
    pub json_response: bool,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Anything that can turn a [`GenerationRequest`] into reply text.
pub trait TextGenerator {
    /// Run one generation and return the raw reply content.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// The generator selected by `llm.backend`.
#[derive(Debug)]
pub enum Generator {
    Http(HttpGenerator),
    Fixture(FixtureGenerator),
}

impl Generator {
    /// Build the configured backend.
    ///
    /// The fixture backend replies with the contents of `llm.fixture_path`
    /// (relative to `root`) when set, otherwise with `default_reply()`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] when the HTTP backend lacks an API key or
    /// has a non-http endpoint, or the fixture file cannot be read, and
    /// [`LlmError::Transport`] if the HTTP client fails to build.
    pub fn from_config(
        config: &LlmConfig,
        root: &Path,
        default_reply: impl FnOnce() -> String,
    ) -> Result<Self, LlmError> {
        match config.backend {
            LlmBackend::Http => {
                config.ensure_configured()?;
                Ok(Self::Http(HttpGenerator::from_config(config)?))
            }
            LlmBackend::Fixture => {
                let body = match config.fixture_path(root) {
                    Some(path) => std::fs::read_to_string(&path)
                        .map_err(|source| ConfigError::FixtureUnreadable { path, source })?,
                    None => default_reply(),
                };
                tracing::debug!(bytes = body.len(), "using fixture generator");
                Ok(Self::Fixture(FixtureGenerator::new(body)))
            }
        }
    }
}

impl TextGenerator for Generator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        match self {
            Self::Http(generator) => generator.generate(request).await,
            Self::Fixture(generator) => generator.generate(request).await,
        }
    }
}

/// How transient failures are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    /// Base delay; attempt `n` waits `n * backoff`.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&LlmConfig::default())
    }
}

impl RetryPolicy {
    /// A single attempt, no retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn from_config(config: &LlmConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }

    /// Delay before retry number `attempt` (1-based).
    fn delay(&self, attempt: u32, error: &LlmError) -> Duration {
        match error {
            LlmError::RateLimited { retry_after_secs } => {
                Duration::from_secs(*retry_after_secs).min(MAX_RETRY_AFTER)
            }
            _ => self.backoff * attempt,
        }
    }
}

/// Run `request` against `generator`, retrying transient failures per
/// `policy`.
///
/// # Errors
///
/// Returns the last [`LlmError`] once it is not retryable or the retry budget
/// is spent.
pub async fn generate_with_retry<G: TextGenerator>(
    generator: &G,
    request: &GenerationRequest,
    policy: RetryPolicy,
) -> Result<String, LlmError> {
    let mut attempt = 0;
    loop {
        match generator.generate(request).await {
            Ok(text) => return Ok(text),
            Err(error) if error.is_retryable() && attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.delay(attempt, &error);
                tracing::warn!(
                    attempt,
                    max_retries = policy.max_retries,
                    ?delay,
                    %error,
                    "transient generation failure, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureReply;
    use pretty_assertions::assert_eq;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "test-model".into(),
            system: "system".into(),
            user: "user".into(),
            json_response: true,
            temperature: None,
            max_tokens: None,
        }
    }

    const fn fast(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            backoff: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn retries_server_errors_until_success() {
        let generator = FixtureGenerator::with_replies([
            FixtureReply::Status(503),
            FixtureReply::RateLimited {
                retry_after_secs: 0,
            },
            FixtureReply::Body("{}".into()),
        ]);
        let text = generate_with_retry(&generator, &request(), fast(2))
            .await
            .unwrap();
        assert_eq!(text, "{}");
        assert_eq!(generator.request_count(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_budget() {
        let generator = FixtureGenerator::with_replies([FixtureReply::Status(500)]);
        let err = generate_with_retry(&generator, &request(), fast(2))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 500, .. }));
        assert_eq!(generator.request_count(), 3);
    }

    #[tokio::test]
    async fn auth_errors_are_not_retried() {
        let generator = FixtureGenerator::with_replies([
            FixtureReply::Status(401),
            FixtureReply::Body("{}".into()),
        ]);
        let err = generate_with_retry(&generator, &request(), fast(5))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Auth { status: 401, .. }));
        assert_eq!(generator.request_count(), 1);
    }

    #[test]
    fn rate_limit_delay_is_capped() {
        let policy = RetryPolicy {
            max_retries: 1,
            backoff: Duration::from_millis(100),
        };
        let throttled = LlmError::RateLimited {
            retry_after_secs: 600,
        };
        assert_eq!(policy.delay(1, &throttled), Duration::from_secs(30));
        let upstream = LlmError::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(policy.delay(3, &upstream), Duration::from_millis(300));
    }

    #[test]
    fn http_backend_requires_api_key() {
        let config = LlmConfig::default();
        let err = Generator::from_config(&config, Path::new("."), String::new).unwrap_err();
        assert!(matches!(
            err,
            LlmError::Config(ConfigError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn fixture_backend_uses_default_reply() {
        let config = LlmConfig {
            backend: LlmBackend::Fixture,
            ..LlmConfig::default()
        };
        let generator = Generator::from_config(&config, Path::new("."), || "{\"ok\":true}".to_string()).unwrap();
        assert!(matches!(generator, Generator::Fixture(_)));
        assert_eq!(generator.generate(&request()).await.unwrap(), "{\"ok\":true}");
    }

    #[test]
    fn fixture_backend_reports_missing_file() {
        let config = LlmConfig {
            backend: LlmBackend::Fixture,
            fixture_path: "/nonexistent/dialoga/reply.json".into(),
            ..LlmConfig::default()
        };
        let err = Generator::from_config(&config, Path::new("."), String::new).unwrap_err();
        assert!(matches!(
            err,
            LlmError::Config(ConfigError::FixtureUnreadable { .. })
        ));
        assert_eq!(err.kind(), dm_core::enums::FailureKind::Config);
    }

    #[tokio::test]
    async fn fixture_path_is_read_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("fixtures")).unwrap();
        std::fs::write(root.join("fixtures/reply.json"), "{\"from\":\"root\"}").unwrap();
        let config = LlmConfig {
            backend: LlmBackend::Fixture,
            fixture_path: "fixtures/reply.json".into(),
            ..LlmConfig::default()
        };

        let generator = Generator::from_config(&config, root, String::new).unwrap();
        assert_eq!(generator.generate(&request()).await.unwrap(), "{\"from\":\"root\"}");
    }
}
