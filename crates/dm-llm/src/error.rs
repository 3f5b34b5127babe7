//! Text-generation error types.

use dm_config::ConfigError;
use dm_core::enums::FailureKind;
use dm_core::responses::{FailureReport, JSON_DECODE_ERROR};
use thiserror::Error;

/// Errors that can occur while generating text or recovering JSON from it.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error (connect, timeout, TLS, body decoding).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint rejected the credentials (401/403).
    #[error("authentication failed ({status}): {message}")]
    Auth {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The endpoint returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The endpoint returned any other non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The reply carried no message content.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// No JSON matching the expected shape could be recovered from the reply.
    #[error("JSON Decode Error: {message}")]
    ResponseParse {
        /// Parser diagnostic from the last attempt.
        message: String,
    },

    /// The generator could not be built from configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LlmError {
    /// Failure category for callers that branch on the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::Auth { .. } => FailureKind::Auth,
            Self::Config(error) if error.is_missing_credentials() => FailureKind::Auth,
            Self::Config(_) => FailureKind::Config,
            Self::RateLimited { .. } => FailureKind::RateLimited,
            Self::Api { .. } | Self::EmptyResponse => FailureKind::Upstream,
            Self::ResponseParse { .. } => FailureKind::ResponseParse,
        }
    }

    /// Whether a later attempt could plausibly succeed.
    ///
    /// Rate limits, 5xx statuses, timeouts and connection failures are
    /// transient. Everything else is final.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Convert into the structured value returned in place of a result.
    ///
    /// Parse failures use the fixed `"JSON Decode Error"` message and keep the
    /// parser diagnostic as `detail`.
    #[must_use]
    pub fn to_failure_report(&self) -> FailureReport {
        match self {
            Self::ResponseParse { message } => {
                FailureReport::new(FailureKind::ResponseParse, JSON_DECODE_ERROR)
                    .with_detail(message.clone())
            }
            other => FailureReport::new(other.kind(), other.to_string()),
        }
    }
}
