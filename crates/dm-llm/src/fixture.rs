//! Fixed-reply generator for offline runs and tests.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::client::{GenerationRequest, TextGenerator};
use crate::error::LlmError;

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureReply {
    /// Reply content returned as-is.
    Body(String),
    /// Behave as if the endpoint answered with this HTTP status.
    Status(u16),
    /// Behave as if the endpoint answered 429 with this `Retry-After`.
    RateLimited { retry_after_secs: u64 },
    /// A completion with no message content.
    Empty,
}

impl FixtureReply {
    fn into_result(self) -> Result<String, LlmError> {
        match self {
            Self::Body(body) => Ok(body),
            Self::Status(status @ (401 | 403)) => Err(LlmError::Auth {
                status,
                message: "fixture status".to_string(),
            }),
            Self::Status(429) => Err(LlmError::RateLimited {
                retry_after_secs: 60,
            }),
            Self::Status(status) => Err(LlmError::Api {
                status,
                message: "fixture status".to_string(),
            }),
            Self::RateLimited { retry_after_secs } => {
                Err(LlmError::RateLimited { retry_after_secs })
            }
            Self::Empty => Err(LlmError::EmptyResponse),
        }
    }
}

/// Replies from a script and records every request it receives.
///
/// Replies are consumed in order; the last one repeats forever.
#[derive(Debug, Default)]
pub struct FixtureGenerator {
    replies: Mutex<VecDeque<FixtureReply>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FixtureGenerator {
    /// Always reply with `body`.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_replies([FixtureReply::Body(body.into())])
    }

    #[must_use]
    pub fn with_replies(replies: impl IntoIterator<Item = FixtureReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::default(),
        }
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn next_reply(&self) -> Option<FixtureReply> {
        let mut replies = self.replies.lock().unwrap_or_else(PoisonError::into_inner);
        if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        }
    }
}

impl TextGenerator for FixtureGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.next_reply()
            .map_or(Err(LlmError::EmptyResponse), FixtureReply::into_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(user: &str) -> GenerationRequest {
        GenerationRequest {
            model: "fixture".into(),
            system: String::new(),
            user: user.into(),
            json_response: false,
            temperature: None,
            max_tokens: None,
        }
    }

    #[tokio::test]
    async fn last_reply_repeats() {
        let generator = FixtureGenerator::with_replies([
            FixtureReply::Body("first".into()),
            FixtureReply::Body("rest".into()),
        ]);
        assert_eq!(generator.generate(&request("a")).await.unwrap(), "first");
        assert_eq!(generator.generate(&request("b")).await.unwrap(), "rest");
        assert_eq!(generator.generate(&request("c")).await.unwrap(), "rest");
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let generator = FixtureGenerator::new("{}");
        generator.generate(&request("one")).await.unwrap();
        generator.generate(&request("two")).await.unwrap();
        let users: Vec<String> = generator.requests().into_iter().map(|r| r.user).collect();
        assert_eq!(users, vec!["one".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn status_replies_map_to_errors() {
        let generator = FixtureGenerator::with_replies([
            FixtureReply::Status(403),
            FixtureReply::Status(429),
            FixtureReply::Empty,
        ]);
        assert!(matches!(
            generator.generate(&request("a")).await,
            Err(LlmError::Auth { status: 403, .. })
        ));
        assert!(matches!(
            generator.generate(&request("b")).await,
            Err(LlmError::RateLimited {
                retry_after_secs: 60
            })
        ));
        assert!(matches!(
            generator.generate(&request("c")).await,
            Err(LlmError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn empty_script_is_empty_response() {
        let generator = FixtureGenerator::default();
        assert!(matches!(
            generator.generate(&request("a")).await,
            Err(LlmError::EmptyResponse)
        ));
    }
}
