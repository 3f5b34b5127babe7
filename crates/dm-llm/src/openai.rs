//! OpenAI-compatible chat-completions transport.

use std::time::Duration;

use dm_config::LlmConfig;
use serde::{Deserialize, Serialize};

use crate::client::{GenerationRequest, TextGenerator};
use crate::error::LlmError;
use crate::http::check_response;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> From<&'a GenerationRequest> for ChatRequest<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_response.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_content(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

/// Client for `POST {endpoint}/chat/completions` with bearer auth.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpGenerator {
    /// Create a client for the given base endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Transport`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        endpoint: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dialoga/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            url: format!("{}/chat/completions", endpoint.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        Self::new(
            &config.endpoint,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TextGenerator for HttpGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        tracing::debug!(model = %request.model, url = %self.url, "sending chat completion");
        let resp = check_response(
            self.http
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&ChatRequest::from(request))
                .send()
                .await?,
        )
        .await?;

        let text = resp.text().await?;
        let data: ChatResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::ResponseParse {
                message: format!("malformed chat completion envelope: {e}"),
            })?;
        let content = data.into_content()?;
        tracing::debug!(chars = content.chars().count(), "chat completion received");
        Ok(content)
    }
}
