//! Client for an OpenAI-compatible chat completion endpoint.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::config::{DEFAULT_COMPLETION_MODEL, DEFAULT_TIMEOUT_MS};

pub const TEMPERATURE: f64 = 0.1;
pub const MAX_TOKENS: u32 = 3000;
pub const TOP_P: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    endpoint: String,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

impl CompletionConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion API key is not configured")]
    MissingCredential,
    #[error("invalid completion API key header value")]
    InvalidCredential,
    #[error("completion request timed out after {0} ms")]
    Timeout(u64),
    #[error("failed to send completion request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("completion API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode completion response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("completion response contained no choices")]
    NoChoices,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Sends one chat completion request and returns the first choice's text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        if !self.config.has_credential() {
            return Err(CompletionError::MissingCredential);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key.trim()))
            .map_err(|_| CompletionError::InvalidCredential)?;
        headers.insert(AUTHORIZATION, bearer);

        let payload = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "sending completion request");

        // The deadline covers the whole exchange, body included.
        timeout(
            Duration::from_millis(self.config.timeout_ms),
            self.exchange(headers, &payload),
        )
        .await
        .map_err(|_| CompletionError::Timeout(self.config.timeout_ms))?
    }

    async fn exchange(
        &self,
        headers: HeaderMap,
        payload: &ChatCompletionRequest<'_>,
    ) -> Result<String, CompletionError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .headers(headers)
            .json(payload)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatCompletionResponse =
            response.json().await.map_err(CompletionError::Decode)?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::NoChoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_sampling_settings() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("hello")];
        let payload = ChatCompletionRequest {
            model: "gpt-test",
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "gpt-test");
        assert_eq!(value["max_tokens"], 3000);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert!((value["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn response_without_choices_decodes_to_empty() {
        let body: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(body.choices.is_empty());
    }

    #[tokio::test]
    async fn missing_credential_fails_before_sending() {
        let client = CompletionClient::new(CompletionConfig::new("http://127.0.0.1:1/", "  "));
        let err = client
            .complete(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::MissingCredential));
    }
}
