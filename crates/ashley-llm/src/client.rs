//! OpenAI-compatible chat-completions client.
//!
//! One outbound call per user query: the payload carries the configured
//! system prompt and the single user message, the reply is the first
//! choice's content. Token usage reported by the endpoint is logged for
//! observability only; the chat core keeps its own advisory estimate.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ashley_chat::QueryBackend;
use ashley_core::config::LlmConfig;
use ashley_core::Result;

use crate::error::LlmError;

/// HTTP error bodies are truncated to this length before they are carried
/// into user-facing error messages.
const MAX_ERROR_BODY: usize = 300;

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}

// =============================================================================
// InferenceClient
// =============================================================================

/// Client for an OpenAI-compatible inference endpoint.
pub struct InferenceClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    system_prompt: String,
    max_tokens: u32,
    temperature: f64,
}

impl InferenceClient {
    /// Build a client from the configuration, reading the API key from the
    /// environment variable the configuration names.
    pub fn from_config(config: &LlmConfig) -> std::result::Result<Self, LlmError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| LlmError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(api_key, config)
    }

    /// Build a client with an explicit API key.
    pub fn new(api_key: String, config: &LlmConfig) -> std::result::Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key,
            endpoint: endpoint_url(&config.base_url),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one query and return the raw response text.
    ///
    /// Returns an empty string when the endpoint produces no content; the
    /// chat core treats that as a degraded success and substitutes its
    /// fallback text.
    pub async fn complete(&self, query: &str) -> std::result::Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: query,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        if let Some(usage) = &body.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Endpoint reported token usage"
            );
        }

        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}

impl QueryBackend for InferenceClient {
    async fn send_query(&self, query: &str) -> Result<String> {
        Ok(self.complete(query).await?)
    }
}

/// Assemble the chat-completions URL from a base URL.
fn endpoint_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Map an unsuccessful HTTP status to an [`LlmError`].
fn classify_status(status: StatusCode, body: &str) -> LlmError {
    let message: String = body.chars().take(MAX_ERROR_BODY).collect();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited,
        s => LlmError::Endpoint {
            status: s.as_u16(),
            message,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
