//! Anthropic Messages API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::error;

use crate::config::AnthropicConfig;
use crate::errors::RagChatError;
use crate::errors::Result;
use crate::llm::AnswerGenerator;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl MessagesResponse {
    /// Concatenate the text blocks of the completion
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect()
    }
}

/// Single-turn, non-streaming completion client
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    messages_url: String,
    api_key: String,
    api_version: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &AnthropicConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            messages_url: format!("{}/v1/messages", config.endpoint.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` as the single user message and return the completion text
    ///
    /// # Errors
    /// - API errors (authentication, rate limits, invalid requests)
    /// - Network errors (connection failures, timeouts when configured)
    /// - Invalid API responses (malformed JSON)
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            "Sending {} character prompt to {}",
            prompt.chars().count(),
            self.model
        );

        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!("Anthropic API returned {}: {}", status, body);
            return Err(RagChatError::LlmError(format!(
                "Anthropic API returned {status}: {body}"
            )));
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)?;
        debug!("Completion finished, stop_reason: {:?}", parsed.stop_reason);
        Ok(parsed.text())
    }
}

#[async_trait]
impl AnswerGenerator for AnthropicClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}
