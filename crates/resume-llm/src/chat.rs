//! Chat-completions provider
//!
//! Sends the extraction prompt to an HTTPS chat-completions endpoint (Azure
//! OpenAI style: the credential travels in an `api-key` header).
//!
//! # Behavior
//!
//! - One system-role message carrying the whole prompt
//! - Fixed sampling parameters, not tunable per call
//! - Single attempt: no retry and no timeout beyond the transport default
//! - Non-success statuses come back as [`LlmError::Transport`] with the body
//!   verbatim
//!
//! # Examples
//!
//! ```no_run
//! use resume_llm::{ChatCompletionsProvider, EndpointConfig};
//!
//! let config = EndpointConfig::new("https://example.openai.azure.com/chat", "secret");
//! let provider = ChatCompletionsProvider::new(config).unwrap();
//! ```

use crate::LlmError;
use resume_domain::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Sampling temperature sent with every request
pub const TEMPERATURE: f64 = 0.7;

/// Nucleus-sampling threshold sent with every request
pub const TOP_P: f64 = 0.95;

/// Maximum output tokens requested
pub const MAX_TOKENS: u32 = 4000;

/// Location of the extraction endpoint and the credential to use
///
/// Both values are opaque to the core; they are supplied by the caller and
/// shared read-only across all requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL the request is POSTed to
    pub url: String,

    /// Value of the `api-key` header
    pub api_key: String,
}

impl EndpointConfig {
    /// Create a new endpoint configuration
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Check that both values are present
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("endpoint url must not be empty".to_string());
        }
        if self.api_key.trim().is_empty() {
            return Err("api key must not be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Request body for the chat-completions API
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    messages: [ChatMessage<'a>; 1],
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> ChatRequest<'a> {
    pub(crate) fn system(prompt: &'a str) -> Self {
        Self {
            messages: [ChatMessage {
                role: "system",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Provider for an HTTPS chat-completions endpoint
pub struct ChatCompletionsProvider {
    endpoint: EndpointConfig,
    client: reqwest::Client,
}

impl ChatCompletionsProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the endpoint values are empty or the
    /// HTTP client cannot be initialized.
    pub fn new(endpoint: EndpointConfig) -> Result<Self, LlmError> {
        endpoint.validate().map_err(LlmError::Config)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { endpoint, client })
    }

    /// The endpoint this provider talks to
    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Send the prompt and return the raw response body
    ///
    /// # Errors
    ///
    /// - [`LlmError::Transport`] for any non-2xx status
    /// - [`LlmError::Communication`] if no response was received or its body
    ///   could not be read
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest::system(prompt);

        debug!(
            "POST {} (prompt {} chars)",
            self.endpoint.url,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint.url)
            .header("api-key", &self.endpoint.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            warn!("Extraction endpoint returned {}", status);
            return Err(LlmError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Response body length: {} chars", body.len());
        Ok(body)
    }
}

impl LlmProviderTrait for ChatCompletionsProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.complete(prompt).await
    }
}
