//! Resume Extract LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `resume-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, scripted provider for testing
//! - `ChatCompletionsProvider`: HTTPS chat-completions endpoint authenticated
//!   with an `api-key` header
//!
//! # Examples
//!
//! ```
//! use resume_llm::MockProvider;
//! use resume_domain::LlmProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"title": "Engineer"}"#);
//! let body = provider.generate("test prompt").await.unwrap();
//! assert_eq!(body, r#"{"title": "Engineer"}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod chat;

use resume_domain::LlmProvider as LlmProviderTrait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use chat::{ChatCompletionsProvider, EndpointConfig, MAX_TOKENS, TEMPERATURE, TOP_P};

/// Errors that can occur while talking to the extraction endpoint
#[derive(Error, Debug)]
pub enum LlmError {
    /// The endpoint answered with a non-success status
    #[error("API call failed with status code {status}: {body}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The request never produced an HTTP status
    #[error("Communication error: {0}")]
    Communication(String),

    /// Provider could not be built from its configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LlmError {
    /// HTTP status carried by a transport failure
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A scripted reply of the [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Success with the given body
    Body(String),
    /// Non-success status with the given body
    Status(u16, String),
}

/// Mock provider for deterministic testing
///
/// Replies are taken from the script queue in order; once it is empty every
/// call gets the default body. Prompts are recorded so tests can inspect what
/// the pipeline sent.
///
/// # Examples
///
/// ```
/// use resume_llm::{LlmError, MockProvider};
/// use resume_domain::LlmProvider;
///
/// # async fn example() {
/// let provider = MockProvider::new("{}");
/// provider.push_status(500, "boom");
///
/// let err = provider.generate("first").await.unwrap_err();
/// assert_eq!(err.status(), Some(500));
/// assert_eq!(provider.generate("second").await.unwrap(), "{}");
/// assert_eq!(provider.prompts(), vec!["first", "second"]);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_body: String,
    script: Arc<Mutex<VecDeque<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider answering every prompt with `body`
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            default_body: body.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful reply
    pub fn push_body(&self, body: impl Into<String>) {
        self.push(MockReply::Body(body.into()));
    }

    /// Queue a non-success status reply
    pub fn push_status(&self, status: u16, body: impl Into<String>) {
        self.push(MockReply::Status(status, body.into()));
    }

    /// Queue a reply
    pub fn push(&self, reply: MockReply) {
        self.script.lock().unwrap().push_back(reply);
    }

    /// Number of times generate was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Body(body)) => Ok(body),
            Some(MockReply::Status(status, body)) => Err(LlmError::Transport { status, body }),
            None => Ok(self.default_body.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_script_order() {
        let provider = MockProvider::default();
        provider.push_body("one");
        provider.push_status(401, "unauthorized");
        provider.push_body("three");

        assert_eq!(provider.generate("a").await.unwrap(), "one");
        let err = provider.generate("b").await.unwrap_err();
        assert!(matches!(err, LlmError::Transport { status: 401, ref body } if body == "unauthorized"));
        assert_eq!(provider.generate("c").await.unwrap(), "three");
        assert_eq!(provider.generate("d").await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_mock_provider_records_prompts() {
        let provider = MockProvider::new("ok");
        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").await.unwrap();
        provider.generate("prompt2").await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["prompt1", "prompt2"]);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_error_status() {
        let err = LlmError::Transport { status: 500, body: "boom".to_string() };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "API call failed with status code 500: boom");
        assert_eq!(LlmError::Communication("down".to_string()).status(), None);
    }
}
