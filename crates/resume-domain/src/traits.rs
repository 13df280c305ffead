//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Trait for language-model provider operations
///
/// Implemented by the infrastructure layer (resume-llm). A provider receives
/// the complete prompt and answers with the raw response body; it performs a
/// single attempt and never interprets the body.
pub trait LlmProvider {
    /// Error type for provider operations
    type Error;

    /// Send one prompt and return the raw response body
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
