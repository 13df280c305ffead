//! Extraction client: prompt the endpoint and decode its answer

use crate::config::ResponseShape;
use crate::error::ExtractorError;
use crate::parser::decode_response;
use crate::prompt::PromptBuilder;
use crate::template::schema_template;
use resume_domain::LlmProvider;
use resume_llm::LlmError;
use serde_json::Value;
use tracing::debug;

/// Sends normalized resume text to the endpoint and returns the raw profile JSON
pub struct ExtractionClient<L> {
    provider: L,
    template: Value,
    response_shape: ResponseShape,
}

impl<L> ExtractionClient<L>
where
    L: LlmProvider<Error = LlmError>,
{
    /// Create a client using the built-in schema template
    pub fn new(provider: L) -> Self {
        Self {
            provider,
            template: schema_template().clone(),
            response_shape: ResponseShape::Direct,
        }
    }

    /// Replace the schema template embedded in the prompt
    pub fn with_template(mut self, template: Value) -> Self {
        self.template = template;
        self
    }

    /// Set where the profile JSON sits in a successful response
    pub fn with_response_shape(mut self, shape: ResponseShape) -> Self {
        self.response_shape = shape;
        self
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Extract raw profile JSON from normalized text
    ///
    /// One request, no retry. The returned value has not been validated.
    pub async fn extract(&self, normalized_text: &str) -> Result<Value, ExtractorError> {
        let prompt = PromptBuilder::new(normalized_text, &self.template).build();
        debug!("Prompt length: {} chars", prompt.len());

        let body = self.provider.generate(&prompt).await?;
        debug!("Response length: {} chars", body.len());

        decode_response(&body, self.response_shape)
    }
}
