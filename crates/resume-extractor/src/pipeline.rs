//! Normalize → Extract → Validate, one document at a time

use crate::client::ExtractionClient;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::normalize::normalize;
use crate::types::{BatchReport, Document, DocumentOutcome, OutcomeMetadata};
use resume_domain::{CandidateProfile, LlmProvider};
use resume_llm::LlmError;
use resume_validator::validate;
use serde_json::Value;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Runs documents through normalization, extraction and validation
pub struct Pipeline<L> {
    client: ExtractionClient<L>,
    config: ExtractorConfig,
}

impl<L> Pipeline<L>
where
    L: LlmProvider<Error = LlmError>,
{
    /// Create a new Pipeline
    pub fn new(provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let client = ExtractionClient::new(provider).with_response_shape(config.response_shape);
        Ok(Self { client, config })
    }

    /// Replace the schema template embedded in the prompt
    pub fn with_template(mut self, template: Value) -> Self {
        self.client = self.client.with_template(template);
        self
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Process raw text into a validated profile
    pub async fn run(&self, raw_text: &str) -> Result<CandidateProfile, ExtractorError> {
        let normalized = normalize(raw_text);
        let (result, _) = self.extract_and_validate(&normalized).await;
        result
    }

    /// Process one document, capturing its result and metadata
    pub async fn process(&self, document: &Document) -> DocumentOutcome {
        let start = Instant::now();

        let normalized = normalize(&document.text);
        debug!(
            "Normalized '{}': {} -> {} chars",
            document.id,
            document.text.len(),
            normalized.len()
        );

        let (result, raw_response) = self.extract_and_validate(&normalized).await;

        let metadata = OutcomeMetadata {
            normalized_length: normalized.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            model_name: self.config.model_name.clone(),
        };

        match &result {
            Ok(_) => info!(
                "Extracted profile for '{}' in {} ms",
                document.id, metadata.processing_time_ms
            ),
            Err(e) => warn!("Failed to process '{}': {}", document.id, e),
        }

        DocumentOutcome {
            document_id: document.id.clone(),
            result,
            raw_response,
            metadata,
        }
    }

    /// Process documents strictly in order; a failure never stops the batch
    pub async fn process_batch<I>(&self, documents: I) -> BatchReport
    where
        I: IntoIterator<Item = Document>,
    {
        let documents: Vec<Document> = documents.into_iter().collect();
        let total = documents.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, document) in documents.iter().enumerate() {
            info!("Processing resume {} of {}: '{}'", i + 1, total, document.id);
            outcomes.push(self.process(document).await);
        }

        let report = BatchReport { outcomes };
        info!(
            "Batch complete: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }

    /// Extract and validate, handing back the decoded answer when there is one
    async fn extract_and_validate(
        &self,
        normalized: &str,
    ) -> (Result<CandidateProfile, ExtractorError>, Option<Value>) {
        let raw = match self.client.extract(normalized).await {
            Ok(raw) => raw,
            Err(e) => return (Err(e), None),
        };
        let result = validate(&raw).map_err(ExtractorError::from);
        (result, Some(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_llm::MockProvider;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ExtractorConfig {
            model_name: String::new(),
            ..ExtractorConfig::default()
        };
        let result = Pipeline::new(MockProvider::default(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[tokio::test]
    async fn test_prompt_contains_normalized_text() {
        let provider = MockProvider::new("{}");
        let pipeline = Pipeline::new(provider.clone(), ExtractorConfig::default()).unwrap();

        let _ = pipeline.run("<p>I am the Lead Engineer!</p>").await;

        let prompt = &provider.prompts()[0];
        assert!(prompt.ends_with("\n\nlead engineer"));
    }

    #[tokio::test]
    async fn test_outcome_metadata() {
        let pipeline = Pipeline::new(MockProvider::new("{}"), ExtractorConfig::default()).unwrap();
        let outcome = pipeline
            .process(&Document::new("doc-1", "Rust and Go"))
            .await;

        assert_eq!(outcome.document_id, "doc-1");
        assert_eq!(outcome.metadata.normalized_length, "rust go".len());
        assert_eq!(outcome.metadata.model_name, "chat-completions");
        assert!(outcome.metadata.timestamp > 0);
        assert!(matches!(outcome.result, Err(ExtractorError::Validation(_))));
        assert_eq!(outcome.raw_response, Some(serde_json::json!({})));
    }

    #[tokio::test]
    async fn test_no_raw_response_on_transport_failure() {
        let provider = MockProvider::default();
        provider.push_status(503, "Service Unavailable");
        let pipeline = Pipeline::new(provider, ExtractorConfig::default()).unwrap();

        let outcome = pipeline.process(&Document::new("doc-1", "rust")).await;
        assert!(matches!(outcome.result, Err(ExtractorError::Transport { .. })));
        assert!(outcome.raw_response.is_none());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let provider = MockProvider::default();
        let pipeline = Pipeline::new(provider.clone(), ExtractorConfig::default()).unwrap();
        let report = pipeline.process_batch(Vec::new()).await;

        assert!(report.is_empty());
        assert_eq!(provider.call_count(), 0);
    }
}
