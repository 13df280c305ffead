//! Request and outcome types for document processing

use crate::error::ExtractorError;
use resume_domain::CandidateProfile;
use serde_json::Value;

/// One resume to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Caller-chosen identifier (file name, row id, ...)
    pub id: String,

    /// Raw resume text
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Result of processing one document
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Identifier of the processed document
    pub document_id: String,

    /// Validated profile or the error that stopped processing
    pub result: Result<CandidateProfile, ExtractorError>,

    /// Decoded model answer, kept so a rejected profile can be inspected.
    /// `None` when the request or the decoding failed.
    pub raw_response: Option<Value>,

    /// Metadata about the processing
    pub metadata: OutcomeMetadata,
}

impl DocumentOutcome {
    /// Whether a profile was produced
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Metadata about one document's processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeMetadata {
    /// Length of the normalized text in bytes
    pub normalized_length: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Seconds since the Unix epoch when processing finished
    pub timestamp: u64,

    /// Model label from the configuration
    pub model_name: String,
}

/// Outcomes of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per input document
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Number of documents that produced a profile
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of documents that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Total number of documents
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the batch was empty
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
