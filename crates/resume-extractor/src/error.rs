//! Error types for the Extractor

use resume_llm::LlmError;
use resume_validator::ValidationError;
use thiserror::Error;

/// Errors that can end the processing of one document
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Non-success status from the extraction endpoint
    #[error("API call failed with status code {status}: {body}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The request never produced a response
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body is not JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON parsed but does not match the profile schema
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Short machine-readable label for reporting
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractorError::Transport { .. } => "transport",
            ExtractorError::Communication(_) => "communication",
            ExtractorError::MalformedResponse(_) => "malformed_response",
            ExtractorError::Validation(_) => "validation",
            ExtractorError::Config(_) => "config",
        }
    }

    /// HTTP status of a transport failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ExtractorError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<LlmError> for ExtractorError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Transport { status, body } => ExtractorError::Transport { status, body },
            LlmError::Communication(msg) => ExtractorError::Communication(msg),
            LlmError::Config(msg) => ExtractorError::Config(msg),
        }
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::MalformedResponse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_conversion_keeps_status_and_body() {
        let err: ExtractorError = LlmError::Transport {
            status: 401,
            body: "Access denied".to_string(),
        }
        .into();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.kind(), "transport");
        assert_eq!(err.to_string(), "API call failed with status code 401: Access denied");
    }

    #[test]
    fn test_json_error_is_malformed_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: ExtractorError = json_err.into();
        assert_eq!(err.kind(), "malformed_response");
        assert_eq!(err.status(), None);
    }
}
