//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Endpoint provider could not be created
    #[error("Provider error: {0}")]
    Provider(#[from] resume_llm::LlmError),

    /// Pipeline could not be created
    #[error("Extractor error: {0}")]
    Extractor(#[from] resume_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// PDF input yielded no text
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
