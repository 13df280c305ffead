//! Resume Extract Extractor
//!
//! Converts resume text into a validated candidate profile using a language
//! model.
//!
//! # Overview
//!
//! Each document goes through three steps, strictly one document at a time:
//!
//! ```text
//! raw text → normalize → ExtractionClient → LLM → raw JSON → validate → CandidateProfile
//! ```
//!
//! # Key Features
//!
//! - **Normalization**: lowercase, markup stripping, punctuation and stop-word
//!   removal before prompting
//! - **Schema template prompt**: the target record is described to the model as
//!   an annotated JSON example
//! - **Single-attempt extraction**: transport failures are returned with their
//!   status and body, never retried
//! - **Failure isolation**: a batch keeps going after any document fails
//!
//! # Example Usage
//!
//! ```no_run
//! use resume_extractor::{Document, ExtractorConfig, Pipeline};
//! use resume_llm::{ChatCompletionsProvider, EndpointConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = EndpointConfig::new("https://example.openai.azure.com/chat", "secret");
//! let provider = ChatCompletionsProvider::new(endpoint)?;
//! let pipeline = Pipeline::new(provider, ExtractorConfig::default())?;
//!
//! let report = pipeline
//!     .process_batch(vec![Document::new("ada.txt", "Ada Lovelace, London ...")])
//!     .await;
//!
//! println!("Succeeded: {}", report.succeeded());
//! println!("Failed: {}", report.failed());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
pub mod normalize;
mod parser;
mod pipeline;
mod prompt;
pub mod template;
mod types;


pub use client::ExtractionClient;
pub use config::{ExtractorConfig, ResponseShape};
pub use error::ExtractorError;
pub use normalize::normalize;
pub use parser::decode_response;
pub use pipeline::Pipeline;
pub use prompt::PromptBuilder;
pub use template::schema_template;
pub use types::{BatchReport, Document, DocumentOutcome, OutcomeMetadata};
