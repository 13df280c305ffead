//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::read_document_text;
use crate::output::Formatter;
use resume_domain::LlmProvider;
use resume_extractor::{Document, Pipeline};
use resume_llm::{ChatCompletionsProvider, LlmError};
use std::path::PathBuf;
use tracing::debug;

/// Execute the extract command.
///
/// Returns whether every document produced a profile.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<bool> {
    // Unreadable input stops the run before anything is sent
    let documents = load_documents(&args.files)?;

    let endpoint = config.resolve_endpoint(args.endpoint, args.api_key)?;
    debug!("Using endpoint {:?}", endpoint);

    let mut extractor_config = config.extractor.clone();
    if let Some(shape) = args.response_shape {
        extractor_config.response_shape = shape.into();
    }

    let provider = ChatCompletionsProvider::new(endpoint)?;
    let pipeline = Pipeline::new(provider, extractor_config)?;

    run_batch(&pipeline, documents, formatter).await
}

/// Process documents and print the report.
pub async fn run_batch<L>(
    pipeline: &Pipeline<L>,
    documents: Vec<Document>,
    formatter: &Formatter,
) -> Result<bool>
where
    L: LlmProvider<Error = LlmError>,
{
    eprintln!(
        "{}",
        formatter.info(&format!("Processing {} resume(s)", documents.len()))
    );

    let report = pipeline.process_batch(documents).await;
    println!("{}", formatter.format_report(&report)?);
    Ok(report.failed() == 0)
}

/// Read each file into a document whose id is the path as given.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>> {
    paths
        .iter()
        .map(|path| {
            let text = read_document_text(path).map_err(|e| match e {
                CliError::Io(e) => {
                    CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
                }
                other => other,
            })?;
            Ok(Document::new(path.display().to_string(), text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use resume_extractor::ExtractorConfig;
    use resume_llm::MockProvider;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PROFILE: &str = include_str!("../../tests/fixtures/profile.json");

    #[test]
    fn test_load_documents_keeps_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "first").unwrap();
        fs::write(&b, "second").unwrap();

        let docs = load_documents(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(docs[0].id, b.display().to_string());
        assert_eq!(docs[0].text, "second");
        assert_eq!(docs[1].text, "first");
    }

    #[test]
    fn test_load_documents_mixes_pdf_and_text() {
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        let pdf = fixtures.join("resume.pdf");
        let txt = fixtures.join("resume.txt");

        let docs = load_documents(&[pdf.clone(), txt]).unwrap();
        assert_eq!(docs[0].id, pdf.display().to_string());
        assert!(docs[0].text.contains("Grace Hopper"));
        assert!(!docs[0].text.starts_with("%PDF"));
    }

    #[test]
    fn test_load_documents_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_documents(&[dir.path().join("missing.txt")]);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_run_batch_reports_failures() {
        let provider = MockProvider::default();
        provider.push_body(PROFILE);
        provider.push_status(500, "Internal Server Error");

        let pipeline = Pipeline::new(provider.clone(), ExtractorConfig::default()).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let all_ok = run_batch(
            &pipeline,
            vec![
                Document::new("resumes/grace.txt", "grace hopper"),
                Document::new("resumes/alan.txt", "alan turing"),
            ],
            &formatter,
        )
        .await
        .unwrap();

        assert!(!all_ok);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_run_batch_all_succeed() {
        let pipeline = Pipeline::new(MockProvider::new(PROFILE), ExtractorConfig::default()).unwrap();
        let formatter = Formatter::new(OutputFormat::Json, false);

        let all_ok = run_batch(&pipeline, vec![Document::new("grace.txt", "grace")], &formatter)
            .await
            .unwrap();
        assert!(all_ok);
    }
}
