//! Reading resume files into plain text.
//!
//! The pipeline only ever sees text: PDF files, chosen by extension, are
//! converted here; anything else is read as UTF-8.

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a resume file as plain text.
pub fn read_document_text(path: &Path) -> Result<String> {
    if !is_pdf(path) {
        return Ok(fs::read_to_string(path)?);
    }

    let bytes = fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| CliError::Pdf(format!("{}: {}", path.display(), e)))?;

    // Scanned PDFs have pages but no text layer
    if text.trim().is_empty() {
        return Err(CliError::Pdf(format!(
            "{}: no extractable text",
            path.display()
        )));
    }

    debug!("Extracted {} chars from PDF {}", text.len(), path.display());
    Ok(text)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(Path::new("cv.pdf")));
        assert!(is_pdf(Path::new("CV.PDF")));
        assert!(!is_pdf(Path::new("cv.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn test_reads_pdf_text() {
        let text = read_document_text(&fixture("resume.pdf")).unwrap();
        assert!(text.contains("Grace Hopper"), "{text:?}");
        assert!(text.contains("COBOL"), "{text:?}");
    }

    #[test]
    fn test_reads_plain_text() {
        let text = read_document_text(&fixture("resume.txt")).unwrap();
        assert!(!text.is_empty());
    }

    #[test]
    fn test_invalid_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, "plain text pretending to be a PDF").unwrap();

        let result = read_document_text(&path);
        assert!(matches!(result, Err(CliError::Pdf(_))));
    }
}
