//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use resume_domain::CandidateProfile;
use resume_extractor::{BatchReport, DocumentOutcome, ExtractorError};
use resume_validator::{FieldError, ValidationError};
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest error text shown in a table cell
const DETAIL_WIDTH: usize = 72;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a batch.
    pub fn format_report(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let outcomes = report
                    .outcomes
                    .iter()
                    .map(outcome_json)
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_json::to_string_pretty(&outcomes)?)
            }
            OutputFormat::Table => self.format_report_table(report),
            OutputFormat::Quiet => Ok(report
                .outcomes
                .iter()
                .filter(|o| o.is_success())
                .map(|o| o.document_id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the result of validating one raw profile.
    pub fn format_validation(
        &self,
        result: &std::result::Result<CandidateProfile, ValidationError>,
    ) -> Result<String> {
        match (self.format, result) {
            (OutputFormat::Json, Ok(profile)) => Ok(serde_json::to_string_pretty(profile)?),
            (OutputFormat::Json, Err(e)) => Ok(serde_json::to_string_pretty(
                &json!({ "errors": e.entries() }),
            )?),
            (OutputFormat::Table, Ok(profile)) => Ok(self.success(&format!(
                "Valid profile for {}",
                profile.personal_information.name
            ))),
            (OutputFormat::Table, Err(e)) => Ok(format!(
                "{}\n{}",
                self.error(&format!("{} validation error(s)", e.len())),
                field_error_table(e.entries())
            )),
            (OutputFormat::Quiet, Ok(_)) => Ok(String::new()),
            (OutputFormat::Quiet, Err(e)) => Ok(e
                .entries()
                .iter()
                .map(|entry| entry.path.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_report_table(&self, report: &BatchReport) -> Result<String> {
        if report.is_empty() {
            return Ok(self.colorize("No resumes processed.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Document", "Status", "Time (ms)", "Detail"]);

        for outcome in &report.outcomes {
            let time = outcome.metadata.processing_time_ms.to_string();
            let (status, detail) = match &outcome.result {
                Ok(profile) => (
                    "ok",
                    format!("{} ({})", profile.personal_information.name, profile.title),
                ),
                Err(e) => (e.kind(), truncate(&e.to_string(), DETAIL_WIDTH)),
            };
            builder.push_record([outcome.document_id.as_str(), status, time.as_str(), detail.as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = table.to_string();
        for outcome in &report.outcomes {
            if let Err(ExtractorError::Validation(e)) = &outcome.result {
                out.push('\n');
                out.push_str(&self.warning(&format!("{}:", outcome.document_id)));
                out.push('\n');
                out.push_str(&field_error_table(e.entries()));
                if let Some(raw) = &outcome.raw_response {
                    out.push('\n');
                    out.push_str(&self.info("Model response:"));
                    out.push('\n');
                    out.push_str(&serde_json::to_string_pretty(raw)?);
                }
            }
        }

        out.push('\n');
        let summary = format!(
            "{} of {} resume(s) extracted",
            report.succeeded(),
            report.len()
        );
        if report.failed() == 0 {
            out.push_str(&self.success(&summary));
        } else {
            out.push_str(&self.error(&format!("{}, {} failed", summary, report.failed())));
        }
        Ok(out)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON view of one outcome: id, status, profile or error, metadata.
///
/// Failed outcomes also carry the decoded model answer as `raw_response`,
/// null when nothing was decoded.
pub fn outcome_json(outcome: &DocumentOutcome) -> Result<Value> {
    let mut value = json!({
        "document_id": outcome.document_id,
        "status": if outcome.is_success() { "ok" } else { "error" },
    });

    match &outcome.result {
        Ok(profile) => value["profile"] = serde_json::to_value(profile)?,
        Err(e) => {
            value["error"] = error_json(e)?;
            value["raw_response"] = outcome.raw_response.clone().unwrap_or(Value::Null);
        }
    }

    value["metadata"] = json!({
        "normalized_length": outcome.metadata.normalized_length,
        "processing_time_ms": outcome.metadata.processing_time_ms,
        "timestamp": outcome.metadata.timestamp,
        "model_name": outcome.metadata.model_name,
    });
    Ok(value)
}

fn error_json(error: &ExtractorError) -> Result<Value> {
    let mut value = json!({
        "kind": error.kind(),
        "message": error.to_string(),
    });
    if let Some(status) = error.status() {
        value["status"] = status.into();
    }
    if let ExtractorError::Validation(e) = error {
        value["entries"] = serde_json::to_value(e.entries())?;
    }
    Ok(value)
}

fn field_error_table(entries: &[FieldError]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Path", "Kind", "Message"]);
    for entry in entries {
        let kind = entry.kind.to_string();
        builder.push_record([entry.path.as_str(), kind.as_str(), entry.message.as_str()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_extractor::OutcomeMetadata;
    use resume_validator::validate;

    fn metadata() -> OutcomeMetadata {
        OutcomeMetadata {
            normalized_length: 42,
            processing_time_ms: 7,
            timestamp: 1_700_000_000,
            model_name: "test-model".to_string(),
        }
    }

    fn failed_report() -> BatchReport {
        let raw = json!({"title": "Engineer"});
        BatchReport {
            outcomes: vec![
                DocumentOutcome {
                    document_id: "ada.txt".to_string(),
                    result: Err(ExtractorError::Transport {
                        status: 401,
                        body: "Access denied".to_string(),
                    }),
                    raw_response: None,
                    metadata: metadata(),
                },
                DocumentOutcome {
                    document_id: "bob.txt".to_string(),
                    result: Err(validate(&raw).unwrap_err().into()),
                    raw_response: Some(raw),
                    metadata: metadata(),
                },
            ],
        }
    }

    #[test]
    fn test_json_report() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&failed_report()).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["document_id"], "ada.txt");
        assert_eq!(parsed[0]["status"], "error");
        assert_eq!(parsed[0]["error"]["kind"], "transport");
        assert_eq!(parsed[0]["error"]["status"], 401);
        assert_eq!(parsed[0]["metadata"]["processing_time_ms"], 7);
        assert_eq!(parsed[1]["error"]["kind"], "validation");
        assert_eq!(parsed[1]["error"]["entries"][0]["kind"], "missing");
        assert!(parsed[0]["raw_response"].is_null());
        assert_eq!(parsed[1]["raw_response"], json!({"title": "Engineer"}));
    }

    #[test]
    fn test_table_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&failed_report()).unwrap();

        assert!(output.contains("Document"));
        assert!(output.contains("ada.txt"));
        assert!(output.contains("transport"));
        assert!(output.contains("personal_information"));
        assert!(output.contains("✗ 0 of 2 resume(s) extracted, 2 failed"));
        assert!(output.contains("Model response:"));
        assert!(output.contains("\"title\": \"Engineer\""));
    }

    #[test]
    fn test_quiet_report_lists_successes_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&failed_report()).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_empty_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&BatchReport::default()).unwrap();
        assert!(output.contains("No resumes processed"));
    }

    #[test]
    fn test_validation_errors_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = validate(&json!({"title": "Engineer"}));
        let output = formatter.format_validation(&result).unwrap();
        assert!(output.lines().any(|line| line == "personal_information"));
        assert!(!output.lines().any(|line| line == "title"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
