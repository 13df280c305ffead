//! Validation error types

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Message carried by every education-year range violation
pub const YEAR_CONSTRAINT_MESSAGE: &str = "Year must be greater than or equal to 1900";

/// Category of a single field violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Required field absent or null
    Missing,

    /// Present with the wrong primitive type
    WrongType,

    /// Present but not an absolute http(s) URL
    InvalidUrl,

    /// Value outside its allowed range
    ConstraintViolation,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldErrorKind::Missing => "missing",
            FieldErrorKind::WrongType => "wrong type",
            FieldErrorKind::InvalidUrl => "invalid url",
            FieldErrorKind::ConstraintViolation => "constraint violation",
        };
        f.write_str(label)
    }
}

/// One failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `experience[0].company_information.is_faang`
    pub path: String,

    /// Category of the failure
    pub kind: FieldErrorKind,

    /// Human-readable reason
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.kind)
    }
}

/// A raw response that does not conform to the profile schema
///
/// Holds one entry per failing field; it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", summarize(.entries))]
pub struct ValidationError {
    entries: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(entries: Vec<FieldError>) -> Self {
        Self { entries }
    }

    /// All failing fields in the order they were checked
    pub fn entries(&self) -> &[FieldError] {
        &self.entries
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no failing fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry for the given path
    pub fn find(&self, path: &str) -> Option<&FieldError> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Whether any entry is a range violation
    pub fn has_constraint_violation(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.kind == FieldErrorKind::ConstraintViolation)
    }
}

fn summarize(entries: &[FieldError]) -> String {
    let listed = entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!(
        "{} validation error(s) for CandidateProfile: {}",
        entries.len(),
        listed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_entry() {
        let err = ValidationError::new(vec![
            FieldError {
                path: "title".to_string(),
                kind: FieldErrorKind::Missing,
                message: "Field required".to_string(),
            },
            FieldError {
                path: "education.year_of_start".to_string(),
                kind: FieldErrorKind::ConstraintViolation,
                message: YEAR_CONSTRAINT_MESSAGE.to_string(),
            },
        ]);

        let text = err.to_string();
        assert!(text.starts_with("2 validation error(s)"));
        assert!(text.contains("title: Field required (missing)"));
        assert!(text.contains("education.year_of_start: Year must be greater than or equal to 1900"));
        assert!(err.has_constraint_violation());
    }

    #[test]
    fn test_entries_serialize_for_reporting() {
        let err = ValidationError::new(vec![FieldError {
            path: "personal_information.linkedIn".to_string(),
            kind: FieldErrorKind::InvalidUrl,
            message: "Input should be a valid URL".to_string(),
        }]);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["entries"][0]["kind"], "invalid_url");
        assert_eq!(json["entries"][0]["path"], "personal_information.linkedIn");
    }
}
