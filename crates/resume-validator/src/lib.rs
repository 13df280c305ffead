//! Resume Extract Validator
//!
//! Checks a raw model response against the candidate profile schema and builds
//! the immutable [`CandidateProfile`](resume_domain::CandidateProfile).
//!
//! The validator provides:
//! - Required-field and primitive-type checks with full field paths
//! - Optional absolute URL checks for profile links
//! - A pre-coercion range check on education years (≥ 1900)
//! - Recursive validation of every nested record
//! - Reporting of every violation, not just the first one
//!
//! # Examples
//!
//! ```
//! use resume_validator::validate;
//! use serde_json::json;
//!
//! let err = validate(&json!({"title": 42})).unwrap_err();
//! assert!(err.find("title").is_some());
//! assert!(err.find("personal_information").is_some());
//! ```

#![warn(missing_docs)]

mod error;
mod fields;
mod validator;

pub use error::{FieldError, FieldErrorKind, ValidationError, YEAR_CONSTRAINT_MESSAGE};
pub use validator::validate;
