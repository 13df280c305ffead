//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::output::Formatter;
use resume_validator::validate;
use serde_json::Value;
use std::fs;

/// Execute the validate command.
///
/// Returns whether the file holds a valid profile.
pub fn execute_validate(args: ValidateArgs, formatter: &Formatter) -> Result<bool> {
    let contents = fs::read_to_string(&args.file)?;
    let raw: Value = serde_json::from_str(&contents)?;

    let result = validate(&raw);
    println!("{}", formatter.format_validation(&result)?);

    Ok(result.is_ok())
}
