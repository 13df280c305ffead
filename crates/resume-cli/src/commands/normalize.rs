//! Normalize command implementation.

use crate::cli::NormalizeArgs;
use crate::error::Result;
use crate::input::read_document_text;
use resume_extractor::normalize;

/// Execute the normalize command.
pub fn execute_normalize(args: NormalizeArgs) -> Result<()> {
    let text = read_document_text(&args.file)?;
    println!("{}", normalize(&text));
    Ok(())
}
