//! Init command implementation.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the init command.
pub fn execute_init(args: InitArgs, path: Option<&Path>, formatter: &Formatter) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };

    if path.exists() && !args.force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists. Use --force to overwrite",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote configuration to {}", path.display()))
    );

    Ok(path)
}
