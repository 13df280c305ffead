//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use resume_extractor::ResponseShape;
use std::path::PathBuf;

/// Resume Extract - Turn resumes into validated candidate profiles.
#[derive(Debug, Parser)]
#[command(name = "resume-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (document ids only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract candidate profiles from resume files
    Extract(ExtractArgs),

    /// Print the normalized text of a resume
    Normalize(NormalizeArgs),

    /// Validate a raw profile JSON file
    Validate(ValidateArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Resume files (plain text, or PDF by extension), processed in the order given
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Extraction endpoint URL
    #[arg(long, env = "RESUME_EXTRACT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Credential sent in the api-key header
    #[arg(long, env = "RESUME_EXTRACT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Where the profile JSON sits in the response body
    #[arg(long, value_enum)]
    pub response_shape: Option<ShapeArg>,
}

/// Response shape options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShapeArg {
    /// The body is the profile JSON
    Direct,
    /// The profile JSON is in choices[0].message.content
    ChatCompletion,
}

impl From<ShapeArg> for ResponseShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Direct => ResponseShape::Direct,
            ShapeArg::ChatCompletion => ResponseShape::ChatCompletion,
        }
    }
}

/// Arguments for the normalize command.
#[derive(Debug, Parser)]
pub struct NormalizeArgs {
    /// Resume file to normalize (plain text or PDF)
    pub file: PathBuf,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// JSON file holding a raw profile
    pub file: PathBuf,
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_args() {
        let cli = Cli::try_parse_from([
            "resume-extract",
            "extract",
            "a.txt",
            "b.txt",
            "--endpoint",
            "https://example.com/chat",
            "--response-shape",
            "chat-completion",
        ])
        .unwrap();

        let Command::Extract(args) = cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.endpoint.as_deref(), Some("https://example.com/chat"));
        assert_eq!(args.response_shape, Some(ShapeArg::ChatCompletion));
    }

    #[test]
    fn test_extract_requires_files() {
        assert!(Cli::try_parse_from(["resume-extract", "extract"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "resume-extract",
            "validate",
            "raw.json",
            "--format",
            "json",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Validate(_)));
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(OutputFormat::from(CliFormat::Quiet), OutputFormat::Quiet);
        assert_eq!(ResponseShape::from(ShapeArg::Direct), ResponseShape::Direct);
    }
}
