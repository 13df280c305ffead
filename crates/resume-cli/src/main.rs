//! Resume Extract CLI - Turn resumes into validated candidate profiles.

use anyhow::Context;
use clap::Parser;
use resume_cli::commands;
use resume_cli::{Cli, Command, Config, Formatter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only command output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run() -> anyhow::Result<bool> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Init writes the config file, so it must not require one
    let config = match cli.command {
        Command::Init(_) => Config::default(),
        _ => Config::load(cli.config.as_deref()).context("Failed to load configuration")?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let all_ok = match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter)
            .await
            .context("Extraction failed")?,
        Command::Normalize(args) => {
            commands::execute_normalize(args)?;
            true
        }
        Command::Validate(args) => commands::execute_validate(args, &formatter)?,
        Command::Init(args) => {
            commands::execute_init(args, cli.config.as_deref(), &formatter)?;
            true
        }
    };

    Ok(all_ok)
}
