//! TNV CLI - Main entry point

use clap::Parser;
use std::process;
use tnv_cli::{Cli, Commands};
use tnv_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use tracing::error;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        // Verbose mode: log to console with debug level
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("tnv")
            .build()
    } else {
        // Normal mode: warnings and errors only
        LogConfig::builder()
            .level(LogLevel::Warn)
            .output(LogOutput::Console)
            .log_file_prefix("tnv")
            .build()
    };

    // Merge with environment variables (they take precedence)
    let log_config = log_config
        .clone()
        .with_env_overrides()
        .unwrap_or(log_config);

    // Initialize logging (ignore errors as the CLI works without logging)
    let _ = init_logging(&log_config);

    // Execute command
    let result = match &cli.command {
        Commands::Validate(args) => tnv_cli::commands::validate::run(args),
        Commands::Lookup(args) => tnv_cli::commands::lookup::run(args),
    };

    // Handle result
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
