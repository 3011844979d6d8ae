//! # sha256 CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, loads
//! configuration from the environment, and dispatches to subcommand
//! handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sha256_cli::check::{run_check, CheckArgs};
use sha256_cli::config::CliConfig;
use sha256_cli::hash::{run_hash, HashArgs};

/// Exit code for usage, configuration, and I/O errors.
const EXIT_ERROR: u8 = 2;

/// FIPS 180-4 SHA-256 digests for text, files, and stdin.
#[derive(Parser, Debug)]
#[command(name = "sha256", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of each input.
    Hash(HashArgs),

    /// Verify an input against an expected digest.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    tracing::debug!(?config, "loaded configuration");

    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args, &config),
        Commands::Check(args) => run_check(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
