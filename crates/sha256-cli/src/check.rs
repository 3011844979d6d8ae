//! # Check Subcommand
//!
//! Recomputes the digest of one input and compares it with an expected
//! value. The expected value goes through [`Digest::from_hex`], so a
//! malformed digest (wrong length, non-hex characters) is an error rather
//! than a silent mismatch.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use sha256_core::Digest;

use crate::config::CliConfig;
use crate::hash::hash_source;
use crate::input::InputSource;

/// Exit code for a digest that does not match.
pub const EXIT_MISMATCH: u8 = 1;

/// Arguments for the `sha256 check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Expected SHA-256 digest, 64 hex characters.
    #[arg(long, value_name = "HEX")]
    pub expected: String,

    /// Check a literal string instead of a file.
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// File to check. `-` or omitted reads stdin.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl CheckArgs {
    fn source(&self) -> InputSource {
        match (&self.text, &self.file) {
            (Some(text), _) => InputSource::Text(text.clone()),
            (None, Some(path)) => InputSource::from_path_arg(path),
            (None, None) => InputSource::Stdin,
        }
    }
}

/// Execute the check subcommand, writing the verdict to stdout.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    run_check_to(args, config, &mut stdout.lock())
}

/// Execute the check subcommand, writing the verdict to `out`.
pub fn run_check_to<W: Write>(args: &CheckArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let expected: Digest = args
        .expected
        .trim()
        .parse()
        .with_context(|| format!("invalid expected digest: {}", args.expected))?;

    let report = hash_source(&args.source(), config)?;
    if report.digest == expected {
        writeln!(out, "OK: {}  {}", report.digest, report.name)?;
        Ok(0)
    } else {
        tracing::warn!(input = %report.name, %expected, actual = %report.digest, "digest mismatch");
        writeln!(
            out,
            "MISMATCH: {}  expected={} actual={}",
            report.name, expected, report.digest
        )?;
        Ok(EXIT_MISMATCH)
    }
}
