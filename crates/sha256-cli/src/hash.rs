//! # Hash Subcommand
//!
//! Hashes text arguments, files, and stdin. Plain output follows the
//! `sha256sum` layout (`<digest>  <name>`); `--json` prints an array of
//! [`HashReport`] objects instead.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use sha256_core::Digest;

use crate::config::CliConfig;
use crate::input::InputSource;

/// Arguments for the `sha256 hash` subcommand.
#[derive(Args, Debug, Default)]
pub struct HashArgs {
    /// Hash a literal string (UTF-8). May be repeated.
    #[arg(short, long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Files to hash. `-` reads stdin. Reads stdin when nothing is given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Emit a JSON array instead of `sha256sum`-style lines.
    #[arg(long)]
    pub json: bool,
}

impl HashArgs {
    /// Resolve the arguments into input sources, in command-line order:
    /// text arguments first, then files.
    pub fn sources(&self) -> Vec<InputSource> {
        let mut sources: Vec<InputSource> =
            self.texts.iter().cloned().map(InputSource::Text).collect();
        sources.extend(self.files.iter().map(|p| InputSource::from_path_arg(p)));
        if sources.is_empty() {
            sources.push(InputSource::Stdin);
        }
        sources
    }
}

/// One hashed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashReport {
    /// Display name of the input.
    pub name: String,
    /// SHA-256 digest of the input.
    pub digest: Digest,
    /// Input length in bytes.
    pub bytes: usize,
}

/// Hash a single source.
pub fn hash_source(source: &InputSource, config: &CliConfig) -> Result<HashReport> {
    let data = source.read(config)?;
    let digest = sha256_core::digest(&data);
    tracing::info!(input = %source.name(), %digest, "hashed input");
    Ok(HashReport {
        name: source.name(),
        digest,
        bytes: data.len(),
    })
}

/// Execute the hash subcommand, writing results to stdout.
pub fn run_hash(args: &HashArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    run_hash_to(args, config, &mut stdout.lock())
}

/// Execute the hash subcommand, writing results to `out`.
pub fn run_hash_to<W: Write>(args: &HashArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let reports = args
        .sources()
        .iter()
        .map(|source| hash_source(source, config))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &reports).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        for report in &reports {
            writeln!(out, "{}  {}", report.digest, report.name)?;
        }
    }
    Ok(0)
}
