//! # Input Sources
//!
//! Resolves CLI arguments into byte buffers for hashing. Every source is
//! read under the [`CliConfig`] size limit, so an oversized file or stream
//! fails before it exhausts memory.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::CliConfig;

/// Where a message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A literal text argument, hashed as UTF-8.
    Text(String),
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl InputSource {
    /// Interpret a positional path argument; `-` means stdin.
    pub fn from_path_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Label printed next to the digest.
    pub fn name(&self) -> String {
        match self {
            Self::Text(text) => format!("{text:?}"),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "-".to_string(),
        }
    }

    /// Read the full message, refusing anything over the configured limit.
    pub fn read(&self, config: &CliConfig) -> Result<Vec<u8>> {
        match self {
            Self::Text(text) => {
                check_limit(text.len() as u64, config, "text argument")?;
                Ok(text.as_bytes().to_vec())
            }
            Self::File(path) => {
                let metadata = std::fs::metadata(path)
                    .with_context(|| format!("failed to stat file: {}", path.display()))?;
                if metadata.is_dir() {
                    bail!("is a directory: {}", path.display());
                }
                check_limit(metadata.len(), config, &path.display().to_string())?;
                let file = std::fs::File::open(path)
                    .with_context(|| format!("failed to open file: {}", path.display()))?;
                read_bounded(file, config, &path.display().to_string())
            }
            Self::Stdin => read_bounded(std::io::stdin().lock(), config, "stdin"),
        }
    }
}

fn check_limit(len: u64, config: &CliConfig, what: &str) -> Result<()> {
    if len > config.max_input_bytes {
        bail!(
            "{what} is {len} bytes, above the limit of {} bytes (SHA256_MAX_INPUT_BYTES)",
            config.max_input_bytes
        );
    }
    Ok(())
}

/// Read `reader` to the end in `read_chunk_bytes` chunks, failing as soon
/// as more than `max_input_bytes` have been seen.
pub fn read_bounded<R: Read>(reader: R, config: &CliConfig, what: &str) -> Result<Vec<u8>> {
    let mut limited = reader.take(config.max_input_bytes.saturating_add(1));
    let mut buf = Vec::new();
    let mut chunk = vec![0u8; config.read_chunk_bytes];
    loop {
        let n = limited
            .read(&mut chunk)
            .with_context(|| format!("failed to read {what}"))?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        check_limit(buf.len() as u64, config, what)?;
    }
    tracing::debug!(source = what, bytes = buf.len(), "read input");
    Ok(buf)
}
