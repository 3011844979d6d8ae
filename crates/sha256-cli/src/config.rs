//! CLI configuration.
//!
//! Limits that protect the process from pathologically large inputs. The
//! hashing core has no configuration of its own, so everything tunable
//! lives here. Override via environment variables or explicit construction.

use thiserror::Error;

/// Default upper bound on a single input: 1 GiB.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1 << 30;

/// Default read chunk: 64 KiB.
pub const DEFAULT_READ_CHUNK_BYTES: usize = 64 * 1024;

/// Runtime limits for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Largest input, in bytes, that will be read into memory and hashed.
    pub max_input_bytes: u64,
    /// Chunk size used when reading files and stdin.
    pub read_chunk_bytes: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            read_chunk_bytes: DEFAULT_READ_CHUNK_BYTES,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SHA256_MAX_INPUT_BYTES` (default: 1073741824)
    /// - `SHA256_READ_CHUNK_BYTES` (default: 65536, must be non-zero)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let max_input_bytes = parse_var(
            &lookup,
            "SHA256_MAX_INPUT_BYTES",
            defaults.max_input_bytes,
        )?;
        let read_chunk_bytes = parse_var(
            &lookup,
            "SHA256_READ_CHUNK_BYTES",
            defaults.read_chunk_bytes,
        )?;
        if read_chunk_bytes == 0 {
            return Err(ConfigError::ZeroChunk);
        }
        Ok(Self {
            max_input_bytes,
            read_chunk_bytes,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
    #[error("SHA256_READ_CHUNK_BYTES must be greater than zero")]
    ZeroChunk,
}
