//! # sha256-cli: Command-Line Front-End
//!
//! A thin clap-based wrapper around [`sha256_core::hash`]. The CLI only
//! gathers input and prints results; no hashing logic lives here.
//!
//! ## Subcommands
//!
//! - `hash`: hash text arguments, files, or stdin
//! - `check`: recompute a digest and compare it with an expected value
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handler logic.
//! - Handlers return `anyhow::Result<u8>` where the `u8` is the exit code.
//! - Input size is bounded by [`config::CliConfig`] before anything is read
//!   into memory.

pub mod check;
pub mod config;
pub mod hash;
pub mod input;
