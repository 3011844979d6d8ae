//! # Error Types
//!
//! The hashing pipeline itself is total and never fails. Errors only arise
//! at the typed edges of the crate: building a [`Block`](crate::Block) from
//! an arbitrary slice and parsing a [`Digest`](crate::Digest) from text.
//! All errors use `thiserror` for derive-based `Display` and `Error`.

use thiserror::Error;

/// Errors produced by the fallible constructors of `sha256-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sha256Error {
    /// A block must be exactly one 512-bit chunk.
    #[error("invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A hex digest must be exactly 64 characters.
    #[error("invalid digest length: expected 64 hex chars, got {0}")]
    InvalidDigestLength(usize),

    /// A hex digest contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidHex {
        /// Zero-based character offset.
        position: usize,
        /// The offending character.
        character: char,
    },
}
