//! # sha256-core: FIPS 180-4 SHA-256
//!
//! A self-contained implementation of the SHA-256 Merkle–Damgård
//! construction. The crate exposes one operation that matters, [`hash()`],
//! plus the building blocks it is assembled from so each stage can be
//! tested in isolation.
//!
//! ## Pipeline
//!
//! ```text
//! message ─► PaddedMessage ─► Block* ─► WordSchedule ─► HashState ─► Digest
//!            (padding)        (block)   (compression)   (compression) (digest)
//! ```
//!
//! 1. **Padding** appends `0x80`, zero bytes, and the 64-bit big-endian bit
//!    length so the result is a whole number of 512-bit blocks.
//! 2. **Block** turns 64 bytes into the first 16 big-endian schedule words.
//! 3. **Compression** expands the schedule to 64 words and runs 64 rounds
//!    over the working registers, then folds them into the running state.
//! 4. **Digest** renders the 8 state words as 64 lowercase hex characters.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No process-wide mutable state: every call to [`hash()`] owns its
//!   buffers, so concurrent callers never share anything.
//! - Not a general cryptography library. No HMAC, no streaming API, no
//!   constant-time guarantees.

#![forbid(unsafe_code)]

pub mod bitops;
pub mod block;
pub mod compression;
pub mod constants;
pub mod digest;
pub mod error;
pub mod padding;
pub mod pipeline;

// Re-export primary types for ergonomic imports.
pub use block::Block;
pub use compression::{HashState, Register, WordSchedule, WorkingState};
pub use digest::Digest;
pub use error::Sha256Error;
pub use padding::PaddedMessage;
pub use pipeline::{digest, hash, Sha256};
