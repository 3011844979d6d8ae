//! # Message Block
//!
//! One 512-bit chunk of the padded message. A [`Block`] is read-only once
//! constructed and knows how to produce the first 16 words of its message
//! schedule.

use std::ops::Index;

use crate::compression::WordSchedule;
use crate::constants::{BLOCK_BYTES, BLOCK_WORDS, ROUNDS, WORD_BYTES};
use crate::error::Sha256Error;

/// A 64-byte block of the padded message.
///
/// # Invariants
///
/// - Always exactly [`BLOCK_BYTES`] bytes; the length is part of the type.
/// - The inner array is private, so a block cannot be mutated after
///   construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block([u8; BLOCK_BYTES]);

impl Block {
    /// Wrap an owned 64-byte array.
    pub fn new(bytes: [u8; BLOCK_BYTES]) -> Self {
        Self(bytes)
    }

    /// Copy a block out of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Sha256Error::InvalidBlockLength`] unless `bytes` is exactly
    /// 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Sha256Error> {
        let array: [u8; BLOCK_BYTES] =
            bytes.try_into().map_err(|_| Sha256Error::InvalidBlockLength {
                expected: BLOCK_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Size of the block in bytes. Always 64.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Access the raw block bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_BYTES] {
        &self.0
    }

    /// Build the message schedule seeded from this block.
    ///
    /// Words 0..16 are assembled from consecutive 4-byte groups,
    /// most-significant byte first. Words 16..64 are left as zero for
    /// [`WordSchedule::expand`] to fill in.
    pub fn to_words(&self) -> WordSchedule {
        let mut words = [0u32; ROUNDS];
        for (word, chunk) in words
            .iter_mut()
            .take(BLOCK_WORDS)
            .zip(self.0.chunks_exact(WORD_BYTES))
        {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        WordSchedule::from_words(words)
    }
}

impl Index<usize> for Block {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BLOCK_BYTES]> for Block {
    fn from(bytes: [u8; BLOCK_BYTES]) -> Self {
        Self::new(bytes)
    }
}
