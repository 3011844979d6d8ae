//! # Message Padding
//!
//! Produces the padded message of FIPS 180-4 §5.1.1 and segments it into
//! [`Block`]s (§5.2.1).
//!
//! ## Layout
//!
//! ```text
//! | message (L bits) | 0x80 | k zero bytes | L as u64, big-endian |
//! ```
//!
//! `k` is the smallest value that makes the total a multiple of 512 bits.
//! When fewer than 72 bits remain in the last message block, the zero run
//! spills into one extra block; the modular arithmetic in
//! [`padding_bits`] covers that case without a separate branch.

use crate::bitops::SplitToBytes;
use crate::block::Block;
use crate::constants::{BLOCK_BITS, BLOCK_BYTES, LENGTH_FIELD_BITS};

/// The single `1` bit followed by seven `0` bits that terminates the message.
const TERMINATOR: u8 = 0x80;

/// Number of zero padding bits between the `0x80` terminator and the
/// length field, for a message of `len_bits` bits.
///
/// `448 - ((L mod 512) + 8)`, plus 512 when that is negative.
pub fn padding_bits(len_bits: u64) -> u64 {
    let block = BLOCK_BITS as u64;
    let length_offset = block - LENGTH_FIELD_BITS as u64;
    let used = len_bits % block + 8;
    (length_offset + block - used) % block
}

/// A message padded to a whole number of 512-bit blocks.
///
/// # Invariants
///
/// - `as_bytes().len()` is a non-zero multiple of 64.
/// - The last 8 bytes are the original message length in bits, big-endian.
/// - The only constructor is [`PaddedMessage::new`]; the bytes are never
///   mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
    message_bits: u64,
}

impl PaddedMessage {
    /// Pad `message` per FIPS 180-4 §5.1.1.
    pub fn new(message: &[u8]) -> Self {
        // Bit lengths are defined modulo 2^64.
        let message_bits = (message.len() as u64).wrapping_mul(8);
        let zero_bytes = (padding_bits(message_bits) / 8) as usize;

        let mut bytes =
            Vec::with_capacity(message.len() + 1 + zero_bytes + LENGTH_FIELD_BITS / 8);
        bytes.extend_from_slice(message);
        bytes.push(TERMINATOR);
        bytes.resize(bytes.len() + zero_bytes, 0);
        bytes.extend_from_slice(&message_bits.split_to_bytes());

        debug_assert_eq!(bytes.len() % BLOCK_BYTES, 0);
        Self {
            bytes,
            message_bits,
        }
    }

    /// The padded byte sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bit length of the padded message. Always a multiple of 512.
    pub fn len_bits(&self) -> u64 {
        self.bytes.len() as u64 * 8
    }

    /// Bit length of the original message, as recorded in the length field.
    pub fn message_bits(&self) -> u64 {
        self.message_bits
    }

    /// Number of 512-bit blocks, `N = len_bits / 512`.
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_BYTES
    }

    /// Iterate the blocks in message order.
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = Block> + '_ {
        self.bytes.chunks_exact(BLOCK_BYTES).map(|chunk| {
            let mut block = [0u8; BLOCK_BYTES];
            block.copy_from_slice(chunk);
            Block::new(block)
        })
    }
}

impl AsRef<[u8]> for PaddedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
