//! # Hashing Pipeline
//!
//! The top-level `hash` operation:
//!
//! 1. Pad the message ([`PaddedMessage`]).
//! 2. Split it into 512-bit [`Block`](crate::Block)s.
//! 3. Start from the initial [`HashState`].
//! 4. For each block, in order: seed the schedule, expand it, compress.
//! 5. Render the final state as a [`Digest`].
//!
//! Blocks are processed strictly in sequence because each compression
//! consumes the state produced by the previous one. Every call owns its own
//! buffers, so independent calls may run concurrently on any thread.

use tracing::{debug, trace};

use crate::compression::HashState;
use crate::constants::{BLOCK_BITS, ROUNDS, WORD_BITS};
use crate::digest::Digest;
use crate::padding::PaddedMessage;

/// Compute the SHA-256 digest of `message`.
pub fn digest(message: impl AsRef<[u8]>) -> Digest {
    let message = message.as_ref();
    let padded = PaddedMessage::new(message);
    debug!(
        message_bytes = message.len(),
        blocks = padded.block_count(),
        "hashing message"
    );

    let mut state = HashState::new();
    for (index, block) in padded.blocks().enumerate() {
        let mut schedule = block.to_words();
        schedule.expand();
        state.compress(&schedule);
        trace!(block = index, "compressed block");
    }

    Digest::from_state(&state)
}

/// Compute the SHA-256 digest of `message` as 64 lowercase hex characters.
///
/// Text input is hashed as its UTF-8 bytes.
///
/// ```
/// assert_eq!(
///     sha256_core::hash("abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn hash(message: impl AsRef<[u8]>) -> String {
    digest(message).to_hex()
}

/// SHA-256 with its fixed parameters exposed.
///
/// A zero-sized handle for callers that want to report or assert the
/// algorithm parameters alongside the digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl Sha256 {
    /// Create a handle.
    pub fn new() -> Self {
        Self
    }

    /// Block length in bits (512).
    pub fn block_length(&self) -> usize {
        BLOCK_BITS
    }

    /// Word length in bits (32).
    pub fn word_length(&self) -> usize {
        WORD_BITS
    }

    /// Number of compression rounds per block (64).
    pub fn iterations_count(&self) -> usize {
        ROUNDS
    }

    /// Hash a UTF-8 string to its lowercase hex digest.
    pub fn hash_message(&self, message: &str) -> String {
        hash(message)
    }

    /// Hash raw bytes to a typed digest.
    pub fn digest(&self, message: &[u8]) -> Digest {
        digest(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash_empty() {
        assert_eq!(
            hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_abc() {
        assert_eq!(
            hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_quick_brown_fox() {
        assert_eq!(
            hash("The quick brown fox jumps over the lazy dog"),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn test_sha256_parameters() {
        let sha = Sha256::new();
        assert_eq!(sha.block_length(), 512);
        assert_eq!(sha.word_length(), 32);
        assert_eq!(sha.iterations_count(), 64);
    }

    #[test]
    fn test_hash_message_matches_hash() {
        let sha = Sha256::new();
        for msg in ["qwerty", "Hello, World!", "Jackdaws love my big sphinx of quartz"] {
            assert_eq!(sha.hash_message(msg), hash(msg));
            assert_eq!(sha.digest(msg.as_bytes()).to_hex(), hash(msg));
        }
    }

    #[test]
    fn test_text_and_bytes_agree() {
        assert_eq!(hash("héllo"), hash("héllo".as_bytes()));
        assert_eq!(hash(String::from("abc")), hash(b"abc"));
        assert_eq!(hash(vec![0x61u8, 0x62, 0x63]), hash("abc"));
    }

    #[test]
    fn test_single_bit_flip_avalanche() {
        let base = digest(b"avalanche");
        let mut flipped = b"avalanche".to_vec();
        flipped[0] ^= 0x01;
        let distance = base.hamming_distance(&digest(&flipped));
        // Roughly half the 256 output bits should change.
        assert!(distance >= 64, "only {distance} bits changed");
    }

    #[test]
    fn test_concurrent_calls_are_independent() {
        let handles: Vec<_> = (0..8)
            .map(|i| std::thread::spawn(move || hash(vec![i as u8; 1000 + i])))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), hash(vec![i as u8; 1000 + i]));
        }
    }

    proptest! {
        /// Repeated calls give the same digest.
        #[test]
        fn hash_is_deterministic(message in prop::collection::vec(any::<u8>(), 0..600)) {
            prop_assert_eq!(hash(&message), hash(&message));
        }

        /// Digests are always 64 lowercase hex characters.
        #[test]
        fn digest_shape(message in prop::collection::vec(any::<u8>(), 0..600)) {
            let hex = hash(&message);
            prop_assert_eq!(hex.len(), 64);
            prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }
}
