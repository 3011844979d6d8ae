//! # Digest
//!
//! The 256-bit SHA-256 output. Rendered as 64 lowercase hex characters:
//! the eight final state words, each big-endian and zero-padded to eight
//! hex digits.
//!
//! Parsing accepts exactly 64 hex characters of either case. Anything
//! longer or shorter is rejected rather than truncated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bitops::SplitToBytes;
use crate::compression::HashState;
use crate::constants::{DIGEST_BYTES, DIGEST_HEX_LEN, WORD_BYTES};
use crate::error::Sha256Error;

/// A finished SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// Serialise a final hash state, word by word, big-endian.
    pub fn from_state(state: &HashState) -> Self {
        let mut bytes = [0u8; DIGEST_BYTES];
        for (chunk, word) in bytes.chunks_exact_mut(WORD_BYTES).zip(state.words()) {
            chunk.copy_from_slice(&word.split_to_bytes());
        }
        Self(bytes)
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a 64-character hex string.
    ///
    /// # Errors
    ///
    /// - [`Sha256Error::InvalidDigestLength`] if the input is not exactly 64
    ///   characters.
    /// - [`Sha256Error::InvalidHex`] on the first non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self, Sha256Error> {
        let len = hex.chars().count();
        if len != DIGEST_HEX_LEN {
            return Err(Sha256Error::InvalidDigestLength(len));
        }

        let mut bytes = [0u8; DIGEST_BYTES];
        let mut nibbles = hex.chars().enumerate().map(|(position, character)| {
            character
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or(Sha256Error::InvalidHex {
                    position,
                    character,
                })
        });
        for byte in bytes.iter_mut() {
            // Length was checked above, so both nibbles are present.
            let hi = nibbles.next().transpose()?.unwrap_or_default();
            let lo = nibbles.next().transpose()?.unwrap_or_default();
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Number of bits that differ between two digests.
    pub fn hamming_distance(&self, other: &Digest) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Sha256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
