//! # Reference Implementation Cross-Check
//!
//! Compares `sha256_core` against the RustCrypto `sha2` crate, used here
//! purely as an independent oracle. Any divergence means one of the two
//! implementations computes a different digest for the same bytes.

use proptest::prelude::*;
use sha2::{Digest as _, Sha256};

/// Helper: lowercase hex SHA-256 computed by the `sha2` crate.
fn reference_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Deterministic, non-repeating filler bytes.
fn filler(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

// ---------------------------------------------------------------------------
// Every padding boundary
// ---------------------------------------------------------------------------

#[test]
fn test_matches_reference_for_lengths_0_to_200() {
    // Covers the one-block, exact-fit (55), roll-over (56..=63), and
    // multi-block cases.
    for len in 0..=200 {
        let data = filler(len);
        assert_eq!(
            sha256_core::hash(&data),
            reference_hex(&data),
            "mismatch at length {len}"
        );
    }
}

#[test]
fn test_matches_reference_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).collect();
    assert_eq!(sha256_core::hash(&data), reference_hex(&data));

    let ones = vec![0xFFu8; 4096];
    assert_eq!(sha256_core::hash(&ones), reference_hex(&ones));
}

#[test]
fn test_digest_bytes_match_reference() {
    let data = b"raw digest bytes";
    let ours = sha256_core::digest(data);
    let theirs = Sha256::digest(data);
    assert_eq!(ours.as_bytes().as_slice(), theirs.as_slice());
}

proptest! {
    #[test]
    fn matches_reference(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(sha256_core::hash(&data), reference_hex(&data));
    }

    #[test]
    fn matches_reference_for_text(text in "\\PC{0,200}") {
        prop_assert_eq!(sha256_core::hash(&text), reference_hex(text.as_bytes()));
    }
}
