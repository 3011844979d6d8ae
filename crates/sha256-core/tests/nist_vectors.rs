//! # FIPS 180-4 / NIST Test Vectors
//!
//! End-to-end checks of `sha256_core::hash` against the published SHA-256
//! example messages. These are the authoritative vectors; every expected
//! value below is a 64-character lowercase digest.

use sha256_core::{digest, hash, Digest, PaddedMessage};

// ---------------------------------------------------------------------------
// FIPS 180-4 example messages
// ---------------------------------------------------------------------------

#[test]
fn test_nist_empty_message() {
    assert_eq!(
        hash(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_nist_one_block_abc() {
    assert_eq!(
        hash("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_nist_two_block_448_bits() {
    let message = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(message.len() * 8, 448);
    // 448 bits forces the length field into a second block.
    assert_eq!(PaddedMessage::new(message.as_bytes()).block_count(), 2);
    assert_eq!(
        hash(message),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_nist_896_bits() {
    let message = "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                   hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(message.len() * 8, 896);
    assert_eq!(
        hash(message),
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"
    );
}

#[test]
fn test_nist_one_million_a() {
    let message = vec![b'a'; 1_000_000];
    assert_eq!(
        hash(&message),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

// ---------------------------------------------------------------------------
// Pangrams and short strings
// ---------------------------------------------------------------------------

#[test]
fn test_known_text_digests() {
    let vectors = [
        (
            "The quick brown fox jumps over the lazy dog",
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        ),
        (
            "The quick brown fox jumps over the lazy dog.",
            "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
        ),
        (
            "qwerty",
            "65e84be33532fb784c48129675f9eff3a682b27168c0ea744b2cf58ee02337c5",
        ),
        (
            "Hello, World!",
            "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f",
        ),
        (
            "The five boxing wizards jump quickly",
            "44a3a7b6e5c39c1b17458a5b3a9f2f4e6dbb624dc65b23ab3d305562c3744f9b",
        ),
        (
            "Jackdaws love my big sphinx of quartz",
            "f118871c45171d5fe4e9049980959e033eeeabcfa12046c243fda310580e8a0b",
        ),
    ];

    for (message, expected) in vectors {
        assert_eq!(expected.len(), 64, "fixture for {message:?} is malformed");
        assert_eq!(hash(message), expected, "digest mismatch for {message:?}");
    }
}

#[test]
fn test_digest_parses_back_from_hex() {
    let d = digest("abc");
    let parsed: Digest = hash("abc").parse().unwrap();
    assert_eq!(d, parsed);
}
