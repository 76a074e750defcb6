//! Tests for the FHD digest

use crate::primitives::compress;
use crate::rand::{SeedRng, seed_words};
use crate::{BLOCK_SIZE, DIGEST_SIZE, Fhd, FhdStream, hash};

/// Deterministic filler used by the longer vectors.
fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 37 + 11) as u8).collect()
}

#[test]
fn test_digest_is_deterministic() {
    let input = b"test input data";
    let result = hash(input);

    assert_eq!(result.len(), DIGEST_SIZE);
    assert_eq!(result, hash(input));
}

#[test]
fn test_different_inputs_produce_different_digests() {
    assert_ne!(hash(b"input 1"), hash(b"input 2"));
}

#[test]
fn test_initial_state_words() {
    // The seed stream is fixed, so initialization is a constant.
    let words = seed_words();
    assert_eq!(words, [0x74BD8799, 0x15FBAD4C, 0x744E1A8C, 0x56AB5166]);
    assert_eq!(words, seed_words());
}

#[test]
fn test_seed_generator_is_reproducible() {
    let mut a = SeedRng::new();
    let mut b = SeedRng::new();
    for _ in 0..64 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

/// Golden vectors computed from the reference bit-exact arithmetic.
/// These are the acceptance oracle: any change to the seed stream, the
/// mixers, the round structure or the buffering rule shows up here.
#[test]
fn test_known_vectors() {
    let vectors: &[(&[u8], &str)] = &[
        (b"", "2aa384fa99ce8362c40e3d0e8780456b"),
        (b"a", "5901f360b0fee0b3aa043edbb30412f0"),
        (b"0123456789abcdef", "3db0d598073607dd9ed29e00e2b87b76"),
        (b"abcdefghijklmnopq", "fc33962b25e6594bbbac1224dcc6029b"),
        (
            b"0123456789abcdef0123456789abcdef",
            "a57e5e4cfe0d7f3fd91d7ec47caa5b50",
        ),
        (
            b"The quick brown fox jumps over the lazy dog",
            "bab70f007d4a5113da85d69a118837ae",
        ),
    ];

    for (input, expected) in vectors {
        assert_eq!(
            hex::encode(hash(input)),
            *expected,
            "digest mismatch for input {:?}",
            input
        );
    }
}

#[test]
fn test_pattern_vectors() {
    let cases = [
        (21, "d60c94b50336c63e1146e856ea88424b"),
        (56, "8724931ebce60103097f43e84c8ad809"),
        (1000, "e395b30eb7b57216a4ad4aca3ef970ef"),
    ];

    for (len, expected) in cases {
        assert_eq!(
            hex::encode(hash(&pattern(len))),
            expected,
            "digest mismatch for pattern length {}",
            len
        );
    }
}

#[test]
fn test_empty_input_compresses_one_zero_block() {
    let mut words = seed_words();
    compress(&mut words, &[0u8; BLOCK_SIZE]);

    let expected: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    assert_eq!(hash(b"").to_vec(), expected);
}

#[test]
fn test_block_boundary_defers_last_block() {
    // A 16-byte input performs no compression in update at all.
    let mut ctx = Fhd::new();
    ctx.update(b"0123456789abcdef");
    assert_eq!(ctx.words, seed_words());
    assert_eq!(&ctx.pending, b"0123456789abcdef");

    // A 32-byte input compresses exactly one block in update and holds
    // the second back for finalize.
    let input = b"0123456789abcdef0123456789abcdef";
    let mut ctx = Fhd::new();
    ctx.update(input);

    let mut words = seed_words();
    compress(&mut words, input[..16].try_into().unwrap());
    assert_eq!(ctx.words, words);
    assert_eq!(&ctx.pending, &input[16..]);

    // finalize performs the remaining compression
    let digest = ctx.finalize();
    compress(&mut words, input[16..].try_into().unwrap());
    let expected: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    assert_eq!(digest.to_vec(), expected);
}

/// `Fhd::update` replaces the pending tail from byte zero: a second short
/// call discards what the first one buffered. This is the documented
/// contract of the raw context, pinned here so it cannot change silently.
#[test]
fn test_update_replaces_pending_tail() {
    let mut ctx = Fhd::new();
    ctx.update(b"ab");
    ctx.update(b"cd");
    let digest = ctx.finalize();

    assert_eq!(digest, hash(b"cd"));
    assert_eq!(hex::encode(digest), "98b5a4ac3d10dc87a73bc3fb7c014430");
    assert_ne!(digest, hash(b"abcd"));
}

/// The stream hasher has the corrected append semantics.
#[test]
fn test_stream_accumulates_across_calls() {
    let mut hasher = FhdStream::new();
    hasher.update(b"ab");
    hasher.update(b"cd");
    assert_eq!(hasher.finalize(), hash(b"abcd"));
}

#[test]
fn test_stream_matches_single_buffer() {
    let data = pattern(233);

    for chunk in [1, 2, 3, 7, 16, 32, 61, 233] {
        let mut hasher = FhdStream::new();
        for piece in data.chunks(chunk) {
            hasher.update(piece);
        }
        assert_eq!(
            hasher.finalize(),
            hash(&data),
            "stream digest diverged at chunk size {}",
            chunk
        );
    }
}

#[test]
fn test_stream_empty_input() {
    let mut hasher = FhdStream::new();
    assert_eq!(hasher.finalize(), hash(b""));

    let mut hasher = FhdStream::new();
    hasher.update(b"");
    assert_eq!(hasher.finalize(), hash(b""));
}

#[test]
fn test_finalize_wipes_state() {
    let mut ctx = Fhd::new();
    ctx.update(b"some input worth wiping");
    let _ = ctx.finalize();
    assert_eq!(ctx.words, [0u32; 4]);
    assert_eq!(ctx.pending, [0u8; BLOCK_SIZE]);

    let mut hasher = FhdStream::new();
    hasher.update(&pattern(100));
    let _ = hasher.finalize();
    assert_eq!(hasher.words, [0u32; 4]);
    assert_eq!(hasher.buf, [0u8; BLOCK_SIZE]);
    assert_eq!(hasher.filled, 0);
}

#[test]
fn test_reset_allows_reuse() {
    let mut ctx = Fhd::new();
    ctx.update(b"first message");
    let first = ctx.finalize();

    ctx.reset();
    ctx.update(b"first message");
    assert_eq!(ctx.finalize(), first);

    let mut hasher = FhdStream::new();
    hasher.update(b"first ");
    hasher.update(b"message");
    let _ = hasher.finalize();

    hasher.reset();
    hasher.update(b"first message");
    assert_eq!(hasher.finalize(), first);
}

/// Not a security claim: FHD has known single-bit fixed points, so the
/// avalanche check pins measured vectors instead of asserting the property
/// for every bit position.
#[test]
fn test_avalanche_on_pinned_vectors() {
    // (input, byte index, flip mask); measured diffs 61, 65 and 62 bits
    let cases: &[(&[u8], usize, u8)] = &[
        (b"The quick brown fox jumps over the lazy dog", 0, 0x01),
        (b"0123456789abcdef", 0, 0x80),
        (b"abcdefghijklmnopq", 16, 0x01),
    ];

    for (input, byte, mask) in cases {
        let mut flipped = input.to_vec();
        flipped[*byte] ^= mask;

        let d1 = hash(input);
        let d2 = hash(&flipped);

        let mut diff_bits = 0;
        for i in 0..DIGEST_SIZE {
            diff_bits += (d1[i] ^ d2[i]).count_ones();
        }

        // Expect roughly 64 bits (50% of 128) to differ; allow 40-90
        assert!(
            (40..=90).contains(&diff_bits),
            "avalanche on {:?}: {} bits differ (expected ~64)",
            input,
            diff_bits
        );
    }
}

#[test]
fn test_large_input() {
    let large_input = vec![0xABu8; 10000];
    let result = hash(&large_input);
    assert_eq!(result.len(), DIGEST_SIZE);
    assert_eq!(result, hash(&large_input));
}
