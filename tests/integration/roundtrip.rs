//! Integration test: encode/decode round trips.
//!
//! Encode byte streams of varying shapes, drop every tolerable subset of
//! shards, and verify the decoded stream matches the input byte-for-byte,
//! including its length.

use lacuna_integration_tests::{coder, decode_shards, encode_to_shards, subsets, test_data_seeded};

const PANGRAM: &[u8] = b"The quick brown fox jumps over the lazy dog.";

/// (N=5, K=3, w=8): every one of the C(5,2) = 10 ways of losing two shards
/// must reproduce the 44-byte pangram exactly.
#[test]
fn test_pangram_survives_every_shard_pair_loss() {
    assert_eq!(PANGRAM.len(), 44);
    let c = coder(5, 3, 8);
    let (shards, written) = encode_to_shards(&c, PANGRAM);
    assert_eq!(written, 44);

    let pairs = subsets(5, 2);
    assert_eq!(pairs.len(), 10);
    for excluded in &pairs {
        let decoded = decode_shards(&c, excluded, &shards);
        assert_eq!(decoded.len(), 44, "length mismatch for excluded {excluded:?}");
        assert_eq!(decoded, PANGRAM, "data mismatch for excluded {excluded:?}");
    }
}

/// The encoder reports exactly the input length, whether or not the input
/// is a multiple of the block size, and decode returns the same bytes.
#[test]
fn test_byte_count_identity_across_sizes() {
    let c = coder(5, 3, 4);
    let block = c.config().data_block_size();
    for len in [0, 1, 2, block - 1, block, block + 1, 2 * block, 5 * block + 7, 1000] {
        let data = test_data_seeded(len, len as u32);
        let (shards, written) = encode_to_shards(&c, &data);
        assert_eq!(written as usize, len, "encoder count for len={len}");
        let decoded = decode_shards(&c, &[2, 4], &shards);
        assert_eq!(decoded, data, "round trip for len={len}");
    }
}

/// A small configuration swept over every tolerable exclusion subset.
#[test]
fn test_every_exclusion_subset_small_config() {
    let c = coder(4, 2, 1);
    let data = test_data_seeded(333, 42);
    let (shards, _) = encode_to_shards(&c, &data);
    for excluded in subsets(4, 2) {
        assert_eq!(
            decode_shards(&c, &excluded, &shards),
            data,
            "failed for excluded {excluded:?}"
        );
    }
}

/// All four word widths carry the same stream.
#[test]
fn test_all_word_widths_round_trip() {
    let data = test_data_seeded(777, 3);
    for width in [1, 2, 4, 8] {
        let c = coder(6, 4, width);
        let (shards, written) = encode_to_shards(&c, &data);
        assert_eq!(written as usize, data.len());
        assert_eq!(
            decode_shards(&c, &[0, 5], &shards),
            data,
            "failed for word width {width}"
        );
    }
}

/// Degenerate single-shard configuration: one stream, nothing to lose.
#[test]
fn test_single_shard_coder() {
    let c = coder(1, 1, 2);
    let data = test_data_seeded(99, 9);
    let (shards, _) = encode_to_shards(&c, &data);
    assert_eq!(shards.len(), 1);
    assert_eq!(decode_shards(&c, &[], &shards), data);
}

/// N == K leaves no parity: every shard is required and none may be
/// excluded.
#[test]
fn test_no_parity_configuration() {
    let c = coder(4, 4, 4);
    let data = test_data_seeded(640, 11);
    let (shards, _) = encode_to_shards(&c, &data);
    assert_eq!(decode_shards(&c, &[], &shards), data);
}

/// Shards are equally sized and their length matches the block count.
#[test]
fn test_shard_lengths_are_uniform() {
    let c = coder(5, 3, 2);
    let block = c.config().data_block_size();
    let chunk = c.config().chunk_size();
    for blocks in [1usize, 2, 7] {
        // A full multiple gets one extra tag-only block.
        let data = test_data_seeded(blocks * block, blocks as u32);
        let (shards, _) = encode_to_shards(&c, &data);
        for (i, shard) in shards.iter().enumerate() {
            assert_eq!(
                shard.len(),
                (blocks + 1) * chunk,
                "shard {i} length for {blocks} full blocks"
            );
        }
    }
}

/// A multi-block stream large enough to cross several block boundaries
/// decodes under every width and several exclusion choices.
#[test]
fn test_large_stream_many_blocks() {
    let c = coder(8, 4, 8);
    let data = test_data_seeded(64 * 1024 + 13, 77);
    let (shards, written) = encode_to_shards(&c, &data);
    assert_eq!(written as usize, data.len());
    for excluded in [[0, 1, 2, 3], [4, 5, 6, 7], [0, 2, 4, 6]] {
        assert_eq!(
            decode_shards(&c, &excluded, &shards),
            data,
            "failed for excluded {excluded:?}"
        );
    }
}
