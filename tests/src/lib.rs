//! Shared test harness for lacuna integration tests.
//!
//! Provides in-memory shard plumbing around [`Coder`]: encode a byte slice
//! into per-shard buffers, drop any subset of them, decode the survivors
//! back, and compare.

use std::io::Cursor;

use lacuna_coder::{Coder, CoderConfig};

/// Deterministic pseudo-random test data from a seeded LCG.
pub fn test_data_seeded(len: usize, seed: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(len);
    let mut state = seed ^ 0xDEAD_BEEF;
    for _ in 0..len {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((state >> 16) as u8);
    }
    data
}

/// Build a coder, panicking on invalid parameters — tests pass known-good
/// configurations.
pub fn coder(shards: usize, data_shards: usize, word_width: usize) -> Coder {
    let config = CoderConfig::new(shards, data_shards, word_width).unwrap();
    Coder::new(config).unwrap()
}

/// Encode `data` into one in-memory buffer per shard. Returns the shard
/// buffers and the byte count reported by the encoder.
pub fn encode_to_shards(coder: &Coder, data: &[u8]) -> (Vec<Vec<u8>>, u64) {
    let mut writers: Vec<Vec<u8>> = vec![Vec::new(); coder.config().shards()];
    let written = coder
        .encode(&mut Cursor::new(data), &mut writers)
        .expect("encode into memory buffers");
    (writers, written)
}

/// Decode from the shards NOT named in `excluded`, supplied in shard-index
/// order as the decoder expects.
pub fn decode_shards(coder: &Coder, excluded: &[usize], shards: &[Vec<u8>]) -> Vec<u8> {
    let readers: Vec<Cursor<&[u8]>> = shards
        .iter()
        .enumerate()
        .filter(|(i, _)| !excluded.contains(i))
        .map(|(_, shard)| Cursor::new(shard.as_slice()))
        .collect();
    let mut out = Vec::new();
    coder
        .decode(excluded, readers, &mut out)
        .expect("decode from surviving shards");
    out
}

/// All size-`k` subsets of `0..n`, each in ascending order.
pub fn subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn rec(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            rec(i + 1, n, k, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    rec(0, n, k, &mut Vec::with_capacity(k), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_seeded_is_deterministic() {
        assert_eq!(test_data_seeded(64, 7), test_data_seeded(64, 7));
        assert_ne!(test_data_seeded(64, 7), test_data_seeded(64, 8));
    }

    #[test]
    fn test_subsets_counts() {
        assert_eq!(subsets(5, 2).len(), 10);
        assert_eq!(subsets(6, 3).len(), 20);
        assert_eq!(subsets(4, 0), vec![Vec::<usize>::new()]);
    }
}
