//! Coder parameter validation and derived block geometry.

use crate::error::CoderError;

/// Word widths the coder supports, in bytes.
pub const WORD_WIDTHS: [usize; 4] = [1, 2, 4, 8];

/// Largest data block the in-band length tag can describe: the tag is a
/// single byte holding the final block's payload length.
const MAX_DATA_BLOCK_SIZE: usize = 255;

/// Validated erasure-coder parameters and the block geometry derived from
/// them.
///
/// - `shards` — total output streams (N)
/// - `data_shards` — streams required to reconstruct (K)
/// - `word_width` — bytes per code word (1, 2, 4, or 8)
///
/// The field degree is the smallest n >= 2 with 2^n >= N + K; each block
/// then carries `degree` words per shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoderConfig {
    shards: usize,
    data_shards: usize,
    word_width: usize,
    degree: u32,
}

impl CoderConfig {
    /// Validate the parameters and derive the field degree.
    ///
    /// # Errors
    ///
    /// - [`CoderError::InvalidWordWidth`] unless `word_width` is 1, 2, 4,
    ///   or 8.
    /// - [`CoderError::InvalidShardCounts`] unless
    ///   `1 <= data_shards <= shards`.
    /// - [`CoderError::TooManyShards`] when `shards + data_shards`
    ///   exceeds 128, the largest supported field.
    /// - [`CoderError::BlockTooLarge`] when the derived data block size
    ///   exceeds 255 bytes and the one-byte length tag could not describe
    ///   the final block.
    pub fn new(shards: usize, data_shards: usize, word_width: usize) -> Result<Self, CoderError> {
        if !WORD_WIDTHS.contains(&word_width) {
            return Err(CoderError::InvalidWordWidth(word_width));
        }
        if data_shards == 0 || data_shards > shards {
            return Err(CoderError::InvalidShardCounts {
                shards,
                data_shards,
            });
        }

        // Smallest degree (at least 2) whose field has room for the N + K
        // disjoint Cauchy points.
        let needed = shards + data_shards;
        let mut degree = 2u32;
        while (1usize << degree) < needed {
            degree += 1;
            if degree > 7 {
                return Err(CoderError::TooManyShards {
                    shards,
                    data_shards,
                });
            }
        }

        let config = Self {
            shards,
            data_shards,
            word_width,
            degree,
        };
        if config.data_block_size() > MAX_DATA_BLOCK_SIZE {
            return Err(CoderError::BlockTooLarge {
                size: config.data_block_size(),
            });
        }
        Ok(config)
    }

    /// Total shards produced by encoding (N).
    pub fn shards(&self) -> usize {
        self.shards
    }

    /// Shards required to reconstruct (K).
    pub fn data_shards(&self) -> usize {
        self.data_shards
    }

    /// Shards that may be lost without losing data (N - K).
    pub fn parity_shards(&self) -> usize {
        self.shards - self.data_shards
    }

    /// Bytes per code word.
    pub fn word_width(&self) -> usize {
        self.word_width
    }

    /// Degree n of the coding field; also the words per shard per block.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Bytes each shard contributes to one block.
    pub fn chunk_size(&self) -> usize {
        self.word_width * self.degree as usize
    }

    /// Payload bytes consumed per block.
    pub fn data_block_size(&self) -> usize {
        self.chunk_size() * self.data_shards
    }

    /// Code bytes produced per block across all shards.
    pub fn code_block_size(&self) -> usize {
        self.chunk_size() * self.shards
    }

    /// Words per data block.
    pub(crate) fn data_words(&self) -> usize {
        self.degree as usize * self.data_shards
    }

    /// Words per code block.
    pub(crate) fn code_words(&self) -> usize {
        self.degree as usize * self.shards
    }
}
