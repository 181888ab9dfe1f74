//! Error types for coder construction, encoding, and decoding.

use lacuna_gf::GfError;

/// Errors that can occur while building a [`Coder`](crate::Coder) or
/// running encode/decode.
#[derive(Debug, thiserror::Error)]
pub enum CoderError {
    /// The word width is not one of the supported sizes.
    #[error("invalid word width {0}: must be 1, 2, 4, or 8 bytes")]
    InvalidWordWidth(usize),

    /// The shard counts are inconsistent.
    #[error("invalid shard counts: data_shards {data_shards} must be in 1..={shards}")]
    InvalidShardCounts {
        /// Total shards (N).
        shards: usize,
        /// Data shards (K).
        data_shards: usize,
    },

    /// No supported field is large enough for the requested shard counts.
    #[error("no field of degree <= 7 can host {shards} + {data_shards} Cauchy points")]
    TooManyShards {
        /// Total shards (N).
        shards: usize,
        /// Data shards (K).
        data_shards: usize,
    },

    /// The data block would be too large for the one-byte length tag.
    #[error("data block of {size} bytes cannot be length-tagged in one byte (max 255)")]
    BlockTooLarge {
        /// Derived data block size in bytes.
        size: usize,
    },

    /// Encode was handed the wrong number of shard writers.
    #[error("expected {expected} shard writers, got {got}")]
    WrongWriterCount { expected: usize, got: usize },

    /// Decode was handed the wrong number of shard readers.
    #[error("expected {expected} shard readers, got {got}")]
    WrongReaderCount { expected: usize, got: usize },

    /// Decode was handed the wrong number of excluded shards.
    #[error("expected {expected} excluded shards, got {got}")]
    WrongExcludedCount { expected: usize, got: usize },

    /// An excluded shard index does not name a shard of this coder.
    #[error("excluded shard {shard} out of range: this coder produces {shards} shards")]
    ShardOutOfRange { shard: usize, shards: usize },

    /// The same shard was excluded more than once.
    #[error("shard {shard} excluded more than once")]
    DuplicateExcludedShard { shard: usize },

    /// The final block's length tag is not below the block size; the shard
    /// streams are corrupt or belong to a different configuration.
    #[error("length tag {tag} not below the data block size {block_size}")]
    InvalidLengthTag { tag: usize, block_size: usize },

    /// Field or matrix arithmetic failed.
    #[error(transparent)]
    Gf(#[from] GfError),

    /// A shard reader or writer failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
