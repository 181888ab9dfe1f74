//! Streaming Cauchy erasure coder.
//!
//! This crate provides:
//! - [`CoderConfig`] — validated (shards, data shards, word width)
//!   parameters and the block geometry derived from them.
//! - [`Coder`] — encodes a byte stream into N shard streams, and decodes
//!   any K of them (plus the identity of the missing ones) back into the
//!   original bytes.
//! - [`PeekReader`] — one-byte-lookahead reader used on shard streams
//!   during decode.
//! - [`CoderError`] — the error type for construction, encode, and decode.
//!
//! The encoder reads its input in fixed-size blocks and multiplies each by
//! a bit-expanded Cauchy matrix over GF(2^n) (see `lacuna-gf`), so the
//! inner loop is XORs of big-endian words rather than field products. The
//! final short block carries the stream length in its last byte, which is
//! how decoding restores the exact original byte count.

mod block;
mod coder;
mod config;
mod decoder;
mod encoder;
mod error;
mod peek;

pub use coder::Coder;
pub use config::CoderConfig;
pub use error::CoderError;
pub use peek::PeekReader;
