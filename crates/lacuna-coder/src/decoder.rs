//! Streaming decode: any K shard streams back into the original bytes.

use std::io::{Read, Write};

use tracing::debug;

use crate::block;
use crate::coder::{apply_bits, Coder};
use crate::error::CoderError;
use crate::peek::PeekReader;

impl Coder {
    /// Reconstruct the original stream from any K surviving shard streams.
    ///
    /// `excluded_shards` names the [`parity_shards`] missing shard
    /// indices; `readers` holds the surviving shards in increasing
    /// shard-index order, i.e. the shard list with the excluded indices
    /// skipped. The decode matrix — the inverse of the surviving rows of
    /// the Cauchy encoder, bit-expanded — is computed once and applied per
    /// block. After each full code block one reader is peeked to tell
    /// whether the stream ends; the final block is trimmed to the length
    /// carried by its in-band tag.
    ///
    /// Returns the total bytes written, which equals the length of the
    /// originally encoded stream.
    ///
    /// # Errors
    ///
    /// - [`CoderError::WrongExcludedCount`],
    ///   [`CoderError::ShardOutOfRange`], or
    ///   [`CoderError::DuplicateExcludedShard`] when `excluded_shards`
    ///   does not name exactly the missing shards.
    /// - [`CoderError::WrongReaderCount`] unless exactly
    ///   [`data_shards`] readers are supplied.
    /// - [`CoderError::InvalidLengthTag`] when the final block's tag does
    ///   not fit the block, which means the shard streams are corrupt or
    ///   were produced by a different configuration.
    /// - [`CoderError::Io`] when a reader or the writer fails; a shard
    ///   stream ending mid-block surfaces as `UnexpectedEof`.
    ///
    /// [`parity_shards`]: crate::CoderConfig::parity_shards
    /// [`data_shards`]: crate::CoderConfig::data_shards
    pub fn decode<R: Read, W: Write>(
        &self,
        excluded_shards: &[usize],
        readers: Vec<R>,
        writer: &mut W,
    ) -> Result<u64, CoderError> {
        let config = self.config();
        if excluded_shards.len() != config.parity_shards() {
            return Err(CoderError::WrongExcludedCount {
                expected: config.parity_shards(),
                got: excluded_shards.len(),
            });
        }
        for (i, &shard) in excluded_shards.iter().enumerate() {
            if shard >= config.shards() {
                return Err(CoderError::ShardOutOfRange {
                    shard,
                    shards: config.shards(),
                });
            }
            if excluded_shards[..i].contains(&shard) {
                return Err(CoderError::DuplicateExcludedShard { shard });
            }
        }
        if readers.len() != config.data_shards() {
            return Err(CoderError::WrongReaderCount {
                expected: config.data_shards(),
                got: readers.len(),
            });
        }

        let decoder_bits = self.decoder_bits(excluded_shards)?;
        let mut readers: Vec<PeekReader<R>> = readers.into_iter().map(PeekReader::new).collect();

        let degree = config.degree() as usize;
        let width = config.word_width();
        let block_size = config.data_block_size();
        let mut total = 0u64;
        let mut blocks = 0u64;
        loop {
            // One code block: `degree` words from each surviving shard, in
            // shard order.
            let mut code = Vec::with_capacity(config.data_words());
            for reader in readers.iter_mut() {
                for _ in 0..degree {
                    code.push(block::read_word(reader, width)?);
                }
            }
            let data = apply_bits(&decoder_bits, &code);
            blocks += 1;

            // The shard holding the block's last word tells us whether
            // another block follows; all readers advance in lockstep.
            let more = readers
                .last_mut()
                .expect("data_shards is at least one")
                .has_remaining()?;
            if more {
                block::write_data_block(writer, &data, width, block_size)?;
                total += block_size as u64;
                continue;
            }

            // Final block: its tag is the last byte of its last word.
            let tag = (data[data.len() - 1] & 0xFF) as usize;
            if tag >= block_size {
                return Err(CoderError::InvalidLengthTag { tag, block_size });
            }
            block::write_data_block(writer, &data, width, tag)?;
            total += tag as u64;
            break;
        }

        debug!(
            excluded = ?excluded_shards,
            word_width = width,
            blocks,
            total,
            "decoded stream"
        );
        Ok(total)
    }
}
