//! Streaming encode: one byte stream in, N shard streams out.

use std::io::{Read, Write};

use tracing::debug;

use crate::block;
use crate::coder::{apply_bits, Coder};
use crate::error::CoderError;

impl Coder {
    /// Encode `reader` into one stream per shard.
    ///
    /// Reads the input in blocks of [`data_block_size`] bytes, multiplies
    /// each block by the bit-expanded Cauchy matrix (a conditional XOR of
    /// words per matrix row), and appends each shard's `degree` words of
    /// every block to its writer. The final, short block carries the
    /// stream length in its last byte so that decoding can restore the
    /// exact byte count; a stream that fills its last block exactly gets
    /// one extra tag-only block.
    ///
    /// Returns the total number of payload bytes consumed, which equals
    /// the length of the input stream.
    ///
    /// # Errors
    ///
    /// [`CoderError::WrongWriterCount`] unless exactly
    /// [`shards`](crate::CoderConfig::shards) writers are supplied;
    /// [`CoderError::Io`] when the reader or any writer fails.
    ///
    /// [`data_block_size`]: crate::CoderConfig::data_block_size
    pub fn encode<R: Read, W: Write>(
        &self,
        reader: &mut R,
        writers: &mut [W],
    ) -> Result<u64, CoderError> {
        let config = self.config();
        if writers.len() != config.shards() {
            return Err(CoderError::WrongWriterCount {
                expected: config.shards(),
                got: writers.len(),
            });
        }

        let degree = config.degree() as usize;
        let width = config.word_width();
        let mut total = 0u64;
        let mut blocks = 0u64;
        loop {
            let block = block::read_data_block(
                reader,
                width,
                config.data_words(),
                config.data_block_size(),
            )?;
            let code = apply_bits(self.encoder_bits(), &block.words);
            debug_assert_eq!(code.len(), config.code_words());
            for (i, &word) in code.iter().enumerate() {
                block::write_word(&mut writers[i / degree], word, width)?;
            }
            blocks += 1;
            if block.last {
                total += block.bytes_read as u64;
                break;
            }
            total += config.data_block_size() as u64;
        }

        debug!(
            shards = config.shards(),
            data_shards = config.data_shards(),
            word_width = width,
            blocks,
            total,
            "encoded stream"
        );
        Ok(total)
    }
}
