//! Word- and block-level packing: big-endian words and the in-band length
//! tag that ends a stream.

use std::io::{Read, Write};

use bytes::{Buf, BufMut};

/// Widest supported word, in bytes.
pub(crate) const MAX_WORD_WIDTH: usize = 8;

/// One data block read from the input stream.
pub(crate) struct DataBlock {
    /// The block's words, one per slot.
    pub words: Vec<u64>,
    /// Payload bytes actually read; below the block size only on the final
    /// block.
    pub bytes_read: usize,
    /// Whether the input ended inside this block.
    pub last: bool,
}

/// Read one data block of `slots` words of `width` bytes each.
///
/// Each slot is filled with `width` payload bytes, interpreted big-endian.
/// Once the input runs dry a slot comes up short: its remaining bytes stay
/// zero and its final byte is overwritten with the running payload count,
/// the length tag. Every later slot re-tags with the same count, so the
/// tag landing in the block's last word is the one the decoder reads back.
///
/// The caller guarantees `slots * width` fits the one-byte tag (enforced
/// at coder construction).
pub(crate) fn read_data_block<R: Read>(
    reader: &mut R,
    width: usize,
    slots: usize,
    block_size: usize,
) -> std::io::Result<DataBlock> {
    debug_assert_eq!(slots * width, block_size);
    let mut words = Vec::with_capacity(slots);
    let mut bytes_read = 0usize;
    for _ in 0..slots {
        let mut buf = [0u8; MAX_WORD_WIDTH];
        let got = read_full(reader, &mut buf[..width])?;
        bytes_read += got;
        if got < width {
            debug_assert!(bytes_read <= u8::MAX as usize);
            buf[width - 1] = bytes_read as u8;
        }
        let mut slice = &buf[..width];
        words.push(slice.get_uint(width));
    }
    Ok(DataBlock {
        words,
        bytes_read,
        last: bytes_read < block_size,
    })
}

/// Serialize a block's words big-endian and emit the first `limit` bytes.
///
/// `limit` is the full block size for interior blocks; for the final block
/// it is the length tag, which trims the padding and the tag itself.
pub(crate) fn write_data_block<W: Write>(
    writer: &mut W,
    words: &[u64],
    width: usize,
    limit: usize,
) -> std::io::Result<()> {
    let mut bytes = Vec::with_capacity(words.len() * width);
    for &word in words {
        bytes.put_uint(word, width);
    }
    writer.write_all(&bytes[..limit])
}

/// Read one `width`-byte big-endian word.
pub(crate) fn read_word<R: Read>(reader: &mut R, width: usize) -> std::io::Result<u64> {
    let mut buf = [0u8; MAX_WORD_WIDTH];
    reader.read_exact(&mut buf[..width])?;
    let mut slice = &buf[..width];
    Ok(slice.get_uint(width))
}

/// Write one `width`-byte big-endian word.
pub(crate) fn write_word<W: Write>(writer: &mut W, word: u64, width: usize) -> std::io::Result<()> {
    let mut buf = [0u8; MAX_WORD_WIDTH];
    let mut slice = &mut buf[..];
    slice.put_uint(word, width);
    writer.write_all(&buf[..width])
}

/// Read until `buf` is full or the stream ends; returns the bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
