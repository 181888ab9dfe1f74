//! One-byte lookahead over a reader.

use std::io::{self, Read};

/// A reader wrapper that can answer "is any byte left?" without consuming
/// it.
///
/// The decoder peeks one shard stream after each full code block to tell
/// whether the block it just read was the last one. A peeked byte is held
/// back and handed out by the next `read`.
pub struct PeekReader<R> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: Read> PeekReader<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    /// Whether at least one more byte can be read.
    pub fn has_remaining(&mut self) -> io::Result<bool> {
        if self.peeked.is_some() {
            return Ok(true);
        }
        let mut byte = [0u8; 1];
        if self.inner.read(&mut byte)? == 0 {
            Ok(false)
        } else {
            self.peeked = Some(byte[0]);
            Ok(true)
        }
    }
}

impl<R: Read> Read for PeekReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(byte) = self.peeked.take() {
            buf[0] = byte;
            return Ok(1);
        }
        self.inner.read(buf)
    }
}
