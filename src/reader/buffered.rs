//! Block Reader
//!
//! Reads a blocking byte source in fixed-size blocks for the stream entry
//! point. Each block is filled completely unless the source ends, so a short
//! block marks the end of input.

use std::io::{self, Read};

/// Default block size for stream parsing
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Fixed-size block reader over any `Read` source
pub struct BlockReader<R: Read> {
    reader: R,
    buffer: Vec<u8>,
    total: u64,
    eof: bool,
}

impl<R: Read> BlockReader<R> {
    /// Create a block reader with [`DEFAULT_BLOCK_SIZE`]
    pub fn new(reader: R) -> Self {
        Self::with_block_size(reader, DEFAULT_BLOCK_SIZE)
    }

    /// Create a block reader with the given block size (at least one byte)
    pub fn with_block_size(reader: R, block_size: usize) -> Self {
        BlockReader {
            reader,
            buffer: vec![0u8; block_size.max(1)],
            total: 0,
            eof: false,
        }
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the source has reported end of input
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Bytes read from the source so far
    #[inline]
    pub fn total_read(&self) -> u64 {
        self.total
    }

    /// Read the next block
    ///
    /// The block is shorter than [`block_size`](Self::block_size) only at end
    /// of input; once the source is exhausted every call returns an empty
    /// block. Interrupted reads are retried.
    pub fn next_block(&mut self) -> io::Result<&[u8]> {
        let mut filled = 0;
        while !self.eof && filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => self.eof = true,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        self.total += filled as u64;
        Ok(&self.buffer[..filled])
    }
}
