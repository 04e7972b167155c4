//! Raw chunk cursor using memchr
//!
//! Walks the bytes of one input chunk exactly once. Bytes handed out by the
//! scanner are never revisited: anything a production still needs is kept
//! in the [`Accumulator`](super::accumulator::Accumulator) scratch buffer.

use memchr::memchr;

/// Forward-only cursor over a single input chunk
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given chunk
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if the chunk is exhausted
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining bytes
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Take the next byte, if any
    #[inline]
    pub fn next_byte(&mut self) -> Option<u8> {
        let b = self.input.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    /// Take up to `n` bytes, returning the taken slice
    #[inline]
    pub fn take(&mut self, n: usize) -> &'a [u8] {
        let end = (self.pos + n).min(self.input.len());
        let slice = &self.input[self.pos..end];
        self.pos = end;
        slice
    }

    /// Find next '<' (tag start) using SIMD, relative to the current position
    #[inline]
    pub fn find_tag_start(&self) -> Option<usize> {
        memchr(b'<', self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag_start() {
        let scanner = Scanner::new(b"hello <world>");
        assert_eq!(scanner.find_tag_start(), Some(6));
    }

    #[test]
    fn test_take_clamps_to_end() {
        let mut scanner = Scanner::new(b"abc");
        assert_eq!(scanner.take(2), b"ab");
        assert_eq!(scanner.take(10), b"c");
        assert!(scanner.is_eof());
        assert_eq!(scanner.next_byte(), None);
    }

    #[test]
    fn test_next_byte_advances() {
        let mut scanner = Scanner::new(b"<a");
        assert_eq!(scanner.next_byte(), Some(b'<'));
        assert_eq!(scanner.position(), 1);
        assert_eq!(scanner.remaining(), b"a");
    }
}
