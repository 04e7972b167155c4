//! Chunk Accumulator
//!
//! Owns the scratch buffer (`pending`) holding every byte consumed for the
//! production currently being attempted, and the line/column counters.
//!
//! Bytes enter `pending` only through [`Accumulator::byte_at`] and
//! [`Accumulator::extend_from`], which pull them from the raw chunk and
//! advance the position. Replaying bytes already in `pending` never touches
//! the counters.

use super::scanner::Scanner;
use memchr::{memchr_iter, memrchr};
use std::fmt;
use std::ops::Range;

/// Initial scratch capacity, enough for most tags and text runs
pub const DEFAULT_CAPACITY: usize = 256;

/// 1-based line/column of the next byte to be read from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Position of the first byte of a document
    pub const START: Position = Position { line: 1, column: 1 };

    /// Advance over one newly read byte
    #[inline]
    pub fn advance(&mut self, b: u8) {
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advance over a run of newly read bytes
    pub fn advance_over(&mut self, bytes: &[u8]) {
        match memrchr(b'\n', bytes) {
            Some(last) => {
                self.line += memchr_iter(b'\n', bytes).count();
                self.column = bytes.len() - last;
            }
            None => self.column += bytes.len(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Scratch buffer plus position counters for the in-flight production
#[derive(Debug, Clone)]
pub struct Accumulator {
    pending: Vec<u8>,
    position: Position,
}

impl Accumulator {
    /// Create an empty accumulator positioned at the start of a document
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an accumulator with a scratch buffer of the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Accumulator {
            pending: Vec::with_capacity(capacity),
            position: Position::START,
        }
    }

    /// Bytes consumed so far for the current production
    #[inline]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Slice of the scratch buffer
    #[inline]
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        &self.pending[range]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Current position in the raw input
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Acquire the byte at index `j` of the current production.
    ///
    /// Returns the buffered byte when `j` was already consumed, otherwise pulls
    /// the next byte from `input`, records it and advances the position.
    /// `None` means the chunk is exhausted.
    #[inline]
    pub fn byte_at(&mut self, input: &mut Scanner<'_>, j: usize) -> Option<u8> {
        if let Some(&b) = self.pending.get(j) {
            return Some(b);
        }
        debug_assert_eq!(j, self.pending.len());
        let b = input.next_byte()?;
        self.pending.push(b);
        self.position.advance(b);
        Some(b)
    }

    /// Pull `n` raw bytes into the scratch buffer in one step
    pub fn extend_from(&mut self, input: &mut Scanner<'_>, n: usize) {
        let bytes = input.take(n);
        self.position.advance_over(bytes);
        self.pending.extend_from_slice(bytes);
    }

    /// Start a new production, dropping everything buffered
    #[inline]
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Start a new production seeded with one already-consumed byte
    #[inline]
    pub fn restart_with(&mut self, b: u8) {
        self.pending.clear();
        self.pending.push(b);
    }

    /// Drop the last buffered byte (used when a delimiter ends a text run)
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        self.pending.pop()
    }

    /// Forget all buffered bytes and rewind the position
    pub fn reset(&mut self) {
        self.pending.clear();
        self.position = Position::START;
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_does_not_advance_position() {
        let mut acc = Accumulator::new();
        let mut input = Scanner::new(b"ab");
        assert_eq!(acc.byte_at(&mut input, 0), Some(b'a'));
        assert_eq!(acc.position(), Position { line: 1, column: 2 });

        // Replaying index 0 comes from the buffer
        assert_eq!(acc.byte_at(&mut input, 0), Some(b'a'));
        assert_eq!(acc.position(), Position { line: 1, column: 2 });
        assert_eq!(input.position(), 1);

        assert_eq!(acc.byte_at(&mut input, 1), Some(b'b'));
        assert_eq!(acc.byte_at(&mut input, 2), None);
        assert_eq!(acc.pending(), b"ab");
    }

    #[test]
    fn test_newline_resets_column() {
        let mut pos = Position::START;
        for &b in b"ab\ncd" {
            pos.advance(b);
        }
        assert_eq!(pos, Position { line: 2, column: 3 });
    }

    #[test]
    fn test_advance_over_matches_bytewise() {
        let text = b"one\ntwo\n\nthree";
        let mut bulk = Position { line: 4, column: 7 };
        let mut single = bulk;
        bulk.advance_over(text);
        for &b in text {
            single.advance(b);
        }
        assert_eq!(bulk, single);
        assert_eq!(bulk, Position { line: 7, column: 6 });
    }

    #[test]
    fn test_extend_from_tracks_position() {
        let mut acc = Accumulator::new();
        let mut input = Scanner::new(b"x\ny<");
        acc.extend_from(&mut input, 3);
        assert_eq!(acc.pending(), b"x\ny");
        assert_eq!(acc.position(), Position { line: 2, column: 2 });
        assert_eq!(input.remaining(), b"<");
    }

    #[test]
    fn test_restart_and_reset() {
        let mut acc = Accumulator::new();
        let mut input = Scanner::new(b"abc\n");
        acc.extend_from(&mut input, 4);
        acc.restart_with(b'<');
        assert_eq!(acc.pending(), b"<");
        assert_eq!(acc.position().line, 2);
        acc.reset();
        assert!(acc.is_empty());
        assert_eq!(acc.position(), Position::START);
    }
}
