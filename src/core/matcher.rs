//! Lexical Matcher
//!
//! Primitive matchers over the current production. Every matcher works on a
//! read cursor into the scratch buffer; bytes past the end of the buffer are
//! pulled from the raw chunk on demand. A sub-parser creates a fresh
//! [`Cursor`] each time it is entered, so the cursor always restarts at
//! [`Cursor::START`] and replays whatever was buffered by earlier attempts.
//! No progress is saved between calls: re-running a sub-parser against a
//! longer buffer reproduces the earlier matches and continues from there.

use super::accumulator::Accumulator;
use super::scanner::Scanner;
use crate::error::Malformation;
use std::ops::Range;

/// Set of bytes a matcher accepts or stops at
pub type CharClass = &'static [u8];

pub const WHITESPACE: CharClass = b" \t\r\n";

/// Why a matcher did not produce a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The chunk ran out before the match could be decided
    NeedMoreInput,
    /// The next bytes do not start this production
    NoMatch,
    /// The production was committed but cannot complete
    Malformed(Malformation),
}

/// `Ok` is the `Matched` outcome
pub type Scan<T> = Result<T, Halt>;

/// Combinators for interpreting a [`Halt::NoMatch`]
pub trait ScanExt<T> {
    /// Treat `NoMatch` as an absent optional production
    fn optional(self) -> Scan<Option<T>>;

    /// Treat `NoMatch` as a hard failure of a committed production
    fn or_malformed(self, reason: Malformation) -> Scan<T>;
}

impl<T> ScanExt<T> for Scan<T> {
    #[inline]
    fn optional(self) -> Scan<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(Halt::NoMatch) => Ok(None),
            Err(halt) => Err(halt),
        }
    }

    #[inline]
    fn or_malformed(self, reason: Malformation) -> Scan<T> {
        self.map_err(|halt| match halt {
            Halt::NoMatch => Halt::Malformed(reason),
            other => other,
        })
    }
}

/// Read cursor over the scratch buffer of the current production
pub struct Cursor<'c, 'a> {
    input: &'c mut Scanner<'a>,
    acc: &'c mut Accumulator,
    at: usize,
}

impl<'c, 'a> Cursor<'c, 'a> {
    /// Offset of the first byte after the production's leading `<`
    pub const START: usize = 1;

    pub fn new(input: &'c mut Scanner<'a>, acc: &'c mut Accumulator) -> Self {
        Cursor {
            input,
            acc,
            at: Self::START,
        }
    }

    /// Current read offset into the scratch buffer
    #[inline]
    pub fn offset(&self) -> usize {
        self.at
    }

    /// Bytes of the scratch buffer
    #[inline]
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        self.acc.slice(range)
    }

    #[inline]
    fn byte(&mut self, j: usize) -> Scan<u8> {
        self.acc
            .byte_at(self.input, j)
            .ok_or(Halt::NeedMoreInput)
    }

    /// Match one byte from `class`
    pub fn match_char(&mut self, class: CharClass) -> Scan<u8> {
        let b = self.byte(self.at)?;
        if class.contains(&b) {
            self.at += 1;
            Ok(b)
        } else {
            Err(Halt::NoMatch)
        }
    }

    /// Match a fixed byte string
    pub fn match_string(&mut self, literal: &[u8]) -> Scan<()> {
        for (k, &expected) in literal.iter().enumerate() {
            if self.byte(self.at + k)? != expected {
                return Err(Halt::NoMatch);
            }
        }
        self.at += literal.len();
        Ok(())
    }

    /// Match one or more bytes from `class`
    ///
    /// Running out of input after a partial run is `NeedMoreInput`: the run
    /// may continue in the next chunk.
    pub fn match_chars(&mut self, class: CharClass) -> Scan<Range<usize>> {
        let start = self.at;
        loop {
            match self.match_char(class) {
                Ok(_) => {}
                Err(Halt::NoMatch) => break,
                Err(halt) => return Err(halt),
            }
        }
        if self.at > start {
            Ok(start..self.at)
        } else {
            Err(Halt::NoMatch)
        }
    }

    /// Skip bytes until one from `class`; the terminator is not consumed
    pub fn skip_till_char(&mut self, class: CharClass) -> Scan<Range<usize>> {
        let start = self.at;
        loop {
            let b = self.byte(self.at)?;
            if class.contains(&b) {
                return Ok(start..self.at);
            }
            self.at += 1;
        }
    }

    /// Skip bytes until `literal`; the terminator is consumed but excluded
    /// from the returned range
    pub fn skip_till_string(&mut self, literal: &[u8]) -> Scan<Range<usize>> {
        let start = self.at;
        loop {
            match self.match_string(literal) {
                Ok(()) => return Ok(start..self.at - literal.len()),
                Err(Halt::NoMatch) => self.at += 1,
                Err(halt) => return Err(halt),
            }
        }
    }
}
