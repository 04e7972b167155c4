//! Streaming Parser
//!
//! Push parser that consumes XML in arbitrarily sized chunks with bounded
//! memory. The scratch buffer only ever holds the production in flight (a
//! text run or one piece of markup), never the document.
//!
//! ## State machine
//!
//! ```text
//!          '<'                      markup matched / unhandled
//!   Text -------> Markup ------------------------------------> Text
//!    ^  \__ text run buffered           \__ NeedMoreInput: wait for next chunk
//! ```
//!
//! Chunk boundaries are invisible in the callbacks: feeding a document one
//! byte at a time produces the same events as feeding it whole.

use crate::core::accumulator::{Accumulator, Position, DEFAULT_CAPACITY};
use crate::core::matcher::Halt;
use crate::core::scanner::Scanner;
use crate::error::{Malformation, ParseError, Result};
use crate::markup::parse_markup;
use crate::reader::{BlockReader, DEFAULT_BLOCK_SIZE};
use crate::sax::Handler;
use log::{debug, trace, warn};
use std::ffi::CStr;
use std::io::Read;

/// What the parser is in the middle of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Collecting character data up to the next `<`
    Text,
    /// Matching a production that started with `<`
    Markup,
}

/// Incremental push parser
///
/// `H` receives the callbacks. `()` parses without a handler (positions are
/// still tracked); pass `&mut handler` to keep ownership on the caller side.
pub struct Parser<H: Handler = ()> {
    handler: H,
    acc: Accumulator,
    state: ParseState,
}

impl Parser {
    /// Create a parser without a handler
    pub fn new() -> Self {
        Parser::with_handler(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handler> Parser<H> {
    /// Create a parser delivering callbacks to `handler`
    pub fn with_handler(handler: H) -> Self {
        Self::with_capacity(handler, DEFAULT_CAPACITY)
    }

    /// Create a parser with an initial scratch buffer of `capacity` bytes
    pub fn with_capacity(handler: H, capacity: usize) -> Self {
        Parser {
            handler,
            acc: Accumulator::with_capacity(capacity),
            state: ParseState::Text,
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Line/column of the next byte to be read
    pub fn position(&self) -> Position {
        self.acc.position()
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Bytes held for the production in flight
    pub fn buffered_len(&self) -> usize {
        self.acc.len()
    }

    /// Drop buffered input and rewind to the start of a new document
    pub fn reset(&mut self) {
        self.acc.reset();
        self.state = ParseState::Text;
    }

    /// Feed one chunk
    ///
    /// Running out of input mid-production is not an error: the partial
    /// production is kept and resumed by the next call. With `is_final` set,
    /// whatever is still buffered afterwards is flushed through `text` or
    /// `unhandled`, and the parser is ready for a new document.
    ///
    /// Returns [`ParseError::Fatal`] when markup is unrecoverable. The span
    /// has already been passed to `unhandled`; the rest of the chunk is not
    /// consumed and callers should stop feeding input.
    pub fn parse(&mut self, chunk: &[u8], is_final: bool) -> Result<()> {
        let mut input = Scanner::new(chunk);
        loop {
            let progressed = match self.state {
                ParseState::Text => self.scan_text(&mut input),
                ParseState::Markup => self.scan_markup(&mut input)?,
            };
            if !progressed {
                break;
            }
        }
        if is_final {
            self.finish();
        }
        Ok(())
    }

    pub fn parse_str(&mut self, chunk: &str, is_final: bool) -> Result<()> {
        self.parse(chunk.as_bytes(), is_final)
    }

    /// Feed a null-terminated string; the terminator is not part of the input
    pub fn parse_c_str(&mut self, chunk: &CStr, is_final: bool) -> Result<()> {
        self.parse(chunk.to_bytes(), is_final)
    }

    /// Parse a whole document from a blocking source
    pub fn parse_reader<R: Read>(&mut self, reader: R) -> Result<()> {
        self.parse_reader_with_block_size(reader, DEFAULT_BLOCK_SIZE)
    }

    /// Parse a whole document from a blocking source, `block_size` bytes at a
    /// time. A short block is the final chunk.
    pub fn parse_reader_with_block_size<R: Read>(
        &mut self,
        reader: R,
        block_size: usize,
    ) -> Result<()> {
        let mut blocks = BlockReader::with_block_size(reader, block_size);
        let block_size = blocks.block_size();
        loop {
            let block = blocks.next_block()?;
            let is_final = block.len() < block_size;
            self.parse(block, is_final)?;
            if is_final {
                return Ok(());
            }
        }
    }

    /// Buffer text up to the next `<`. Returns false when the chunk ran out
    /// first.
    fn scan_text(&mut self, input: &mut Scanner<'_>) -> bool {
        match input.find_tag_start() {
            Some(len) => {
                self.acc.extend_from(input, len);
                if !self.acc.is_empty() {
                    self.handler.text(self.acc.pending());
                }
                self.acc.clear();
                self.acc.extend_from(input, 1);
                self.state = ParseState::Markup;
                true
            }
            None => {
                let len = input.remaining().len();
                self.acc.extend_from(input, len);
                false
            }
        }
    }

    /// Run the markup productions over the buffered `<...`. Returns false
    /// when the chunk ran out first.
    fn scan_markup(&mut self, input: &mut Scanner<'_>) -> Result<bool> {
        match parse_markup(input, &mut self.acc) {
            Ok(markup) => {
                markup.emit(self.acc.pending(), &mut self.handler);
                self.end_production();
                Ok(true)
            }
            Err(Halt::NeedMoreInput) => {
                trace!(
                    "markup suspended after {} bytes at {}",
                    self.acc.len(),
                    self.acc.position()
                );
                Ok(false)
            }
            Err(Halt::NoMatch) => {
                debug!("unrecognised markup at {}", self.acc.position());
                self.flush_unhandled();
                Ok(true)
            }
            Err(Halt::Malformed(reason)) => {
                debug!("malformed markup at {}: {}", self.acc.position(), reason);
                self.fail(reason)
            }
        }
    }

    fn fail(&mut self, reason: Malformation) -> Result<bool> {
        let position = self.acc.position();
        self.flush_unhandled();
        if reason.is_fatal() {
            warn!("fatal markup error at {}: {}", position, reason);
            return Err(ParseError::Fatal { reason, position });
        }
        Ok(true)
    }

    fn flush_unhandled(&mut self) {
        self.handler
            .unhandled(self.acc.pending(), self.acc.position());
        self.end_production();
    }

    fn end_production(&mut self) {
        self.acc.clear();
        self.state = ParseState::Text;
    }

    fn finish(&mut self) {
        match self.state {
            ParseState::Text => {
                if !self.acc.is_empty() {
                    self.handler.text(self.acc.pending());
                }
                self.end_production();
            }
            ParseState::Markup => {
                debug!("unterminated markup at end of input, {}", self.acc.position());
                self.flush_unhandled();
            }
        }
    }
}
