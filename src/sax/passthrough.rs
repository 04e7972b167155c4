//! Passthrough Writer
//!
//! Handler that writes the raw text of every event to a sink, reproducing
//! the input byte for byte. Useful as a base for filters that rewrite a few
//! productions and copy everything else.

use super::handler::Handler;
use crate::core::accumulator::Position;
use crate::core::attributes::Attributes;
use std::io::{self, Write};

/// Copies raw event text to `W`
///
/// Handler callbacks cannot fail, so the first write error is kept and
/// returned by [`Passthrough::finish`]; later writes are skipped.
#[derive(Debug)]
pub struct Passthrough<W: Write> {
    sink: W,
    error: Option<io::Error>,
    unhandled: usize,
}

impl<W: Write> Passthrough<W> {
    pub fn new(sink: W) -> Self {
        Passthrough {
            sink,
            error: None,
            unhandled: 0,
        }
    }

    /// Number of unhandled spans seen so far
    pub fn unhandled_count(&self) -> usize {
        self.unhandled
    }

    /// Flush the sink and hand it back, or report the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn write(&mut self, raw: &[u8]) {
        if self.error.is_none() {
            if let Err(err) = self.sink.write_all(raw) {
                self.error = Some(err);
            }
        }
    }
}

impl<W: Write> Handler for Passthrough<W> {
    fn xml_decl(&mut self, raw: &[u8], _attributes: &Attributes) {
        self.write(raw);
    }

    fn processing_instruction(&mut self, raw: &[u8], _target: &[u8], _value: &[u8]) {
        self.write(raw);
    }

    fn doc_type_decl(&mut self, raw: &[u8]) {
        self.write(raw);
    }

    fn comment(&mut self, raw: &[u8], _body: &[u8]) {
        self.write(raw);
    }

    fn cdata_decl(&mut self, raw: &[u8], _body: &[u8]) {
        self.write(raw);
    }

    fn start_element(&mut self, raw: &[u8], _name: &[u8], _attributes: &Attributes) {
        self.write(raw);
    }

    fn end_element(&mut self, raw: &[u8], _name: &[u8]) {
        self.write(raw);
    }

    fn start_end_element(&mut self, raw: &[u8], _name: &[u8], _attributes: &Attributes) {
        self.write(raw);
    }

    fn text(&mut self, raw: &[u8]) {
        self.write(raw);
    }

    fn unhandled(&mut self, raw: &[u8], _position: Position) {
        self.unhandled += 1;
        self.write(raw);
    }
}
