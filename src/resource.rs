//! ResourceArc Wrappers
//!
//! Persistent state for streaming parsers held by the BEAM between calls.

use crate::parser::Parser;
use crate::sax::EventCollector;
use rustler::{NifResult, ResourceArc};
use std::sync::{Mutex, MutexGuard};

/// Streaming parser collecting events until Elixir takes them
pub struct ParserResource {
    inner: Mutex<Parser<EventCollector>>,
}

impl ParserResource {
    pub fn new() -> Self {
        ParserResource {
            inner: Mutex::new(Parser::with_handler(EventCollector::new())),
        }
    }

    /// Lock the parser
    ///
    /// # Errors
    ///
    /// Raises `"mutex_poisoned"` if a previous call panicked while holding the
    /// lock.
    pub fn lock(&self) -> NifResult<MutexGuard<'_, Parser<EventCollector>>> {
        self.inner
            .lock()
            .map_err(|_| rustler::Error::Term(Box::new("mutex_poisoned")))
    }
}

#[rustler::resource_impl]
impl rustler::Resource for ParserResource {}

impl Default for ParserResource {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the ResourceArc
pub type ParserRef = ResourceArc<ParserResource>;
