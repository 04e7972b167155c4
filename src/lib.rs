//! pushxml - Incremental push-based XML parsing
//!
//! Feed XML in chunks of any size and receive callbacks for each production:
//! declarations, processing instructions, DOCTYPE, comments, CDATA, start/end
//! tags and text. Chunk boundaries never change the callbacks, and memory is
//! bounded by the longest single production rather than by the document.
//!
//! ```
//! use pushxml::{EventCollector, Parser};
//!
//! let mut parser = Parser::with_handler(EventCollector::new());
//! parser.parse(b"<gpx><trk", false)?;
//! parser.parse(b"pt lat=\"52.1\"/></gpx>", true)?;
//! assert_eq!(parser.handler().event_count(), 3);
//! # Ok::<(), pushxml::ParseError>(())
//! ```
//!
//! Modules:
//! - `core`: scanner, scratch buffer, matcher, attributes, entity helpers
//! - `markup`: declaration, section and element productions
//! - `parser`: the Text/Markup state machine
//! - `sax`: handler trait and ready-made handlers
//! - `reader`: block reader for blocking sources
//!
//! With the `nif` feature the crate also builds as an Erlang NIF library
//! (`Elixir.PushXml.Native`).

pub mod core;
pub mod error;
pub mod markup;
pub mod parser;
pub mod reader;
pub mod sax;

#[cfg(feature = "nif")]
mod nif;
#[cfg(feature = "nif")]
mod resource;
#[cfg(feature = "nif")]
mod term;

pub use crate::core::accumulator::Position;
pub use crate::core::attributes::{split_name, Attributes};
pub use crate::core::entities::{decode_entities, translate_entity_refs, trim};
pub use error::{AttributeError, Malformation, ParseError, Result};
pub use parser::{ParseState, Parser};
pub use sax::{parse_events, Event, EventCollector, Handler, Passthrough};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
