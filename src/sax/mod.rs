//! SAX (Simple API for XML) Module
//!
//! Push-style event delivery for the streaming parser.
//!
//! ## Architecture
//!
//! ```text
//! Parser ---> Handler callbacks ---> EventCollector ---> Event[]
//!                   |                                       |
//!                   v                                       v
//!             Passthrough<W>                      Elixir terms (via NIF)
//! ```
//!
//! ## Callbacks
//!
//! - `xml_decl` / `processing_instruction` - `<?...?>`
//! - `doc_type_decl` / `comment` / `cdata_decl` - `<!...>`
//! - `start_element` / `end_element` / `start_end_element` - tags
//! - `text` - character data, entity references left as written
//! - `unhandled` - markup no production recognised
//!
//! Every callback receives the raw source text first.

pub mod collector;
pub mod events;
pub mod handler;
pub mod passthrough;

pub use collector::{parse_events, EventCollector};
pub use events::Event;
pub use handler::Handler;
pub use passthrough::Passthrough;
