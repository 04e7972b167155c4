//! XML Reader Module
//!
//! Input sources for the parser:
//! - BlockReader: fixed-size blocks from a blocking `Read` source

pub mod buffered;

pub use buffered::{BlockReader, DEFAULT_BLOCK_SIZE};
