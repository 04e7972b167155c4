//! Core parsing primitives
//!
//! The fundamental building blocks of the push parser:
//! - Scanner: forward-only cursor over one input chunk
//! - Accumulator: scratch buffer of the in-flight production plus position
//! - Matcher: resumable match/skip primitives replaying the scratch buffer
//! - Attributes: attribute mapping with typed accessors
//! - Entities: entity reference translation and trimming

pub mod accumulator;
pub mod attributes;
pub mod entities;
pub mod matcher;
pub mod scanner;
