//! Error types
//!
//! Malformed markup is not an error from the caller's point of view: it is
//! handed to [`Handler::unhandled`](crate::sax::Handler::unhandled) and parsing
//! continues. Only fatal malformations and I/O failures surface as
//! [`ParseError`].

use crate::core::accumulator::Position;
use std::io;
use thiserror::Error;

/// Why a committed markup production could not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Malformation {
    #[error("processing instruction without a target")]
    MissingTarget,

    #[error("attribute name not followed by '='")]
    MissingEquals,

    #[error("attribute value must be quoted")]
    UnquotedValue,

    #[error("unescaped '>' inside attribute value")]
    UnescapedTagEnd,

    #[error("attribute value has mismatched quotes")]
    MismatchedQuote,

    #[error("expected '?>' to close the XML declaration")]
    ExpectedDeclarationEnd,

    #[error("expected whitespace after DOCTYPE")]
    ExpectedDocTypeSpace,

    #[error("expected '>' to close the tag")]
    ExpectedTagEnd,

    #[error("end tag marked as self-closing")]
    DuplicateEndMarker,
}

impl Malformation {
    /// Fatal malformations make `parse` report failure after the span has
    /// been passed to `unhandled`
    pub fn is_fatal(self) -> bool {
        matches!(self, Malformation::DuplicateEndMarker)
    }
}

/// Errors returned by the parser entry points
#[derive(Debug, Error)]
pub enum ParseError {
    /// Unrecoverable markup; callers should stop feeding input
    #[error("fatal markup error at {position}: {reason}")]
    Fatal {
        reason: Malformation,
        position: Position,
    },

    /// Reading the input stream failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors from typed attribute access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("attribute '{name}' is not valid UTF-8")]
    NotUtf8 { name: String },

    #[error("attribute '{name}' has non-numeric value {value:?}")]
    NotANumber { name: String, value: String },
}

/// Result type for the parser entry points
pub type Result<T> = std::result::Result<T, ParseError>;
