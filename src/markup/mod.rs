//! Markup Sub-Parsers
//!
//! Each sub-parser is a function of the raw chunk and the scratch buffer,
//! entered with a fresh [`Cursor`] positioned just past the leading `<`.
//! They are tried in order: declaration/PI (`<?`), section (`<!`), element.
//! A sub-parser returns [`Halt::NoMatch`] only before it has committed to its
//! production; afterwards failures are [`Halt::Malformed`].
//!
//! Productions are returned as ranges into the scratch buffer and only turned
//! into handler arguments once the whole production has matched.

pub mod declaration;
pub mod element;
pub mod section;

use crate::core::accumulator::Accumulator;
use crate::core::attributes::Attributes;
use crate::core::matcher::{Cursor, Halt, Scan};
use crate::core::scanner::Scanner;
use crate::sax::Handler;
use std::ops::Range;

/// (name, value) ranges of attributes in the scratch buffer
pub type AttributeSpans = Vec<(Range<usize>, Range<usize>)>;

/// A fully matched markup production
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// `<?xml ...?>`
    XmlDecl { attributes: AttributeSpans },
    /// `<?target value?>`
    ProcessingInstruction {
        target: Range<usize>,
        value: Range<usize>,
    },
    /// `<!DOCTYPE ...>`, internal subset skipped
    DocType,
    /// `<!--body-->`
    Comment { body: Range<usize> },
    /// `<![CDATA[body]]>`
    CData { body: Range<usize> },
    /// `<name attrs...>`
    StartElement {
        name: Range<usize>,
        attributes: AttributeSpans,
    },
    /// `</name>`
    EndElement { name: Range<usize> },
    /// `<name attrs.../>`
    StartEndElement {
        name: Range<usize>,
        attributes: AttributeSpans,
    },
}

impl Markup {
    /// Invoke the matching handler callback; `raw` is the scratch buffer
    /// holding exactly this production
    pub fn emit<H: Handler + ?Sized>(self, raw: &[u8], handler: &mut H) {
        match self {
            Markup::XmlDecl { attributes } => {
                handler.xml_decl(raw, &collect_attributes(raw, attributes));
            }
            Markup::ProcessingInstruction { target, value } => {
                handler.processing_instruction(raw, &raw[target], &raw[value]);
            }
            Markup::DocType => handler.doc_type_decl(raw),
            Markup::Comment { body } => handler.comment(raw, &raw[body]),
            Markup::CData { body } => handler.cdata_decl(raw, &raw[body]),
            Markup::StartElement { name, attributes } => {
                let attributes = collect_attributes(raw, attributes);
                handler.start_element(raw, &raw[name], &attributes);
            }
            Markup::EndElement { name } => handler.end_element(raw, &raw[name]),
            Markup::StartEndElement { name, attributes } => {
                let attributes = collect_attributes(raw, attributes);
                handler.start_end_element(raw, &raw[name], &attributes);
            }
        }
    }
}

fn collect_attributes(raw: &[u8], spans: AttributeSpans) -> Attributes {
    spans
        .into_iter()
        .map(|(name, value)| (&raw[name], &raw[value]))
        .collect()
}

/// Try every markup production against the buffered `<...`
///
/// `NoMatch` means no production recognised the markup.
pub fn parse_markup(input: &mut Scanner<'_>, acc: &mut Accumulator) -> Scan<Markup> {
    match declaration::parse(&mut Cursor::new(input, acc)) {
        Err(Halt::NoMatch) => {}
        other => return other,
    }
    match section::parse(&mut Cursor::new(input, acc)) {
        Err(Halt::NoMatch) => {}
        other => return other,
    }
    element::parse(&mut Cursor::new(input, acc))
}
