//! Owned Event Types
//!
//! One variant per handler callback. Every variant carries the verbatim
//! source text in `raw`, so concatenating the `raw` of all events restores the
//! input (minus a trailing incomplete production that was never flushed).

use crate::core::accumulator::Position;
use crate::core::attributes::Attributes;

/// An owned parse event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `<?xml ...?>`
    XmlDecl { raw: Vec<u8>, attributes: Attributes },

    /// `<?target value?>`
    ProcessingInstruction {
        raw: Vec<u8>,
        target: Vec<u8>,
        value: Vec<u8>,
    },

    /// `<!DOCTYPE ...>`
    DocType { raw: Vec<u8> },

    /// `<!--body-->`
    Comment { raw: Vec<u8>, body: Vec<u8> },

    /// `<![CDATA[body]]>`
    CData { raw: Vec<u8>, body: Vec<u8> },

    /// `<name ...>`
    StartElement {
        raw: Vec<u8>,
        name: Vec<u8>,
        attributes: Attributes,
    },

    /// `</name>`
    EndElement { raw: Vec<u8>, name: Vec<u8> },

    /// `<name .../>`
    StartEndElement {
        raw: Vec<u8>,
        name: Vec<u8>,
        attributes: Attributes,
    },

    /// Character data
    Text { raw: Vec<u8> },

    /// Unrecognised or broken markup
    Unhandled { raw: Vec<u8>, position: Position },
}

impl Event {
    /// Verbatim source text of the event
    pub fn raw(&self) -> &[u8] {
        match self {
            Event::XmlDecl { raw, .. }
            | Event::ProcessingInstruction { raw, .. }
            | Event::DocType { raw }
            | Event::Comment { raw, .. }
            | Event::CData { raw, .. }
            | Event::StartElement { raw, .. }
            | Event::EndElement { raw, .. }
            | Event::StartEndElement { raw, .. }
            | Event::Text { raw }
            | Event::Unhandled { raw, .. } => raw,
        }
    }

    #[inline]
    pub fn is_start_element(&self) -> bool {
        matches!(self, Event::StartElement { .. } | Event::StartEndElement { .. })
    }

    #[inline]
    pub fn is_end_element(&self) -> bool {
        matches!(self, Event::EndElement { .. } | Event::StartEndElement { .. })
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Event::Text { .. })
    }

    #[inline]
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Event::Unhandled { .. })
    }

    /// Element name for start, end and self-closing tags
    pub fn element_name(&self) -> Option<&[u8]> {
        match self {
            Event::StartElement { name, .. }
            | Event::EndElement { name, .. }
            | Event::StartEndElement { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Attributes of a declaration or start tag
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Event::XmlDecl { attributes, .. }
            | Event::StartElement { attributes, .. }
            | Event::StartEndElement { attributes, .. } => Some(attributes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_is_start_and_end() {
        let event = Event::StartEndElement {
            raw: b"<br/>".to_vec(),
            name: b"br".to_vec(),
            attributes: Attributes::new(),
        };
        assert!(event.is_start_element());
        assert!(event.is_end_element());
        assert_eq!(event.element_name(), Some(&b"br"[..]));
        assert_eq!(event.raw(), b"<br/>");
    }

    #[test]
    fn test_text_has_no_name() {
        let event = Event::Text {
            raw: b"hello".to_vec(),
        };
        assert!(event.is_text());
        assert_eq!(event.element_name(), None);
        assert_eq!(event.attributes(), None);
    }
}
