//! Event Collector
//!
//! Handler that copies every callback into an owned [`Event`], for callers
//! (and the NIF layer) that want events in batches rather than callbacks.

use super::events::Event;
use super::handler::Handler;
use crate::core::accumulator::Position;
use crate::core::attributes::Attributes;
use crate::error::Result;
use crate::parser::Parser;

/// Collector that gathers owned events during parsing
#[derive(Debug, Default, Clone)]
pub struct EventCollector {
    events: Vec<Event>,
}

impl EventCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Create with an estimated event count
    pub fn with_capacity(events: usize) -> Self {
        Self {
            events: Vec::with_capacity(events),
        }
    }

    /// Events collected so far
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Take the collected events, leaving the collector empty
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Take up to `max` of the oldest events, leaving the rest in place
    pub fn drain_events(&mut self, max: usize) -> Vec<Event> {
        let count = max.min(self.events.len());
        if count == self.events.len() {
            std::mem::take(&mut self.events)
        } else {
            self.events.drain(..count).collect()
        }
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Handler for EventCollector {
    fn xml_decl(&mut self, raw: &[u8], attributes: &Attributes) {
        self.events.push(Event::XmlDecl {
            raw: raw.to_vec(),
            attributes: attributes.clone(),
        });
    }

    fn processing_instruction(&mut self, raw: &[u8], target: &[u8], value: &[u8]) {
        self.events.push(Event::ProcessingInstruction {
            raw: raw.to_vec(),
            target: target.to_vec(),
            value: value.to_vec(),
        });
    }

    fn doc_type_decl(&mut self, raw: &[u8]) {
        self.events.push(Event::DocType { raw: raw.to_vec() });
    }

    fn comment(&mut self, raw: &[u8], body: &[u8]) {
        self.events.push(Event::Comment {
            raw: raw.to_vec(),
            body: body.to_vec(),
        });
    }

    fn cdata_decl(&mut self, raw: &[u8], body: &[u8]) {
        self.events.push(Event::CData {
            raw: raw.to_vec(),
            body: body.to_vec(),
        });
    }

    fn start_element(&mut self, raw: &[u8], name: &[u8], attributes: &Attributes) {
        self.events.push(Event::StartElement {
            raw: raw.to_vec(),
            name: name.to_vec(),
            attributes: attributes.clone(),
        });
    }

    fn end_element(&mut self, raw: &[u8], name: &[u8]) {
        self.events.push(Event::EndElement {
            raw: raw.to_vec(),
            name: name.to_vec(),
        });
    }

    fn start_end_element(&mut self, raw: &[u8], name: &[u8], attributes: &Attributes) {
        self.events.push(Event::StartEndElement {
            raw: raw.to_vec(),
            name: name.to_vec(),
            attributes: attributes.clone(),
        });
    }

    fn text(&mut self, raw: &[u8]) {
        self.events.push(Event::Text { raw: raw.to_vec() });
    }

    fn unhandled(&mut self, raw: &[u8], position: Position) {
        self.events.push(Event::Unhandled {
            raw: raw.to_vec(),
            position,
        });
    }
}

/// Parse a complete document and return its events
pub fn parse_events(input: &[u8]) -> Result<Vec<Event>> {
    let mut parser = Parser::with_handler(EventCollector::new());
    parser.parse(input, true)?;
    Ok(parser.into_handler().into_events())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Malformation, ParseError};

    #[test]
    fn test_simple_parse() {
        let events = parse_events(b"<root><child/></root>").unwrap();

        assert_eq!(events.len(), 3);
        assert!(events[0].is_start_element());
        assert!(matches!(events[1], Event::StartEndElement { .. }));
        assert_eq!(events[2].element_name(), Some(&b"root"[..]));
    }

    #[test]
    fn test_with_text() {
        let events = parse_events(b"<a>hello &amp; bye</a>").unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            Event::Text {
                raw: b"hello &amp; bye".to_vec()
            }
        );
    }

    #[test]
    fn test_with_attributes() {
        let events = parse_events(b"<root id=\"1\" name=\"test\"/>").unwrap();

        assert_eq!(events.len(), 1);
        let attributes = events[0].attributes().unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("name"), Some(&b"test"[..]));
    }

    #[test]
    fn test_take_events_drains() {
        let mut collector = EventCollector::new();
        collector.text(b"x");
        assert_eq!(collector.take_events().len(), 1);
        assert_eq!(collector.event_count(), 0);
    }

    #[test]
    fn test_drain_events_keeps_order() {
        let mut collector = EventCollector::with_capacity(3);
        for raw in [&b"a"[..], &b"b"[..], &b"c"[..]] {
            collector.text(raw);
        }

        let first = collector.drain_events(2);
        assert_eq!(
            first.iter().map(Event::raw).collect::<Vec<_>>(),
            vec![&b"a"[..], &b"b"[..]]
        );
        assert_eq!(collector.drain_events(10).len(), 1);
        assert!(collector.drain_events(10).is_empty());
    }

    #[test]
    fn test_fatal_markup_is_an_error() {
        let err = parse_events(b"<a></a/>").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Fatal {
                reason: Malformation::DuplicateEndMarker,
                ..
            }
        ));
    }
}
