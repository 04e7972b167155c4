//! Handler trait
//!
//! The parser reports every recognised production through this trait. Each
//! callback receives the verbatim source text of the production first, so a
//! handler can pass markup through unchanged. All methods default to doing
//! nothing: implement only the ones you care about.

use crate::core::accumulator::Position;
use crate::core::attributes::Attributes;

/// Receiver of parse events
///
/// Callbacks run synchronously from inside `Parser::parse`.
pub trait Handler {
    /// `<?xml ...?>`
    fn xml_decl(&mut self, _raw: &[u8], _attributes: &Attributes) {}

    /// `<?target value?>`
    fn processing_instruction(&mut self, _raw: &[u8], _target: &[u8], _value: &[u8]) {}

    /// `<!DOCTYPE ...>`; the content is not interpreted
    fn doc_type_decl(&mut self, _raw: &[u8]) {}

    /// `<!--body-->`
    fn comment(&mut self, _raw: &[u8], _body: &[u8]) {}

    /// `<![CDATA[body]]>`
    fn cdata_decl(&mut self, _raw: &[u8], _body: &[u8]) {}

    /// `<name ...>`
    fn start_element(&mut self, _raw: &[u8], _name: &[u8], _attributes: &Attributes) {}

    /// `</name>`
    fn end_element(&mut self, _raw: &[u8], _name: &[u8]) {}

    /// `<name .../>`
    fn start_end_element(&mut self, _raw: &[u8], _name: &[u8], _attributes: &Attributes) {}

    /// Character data between markup, entity references untranslated
    fn text(&mut self, _raw: &[u8]) {}

    /// Markup that no production recognised, or that broke off halfway.
    /// `position` is where the parser stood when it gave up.
    fn unhandled(&mut self, _raw: &[u8], _position: Position) {}
}

/// No handler: callbacks are skipped, scanning still happens
impl Handler for () {}

macro_rules! forward_handler {
    ($($ty:ty),*) => {$(
        impl<H: Handler + ?Sized> Handler for $ty {
            fn xml_decl(&mut self, raw: &[u8], attributes: &Attributes) {
                (**self).xml_decl(raw, attributes)
            }
            fn processing_instruction(&mut self, raw: &[u8], target: &[u8], value: &[u8]) {
                (**self).processing_instruction(raw, target, value)
            }
            fn doc_type_decl(&mut self, raw: &[u8]) {
                (**self).doc_type_decl(raw)
            }
            fn comment(&mut self, raw: &[u8], body: &[u8]) {
                (**self).comment(raw, body)
            }
            fn cdata_decl(&mut self, raw: &[u8], body: &[u8]) {
                (**self).cdata_decl(raw, body)
            }
            fn start_element(&mut self, raw: &[u8], name: &[u8], attributes: &Attributes) {
                (**self).start_element(raw, name, attributes)
            }
            fn end_element(&mut self, raw: &[u8], name: &[u8]) {
                (**self).end_element(raw, name)
            }
            fn start_end_element(&mut self, raw: &[u8], name: &[u8], attributes: &Attributes) {
                (**self).start_end_element(raw, name, attributes)
            }
            fn text(&mut self, raw: &[u8]) {
                (**self).text(raw)
            }
            fn unhandled(&mut self, raw: &[u8], position: Position) {
                (**self).unhandled(raw, position)
            }
        }
    )*};
}

forward_handler!(&mut H, Box<H>);
