//! Elixir Term Conversion Utilities
//!
//! Converts parse events to Elixir terms. Every event is a tagged tuple whose
//! second element is the raw source binary:
//!
//! ```text
//! {:xml_decl, raw, attrs}            {:start_element, raw, name, attrs}
//! {:processing_instruction, raw, target, value}
//! {:doc_type, raw}                   {:end_element, raw, name}
//! {:comment, raw, body}              {:start_end_element, raw, name, attrs}
//! {:cdata, raw, body}                {:text, raw}
//! {:unhandled, raw, {line, column}}
//! ```
//!
//! `attrs` is a list of `{name, value}` binaries sorted by name.

use crate::core::accumulator::Position;
use crate::core::attributes::Attributes;
use crate::error::ParseError;
use crate::sax::Event;
use rustler::{Encoder, Env, NewBinary, Term};

rustler::atoms! {
    ok,
    error,
    fatal,
    io,
    xml_decl,
    processing_instruction,
    doc_type,
    comment,
    cdata,
    start_element,
    end_element,
    start_end_element,
    text,
    unhandled,
}

/// Convert collected events to an Elixir list
pub fn events_to_term<'a>(env: Env<'a>, events: Vec<Event>) -> Term<'a> {
    let mut list = Term::list_new_empty(env);
    for event in events.into_iter().rev() {
        list = list.list_prepend(event_to_term(env, event));
    }
    list
}

/// Convert a single event to an Elixir term
pub fn event_to_term<'a>(env: Env<'a>, event: Event) -> Term<'a> {
    match event {
        Event::XmlDecl { raw, attributes } => (
            xml_decl(),
            bytes_to_binary(env, &raw),
            attributes_to_term(env, &attributes),
        )
            .encode(env),
        Event::ProcessingInstruction { raw, target, value } => (
            processing_instruction(),
            bytes_to_binary(env, &raw),
            bytes_to_binary(env, &target),
            bytes_to_binary(env, &value),
        )
            .encode(env),
        Event::DocType { raw } => (doc_type(), bytes_to_binary(env, &raw)).encode(env),
        Event::Comment { raw, body } => (
            comment(),
            bytes_to_binary(env, &raw),
            bytes_to_binary(env, &body),
        )
            .encode(env),
        Event::CData { raw, body } => (
            cdata(),
            bytes_to_binary(env, &raw),
            bytes_to_binary(env, &body),
        )
            .encode(env),
        Event::StartElement {
            raw,
            name,
            attributes,
        } => (
            start_element(),
            bytes_to_binary(env, &raw),
            bytes_to_binary(env, &name),
            attributes_to_term(env, &attributes),
        )
            .encode(env),
        Event::EndElement { raw, name } => (
            end_element(),
            bytes_to_binary(env, &raw),
            bytes_to_binary(env, &name),
        )
            .encode(env),
        Event::StartEndElement {
            raw,
            name,
            attributes,
        } => (
            start_end_element(),
            bytes_to_binary(env, &raw),
            bytes_to_binary(env, &name),
            attributes_to_term(env, &attributes),
        )
            .encode(env),
        Event::Text { raw } => (text(), bytes_to_binary(env, &raw)).encode(env),
        Event::Unhandled { raw, position } => (
            unhandled(),
            bytes_to_binary(env, &raw),
            position_to_term(env, position),
        )
            .encode(env),
    }
}

/// `{:fatal, reason, {line, column}}` or `{:io, reason}`
pub fn parse_error_to_term<'a>(env: Env<'a>, err: &ParseError) -> Term<'a> {
    match err {
        ParseError::Fatal { reason, position } => (
            fatal(),
            reason.to_string(),
            position_to_term(env, *position),
        )
            .encode(env),
        ParseError::Io(err) => (io(), err.to_string()).encode(env),
    }
}

pub fn position_to_term<'a>(env: Env<'a>, position: Position) -> Term<'a> {
    (position.line, position.column).encode(env)
}

fn attributes_to_term<'a>(env: Env<'a>, attributes: &Attributes) -> Term<'a> {
    let mut pairs: Vec<(&[u8], &[u8])> = attributes.iter().collect();
    pairs.sort_unstable_by(|a, b| b.0.cmp(a.0));

    // Sorted descending so prepending yields ascending order
    let mut list = Term::list_new_empty(env);
    for (name, value) in pairs {
        let tuple = (bytes_to_binary(env, name), bytes_to_binary(env, value));
        list = list.list_prepend(tuple.encode(env));
    }
    list
}

/// Create a binary from bytes
pub fn bytes_to_binary<'a>(env: Env<'a>, bytes: &[u8]) -> Term<'a> {
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
