//! Erlang NIF surface
//!
//! A streaming parser lives in a resource; Elixir feeds chunks and takes
//! batches of collected events.

use crate::core::entities;
use crate::resource::{ParserRef, ParserResource};
use crate::term::{
    self, bytes_to_binary, events_to_term, parse_error_to_term, position_to_term,
};
use rustler::{Binary, Encoder, Env, NifResult, ResourceArc, Term};

/// Create a new streaming parser
#[rustler::nif]
fn streaming_new() -> ParserRef {
    ResourceArc::new(ParserResource::new())
}

/// Feed a chunk to the streaming parser
///
/// Returns `{:ok, available_events}` or `{:error, {:fatal, reason, {line, column}}}`.
/// Events emitted before a fatal error stay available.
#[rustler::nif]
fn streaming_feed<'a>(
    env: Env<'a>,
    parser: ParserRef,
    chunk: Binary<'a>,
    is_final: bool,
) -> NifResult<Term<'a>> {
    let mut inner = parser.lock()?;
    let result = inner.parse(chunk.as_slice(), is_final);
    let available = inner.handler().event_count();
    Ok(match result {
        Ok(()) => (term::ok(), available).encode(env),
        Err(err) => (term::error(), parse_error_to_term(env, &err)).encode(env),
    })
}

/// Take up to `max` events from the streaming parser
#[rustler::nif]
fn streaming_take_events<'a>(
    env: Env<'a>,
    parser: ParserRef,
    max: usize,
) -> NifResult<Term<'a>> {
    let mut inner = parser.lock()?;
    let events = inner.handler_mut().drain_events(max);
    Ok(events_to_term(env, events))
}

/// `{available_events, buffered_bytes, {line, column}}`
#[rustler::nif]
fn streaming_status<'a>(env: Env<'a>, parser: ParserRef) -> NifResult<Term<'a>> {
    let inner = parser.lock()?;
    Ok((
        inner.handler().event_count(),
        inner.buffered_len(),
        position_to_term(env, inner.position()),
    )
        .encode(env))
}

/// Sequential replacement of the five predefined entity references
#[rustler::nif]
fn translate_entity_refs<'a>(env: Env<'a>, text: Binary<'a>) -> Term<'a> {
    bytes_to_binary(env, &entities::translate_entity_refs(text.as_slice()))
}

/// Strip leading and trailing whitespace
#[rustler::nif]
fn trim<'a>(env: Env<'a>, text: Binary<'a>) -> Term<'a> {
    bytes_to_binary(env, entities::trim(text.as_slice()))
}

rustler::init!("Elixir.PushXml.Native");
