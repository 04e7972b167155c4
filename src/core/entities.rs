//! XML Entity Translation
//!
//! Two flavours:
//! - [`translate_entity_refs`]: sequential literal substitution of the five
//!   predefined references, one pass per reference, `&amp;` last. Not
//!   idempotent: `&amp;lt;` becomes `&lt;`, and a second call turns that
//!   into `<`.
//! - [`decode_entities`]: single left-to-right pass that also understands
//!   numeric character references and never re-reads its own output.
//!
//! Both use Cow for zero-copy when no `&` is present.

use memchr::{memchr, memmem};
use std::borrow::Cow;

/// Substitution order used by [`translate_entity_refs`]
const ENTITY_REFS: [(&[u8], u8); 5] = [
    (b"&lt;", b'<'),
    (b"&gt;", b'>'),
    (b"&apos;", b'\''),
    (b"&quot;", b'"'),
    (b"&amp;", b'&'),
];

/// Strip leading and trailing space, tab, CR and LF
pub fn trim(text: &[u8]) -> &[u8] {
    let is_space = |b: &u8| matches!(b, b' ' | b'\t' | b'\r' | b'\n');
    let Some(start) = text.iter().position(|b| !is_space(b)) else {
        return &[];
    };
    // A non-space byte exists, so rposition finds one
    let end = text.iter().rposition(|b| !is_space(b)).unwrap_or(start);
    &text[start..=end]
}

/// Replace the five predefined entity references, one reference at a time
pub fn translate_entity_refs(text: &[u8]) -> Cow<'_, [u8]> {
    if memchr(b'&', text).is_none() {
        return Cow::Borrowed(text);
    }

    let mut result = text.to_vec();
    for (pattern, replacement) in ENTITY_REFS {
        result = replace_all(&result, pattern, replacement);
    }
    Cow::Owned(result)
}

/// Replace every occurrence of `pattern`, resuming the search right after
/// each inserted byte
fn replace_all(input: &[u8], pattern: &[u8], replacement: u8) -> Vec<u8> {
    let finder = memmem::Finder::new(pattern);
    let mut result = Vec::with_capacity(input.len());
    let mut pos = 0;
    for found in finder.find_iter(input) {
        result.extend_from_slice(&input[pos..found]);
        result.push(replacement);
        pos = found + pattern.len();
    }
    result.extend_from_slice(&input[pos..]);
    result
}

/// Decode text content in a single pass
///
/// Returns Borrowed if no entities present (zero-copy),
/// returns Owned if entities were decoded.
#[inline]
pub fn decode_entities(input: &[u8]) -> Cow<'_, [u8]> {
    // Fast path: check if there are any entities using SIMD
    if memchr(b'&', input).is_none() {
        return Cow::Borrowed(input);
    }

    let mut result = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        if let Some(amp_pos) = memchr(b'&', &input[pos..]) {
            // Copy everything before the entity
            result.extend_from_slice(&input[pos..pos + amp_pos]);
            pos += amp_pos;

            // Find the semicolon
            let decoded = memchr(b';', &input[pos..]).and_then(|semi_offset| {
                decode_entity(&input[pos + 1..pos + semi_offset]).map(|c| (c, semi_offset))
            });

            match decoded {
                Some((c, semi_offset)) => {
                    let mut utf8 = [0u8; 4];
                    result.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                    pos += semi_offset + 1;
                }
                None => {
                    // Unknown entity or no semicolon, keep the ampersand
                    result.push(b'&');
                    pos += 1;
                }
            }
        } else {
            // No more entities, copy the rest
            result.extend_from_slice(&input[pos..]);
            break;
        }
    }

    Cow::Owned(result)
}

/// Decode a single entity (without & and ;)
fn decode_entity(entity: &[u8]) -> Option<char> {
    match entity {
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"amp" => Some('&'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] => {
            let hex = std::str::from_utf8(hex).ok()?;
            char::from_u32(u32::from_str_radix(hex, 16).ok()?)
        }
        [b'#', dec @ ..] => {
            let dec = std::str::from_utf8(dec).ok()?;
            char::from_u32(dec.parse::<u32>().ok()?)
        }
        _ => None,
    }
}
