//! Element and attribute parser
//!
//! Start tags `<name a="v">`, end tags `</name>` and self-closing tags
//! `<name a="v"/>`. The attribute parser is shared with the XML declaration.

use super::{AttributeSpans, Markup};
use crate::core::matcher::{CharClass, Cursor, Halt, Scan, ScanExt, WHITESPACE};
use crate::error::Malformation;
use std::ops::Range;

const NAME_END: CharClass = b" \t\n\r/>";
const ATTRIBUTE_END: CharClass = b" \t\n\r=/>";

const DOUBLE_QUOTE: CharClass = b"\"";
const DOUBLE_QUOTED_END: CharClass = b"\">";
const SINGLE_QUOTE: CharClass = b"'";
const SINGLE_QUOTED_END: CharClass = b"'>";

pub fn parse(cursor: &mut Cursor<'_, '_>) -> Scan<Markup> {
    let end_tag = cursor.match_char(b"/").optional()?.is_some();

    let name = cursor.skip_till_char(NAME_END)?;
    if name.is_empty() {
        return Err(Halt::NoMatch);
    }

    cursor.match_chars(WHITESPACE).optional()?;

    let attributes = if end_tag {
        AttributeSpans::new()
    } else {
        parse_attributes(cursor, ATTRIBUTE_END)?
    };

    let self_closing = cursor.match_char(b"/").optional()?.is_some();
    if end_tag && self_closing {
        return Err(Halt::Malformed(Malformation::DuplicateEndMarker));
    }

    cursor
        .match_char(b">")
        .or_malformed(Malformation::ExpectedTagEnd)?;

    Ok(match (end_tag, self_closing) {
        (true, _) => Markup::EndElement { name },
        (false, true) => Markup::StartEndElement { name, attributes },
        (false, false) => Markup::StartElement { name, attributes },
    })
}

/// Parse attributes until no further name is found
pub fn parse_attributes(
    cursor: &mut Cursor<'_, '_>,
    terminators: CharClass,
) -> Scan<AttributeSpans> {
    let mut attributes = AttributeSpans::new();
    while let Some(attribute) = parse_attribute(cursor, terminators)? {
        attributes.push(attribute);
    }
    Ok(attributes)
}

/// Parse one `name = "value"` pair plus trailing whitespace
///
/// `Ok(None)` when no name precedes the next terminator: there are no more
/// attributes.
pub fn parse_attribute(
    cursor: &mut Cursor<'_, '_>,
    terminators: CharClass,
) -> Scan<Option<(Range<usize>, Range<usize>)>> {
    let name = cursor.skip_till_char(terminators)?;
    if name.is_empty() {
        return Ok(None);
    }

    cursor.match_chars(WHITESPACE).optional()?;
    cursor
        .match_char(b"=")
        .or_malformed(Malformation::MissingEquals)?;
    cursor.match_chars(WHITESPACE).optional()?;

    let quote = cursor
        .match_char(b"\"'")
        .or_malformed(Malformation::UnquotedValue)?;
    let (closing, value_end, other_quote) = if quote == b'"' {
        (DOUBLE_QUOTE, DOUBLE_QUOTED_END, b'\'')
    } else {
        (SINGLE_QUOTE, SINGLE_QUOTED_END, b'"')
    };

    let value = cursor.skip_till_char(value_end)?;
    if cursor.match_char(b">").optional()?.is_some() {
        let reason = if cursor.slice(value.clone()).contains(&other_quote) {
            Malformation::MismatchedQuote
        } else {
            Malformation::UnescapedTagEnd
        };
        return Err(Halt::Malformed(reason));
    }
    cursor
        .match_char(closing)
        .or_malformed(Malformation::MismatchedQuote)?;

    cursor.match_chars(WHITESPACE).optional()?;

    Ok(Some((name, value)))
}
