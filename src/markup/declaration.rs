//! Declaration and processing instruction parser
//!
//! `<?xml key="value" ...?>` becomes an XML declaration, any other
//! `<?target value?>` a processing instruction. The production commits as
//! soon as `?` follows the `<`.

use super::element::parse_attributes;
use super::Markup;
use crate::core::matcher::{CharClass, Cursor, Halt, Scan, ScanExt, WHITESPACE};
use crate::error::Malformation;

const TARGET_END: CharClass = b" \t\n\r?>";
const ATTRIBUTE_END: CharClass = b" \t\n\r=?>";

pub fn parse(cursor: &mut Cursor<'_, '_>) -> Scan<Markup> {
    cursor.match_char(b"?")?;

    let target = cursor.skip_till_char(TARGET_END)?;

    if cursor.slice(target.clone()) == b"xml" {
        cursor.match_chars(WHITESPACE).optional()?;
        let attributes = parse_attributes(cursor, ATTRIBUTE_END)?;
        cursor
            .match_string(b"?>")
            .or_malformed(Malformation::ExpectedDeclarationEnd)?;
        Ok(Markup::XmlDecl { attributes })
    } else {
        if target.is_empty() {
            return Err(Halt::Malformed(Malformation::MissingTarget));
        }
        cursor.match_chars(WHITESPACE).optional()?;
        let value = cursor.skip_till_string(b"?>")?;
        Ok(Markup::ProcessingInstruction { target, value })
    }
}
