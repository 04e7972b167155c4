//! Section parser: comments, CDATA and DOCTYPE
//!
//! Commits once `<!--`, `<![CDATA[` or `<!DOCTYPE` has matched; any other
//! `<!` is left to the element parser. The DOCTYPE internal subset is
//! skipped, not parsed.

use super::Markup;
use crate::core::matcher::{Cursor, Scan, ScanExt, WHITESPACE};
use crate::error::Malformation;

pub fn parse(cursor: &mut Cursor<'_, '_>) -> Scan<Markup> {
    cursor.match_char(b"!")?;

    if cursor.match_string(b"--").optional()?.is_some() {
        let body = cursor.skip_till_string(b"-->")?;
        return Ok(Markup::Comment { body });
    }

    if cursor.match_string(b"[CDATA[").optional()?.is_some() {
        let body = cursor.skip_till_string(b"]]>")?;
        return Ok(Markup::CData { body });
    }

    cursor.match_string(b"DOCTYPE")?;
    cursor
        .match_char(WHITESPACE)
        .or_malformed(Malformation::ExpectedDocTypeSpace)?;

    cursor.skip_till_char(b"[>")?;
    if cursor.match_char(b"[").optional()?.is_some() {
        cursor.skip_till_char(b"]")?;
        cursor.match_char(b"]")?;
    }
    cursor.skip_till_char(b">")?;
    cursor.match_char(b">")?;

    Ok(Markup::DocType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::Halt;
    use crate::markup::test_support::{run, run_chunks};

    #[test]
    fn test_comment() {
        let (result, acc) = run(b"!-- a <b> -- c -->tail", parse);
        let Ok(Markup::Comment { body }) = result else {
            panic!("expected Comment");
        };
        assert_eq!(acc.slice(body), b" a <b> -- c ");
        assert_eq!(acc.pending(), b"<!-- a <b> -- c -->");
    }

    #[test]
    fn test_empty_comment() {
        let (result, _) = run(b"!---->", parse);
        assert_eq!(result, Ok(Markup::Comment { body: 4..4 }));
    }

    #[test]
    fn test_cdata() {
        let (result, acc) = run(b"![CDATA[x < y ]] z]]>", parse);
        let Ok(Markup::CData { body }) = result else {
            panic!("expected CData");
        };
        assert_eq!(acc.slice(body), b"x < y ]] z");
    }

    #[test]
    fn test_doctype() {
        let (result, acc) = run(b"!DOCTYPE gpx SYSTEM \"gpx.dtd\">", parse);
        assert_eq!(result, Ok(Markup::DocType));
        assert_eq!(acc.pending(), b"<!DOCTYPE gpx SYSTEM \"gpx.dtd\">");
    }

    #[test]
    fn test_doctype_internal_subset() {
        let text: &[u8] = b"!DOCTYPE note [\n<!ELEMENT note (#PCDATA)>\n]>";
        let (result, acc) = run(text, parse);
        assert_eq!(result, Ok(Markup::DocType));
        assert_eq!(&acc.pending()[1..], text);
        assert_eq!(acc.position().line, 3);
    }

    #[test]
    fn test_unknown_declaration_is_not_a_section() {
        let (result, acc) = run(b"!ENTITY x \"y\">", parse);
        assert_eq!(result, Err(Halt::NoMatch));
        assert_eq!(acc.pending(), b"<!E");
    }

    #[test]
    fn test_doctype_requires_space() {
        let (result, _) = run(b"!DOCTYPEgpx>", parse);
        assert_eq!(
            result,
            Err(Halt::Malformed(Malformation::ExpectedDocTypeSpace))
        );
    }

    #[test]
    fn test_not_a_section() {
        assert_eq!(run(b"gpx>", parse).0, Err(Halt::NoMatch));
    }

    #[test]
    fn test_comment_split_in_terminator() {
        let chunks: [&[u8]; 4] = [b"!--comm", b"ent-", b"-", b">"];
        let (result, acc) = run_chunks(&chunks, parse);
        let Ok(Markup::Comment { body }) = result else {
            panic!("expected Comment");
        };
        assert_eq!(acc.slice(body), b"comment");
    }

    #[test]
    fn test_partial_prefix_needs_more() {
        assert_eq!(run(b"!-", parse).0, Err(Halt::NeedMoreInput));
        assert_eq!(run(b"![CDA", parse).0, Err(Halt::NeedMoreInput));
        assert_eq!(run(b"!DOC", parse).0, Err(Halt::NeedMoreInput));
    }
}
