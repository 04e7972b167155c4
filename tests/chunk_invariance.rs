//! Property-based tests for chunked parsing
//!
//! Documents are assembled from GPX-like fragments, including a few broken
//! ones, and fed to the parser split at arbitrary points:
//! - the callbacks never depend on where the chunks are cut
//! - the raw text of all callbacks reproduces the document
//! - after every chunk the position matches the bytes fed so far

use proptest::prelude::*;
use pushxml::{Event, EventCollector, Parser, Position};

/// Generate element and attribute names, optionally prefixed
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9]{0,6}",
        "[a-z]{1,3}:[a-z][a-z0-9]{0,4}",
    ]
}

/// Generate attribute lists with either quote style
fn attributes_strategy() -> impl Strategy<Value = String> {
    let attribute = prop_oneof![
        (name_strategy(), "[a-z0-9 .']{0,8}").prop_map(|(k, v)| format!("{}=\"{}\"", k, v)),
        (name_strategy(), "[a-z0-9 .\"]{0,8}").prop_map(|(k, v)| format!("{} = '{}'", k, v)),
    ];
    prop::collection::vec(attribute, 0..4).prop_map(|attrs| {
        attrs
            .into_iter()
            .map(|a| format!(" {}", a))
            .collect::<String>()
    })
}

/// Generate one piece of a document
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Tags
        (name_strategy(), attributes_strategy()).prop_map(|(n, a)| format!("<{}{}>", n, a)),
        (name_strategy(), attributes_strategy()).prop_map(|(n, a)| format!("<{}{}/>", n, a)),
        name_strategy().prop_map(|n| format!("</{}>", n)),
        name_strategy().prop_map(|n| format!("</{}\n>", n)),
        // Character data, entity references included
        "[a-z0-9 \t\n.&;>]{1,16}",
        Just("&amp;lt;".to_string()),
        // Other markup
        "[a-z <>\n]{0,10}".prop_map(|c| format!("<!--{}-->", c)),
        "[a-z<>&\n]{0,10}".prop_map(|c| format!("<![CDATA[{}]]>", c)),
        ("[a-z]{1,6}", "[a-z ]{0,8}").prop_map(|(t, v)| format!("<?{} {}?>", t, v)),
        attributes_strategy().prop_map(|a| format!("<?xml{}?>", a)),
        Just("<!DOCTYPE gpx [\n<!ELEMENT gpx ANY>\n]>".to_string()),
        // Broken markup
        Just("<a b=\"1>".to_string()),
        Just("<a b=1>".to_string()),
        Just("< x".to_string()),
        Just("<!BOGUS>".to_string()),
        Just("<?>".to_string()),
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(fragment_strategy(), 0..12),
        prop::option::of(prop_oneof![Just("<trk"), Just("<!--open"), Just("<"), Just("tail")]),
    )
        .prop_map(|(fragments, trailer)| {
            let mut doc = fragments.concat();
            if let Some(trailer) = trailer {
                doc.push_str(trailer);
            }
            doc.into_bytes()
        })
}

/// Document plus sorted cut points
fn split_document_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    (
        document_strategy(),
        prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    )
        .prop_map(|(doc, cuts)| {
            let mut cuts: Vec<usize> = cuts.iter().map(|i| i.index(doc.len() + 1)).collect();
            cuts.sort_unstable();
            cuts.dedup();
            (doc, cuts)
        })
}

fn chunks<'a>(doc: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for &cut in cuts {
        chunks.push(&doc[start..cut]);
        start = cut;
    }
    chunks.push(&doc[start..]);
    chunks
}

fn parse_whole(doc: &[u8]) -> Vec<Event> {
    let mut parser = Parser::with_handler(EventCollector::new());
    parser.parse(doc, true).unwrap();
    parser.into_handler().into_events()
}

fn position_after(bytes: &[u8]) -> Position {
    let mut position = Position::START;
    for &b in bytes {
        position.advance(b);
    }
    position
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_chunking_does_not_change_events((doc, cuts) in split_document_strategy()) {
            let mut parser = Parser::with_handler(EventCollector::new());
            let chunks = chunks(&doc, &cuts);
            let last = chunks.len() - 1;
            for (i, chunk) in chunks.iter().enumerate() {
                parser.parse(chunk, i == last).unwrap();
            }

            prop_assert_eq!(
                parser.into_handler().into_events(),
                parse_whole(&doc),
                "document: {}",
                String::from_utf8_lossy(&doc)
            );
        }

        #[test]
        fn test_one_byte_chunks_match_whole(doc in document_strategy()) {
            let mut parser = Parser::with_handler(EventCollector::new());
            for b in doc.chunks(1) {
                parser.parse(b, false).unwrap();
            }
            parser.parse(b"", true).unwrap();

            prop_assert_eq!(parser.into_handler().into_events(), parse_whole(&doc));
        }

        #[test]
        fn test_raw_text_reproduces_document(doc in document_strategy()) {
            let raw: Vec<u8> = parse_whole(&doc)
                .iter()
                .flat_map(|event| event.raw().iter().copied())
                .collect();

            prop_assert_eq!(raw, doc);
        }

        #[test]
        fn test_position_follows_consumed_bytes((doc, cuts) in split_document_strategy()) {
            let mut parser = Parser::new();
            let mut fed = 0;
            let mut previous = Position::START;
            for chunk in chunks(&doc, &cuts) {
                parser.parse(chunk, false).unwrap();
                fed += chunk.len();

                let position = parser.position();
                prop_assert_eq!(position, position_after(&doc[..fed]));
                prop_assert!(position.line >= previous.line);
                previous = position;
            }
        }

        #[test]
        fn test_scratch_buffer_is_empty_after_final(doc in document_strategy()) {
            let mut parser = Parser::new();
            parser.parse(&doc, true).unwrap();

            prop_assert_eq!(parser.buffered_len(), 0);
        }
    }
}
