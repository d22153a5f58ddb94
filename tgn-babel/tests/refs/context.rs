//! Book/chapter inheritance between items and groups

use crate::common::{r, span, CANON};
use tgn_babel::refs::{parse_expression, ParseContext};
use tgn_babel::{parse_ref, ReferenceParser, TgnError};

#[test]
fn test_comma_keeps_chapter() {
    assert_eq!(
        parse_ref("Rom 8:9,26", &CANON).unwrap(),
        vec![r("Rom", 8, 9), r("Rom", 8, 26)]
    );
}

#[test]
fn test_semicolon_bare_chapter_verse_keeps_book() {
    assert_eq!(
        parse_ref("Gen 1:1;2:2", &CANON).unwrap(),
        vec![r("Gen", 1, 1), r("Gen", 2, 2)]
    );
}

#[test]
fn test_context_is_rolling_not_original() {
    // After Exo, a bare chapter:verse belongs to Exodus, not Genesis
    assert_eq!(
        parse_ref("Gen 1:1; Exo 1:1; 2:3", &CANON).unwrap(),
        vec![r("Gen", 1, 1), r("Exo", 1, 1), r("Exo", 2, 3)]
    );
}

#[test]
fn test_range_end_chapter_carries_forward() {
    let mut expected = span("Rom", 8, 38, 39);
    expected.extend(span("Rom", 9, 1, 2));
    expected.push(r("Rom", 9, 5));
    assert_eq!(parse_ref("Rom 8:38-9:2, 5", &CANON).unwrap(), expected);
}

#[test]
fn test_first_item_needs_book() {
    assert!(matches!(
        parse_ref("1:1", &CANON),
        Err(TgnError::Syntax { .. })
    ));
    assert!(matches!(
        parse_ref("27", &CANON),
        Err(TgnError::Syntax { .. })
    ));
}

#[test]
fn test_multi_chapter_book_needs_chapter() {
    match parse_ref("Gen 3", &CANON) {
        Err(TgnError::Syntax { expression, detail }) => {
            assert_eq!(expression, "Gen 3");
            assert!(detail.contains("50 chapters"), "{detail}");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_book_codes_are_case_sensitive() {
    assert!(matches!(
        parse_ref("gen 1:1", &CANON),
        Err(TgnError::InvalidReference(_))
    ));
}

#[test]
fn test_context_threading_by_hand() {
    let expr = parse_expression("Rom 7:24-8:5; 8:9,26-28").unwrap();
    let mut context = ParseContext::default();
    let mut chapters = Vec::new();
    for item in expr.items() {
        let (_, next) = context
            .resolve_item(item, &CANON, "Rom 7:24-8:5; 8:9,26-28")
            .unwrap();
        chapters.push(next.chapter);
        context = next;
    }
    assert_eq!(chapters, vec![Some(8), Some(8), Some(8)]);
    assert_eq!(context.book.as_deref(), Some("Rom"));
}

#[test]
fn test_parser_value_is_reusable() {
    let parser = ReferenceParser::new(&CANON);
    assert_eq!(parser.parse("Jde 3").unwrap(), vec![r("Jde", 1, 3)]);
    assert_eq!(parser.parse("Exo 2:1").unwrap(), vec![r("Exo", 2, 1)]);
}
