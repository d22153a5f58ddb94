//! Expression expansion: singles, lists, ranges and chapter-crossing walks

use crate::common::{r, span, CANON};
use tgn_babel::{parse_ref, TgnError};

#[test]
fn test_single_verse() {
    assert_eq!(parse_ref("Gen 1:27", &CANON).unwrap(), vec![r("Gen", 1, 27)]);
    assert_eq!(parse_ref("Rom 8:28", &CANON).unwrap(), vec![r("Rom", 8, 28)]);
}

#[test]
fn test_two_groups() {
    let expected = vec![r("Gen", 1, 1), r("Exo", 2, 2)];
    assert_eq!(parse_ref("Gen 1:1;Exo 2:2", &CANON).unwrap(), expected);
    assert_eq!(parse_ref("Gen 1:1 ;  Exo 2:2", &CANON).unwrap(), expected);
    assert_eq!(parse_ref("  Gen 1:1 ; Exo 2:2  ", &CANON).unwrap(), expected);
}

#[test]
fn test_range_within_chapter() {
    assert_eq!(
        parse_ref("Gen 1:1-10", &CANON).unwrap(),
        span("Gen", 1, 1, 10)
    );
}

#[test]
fn test_range_across_chapters() {
    let verses = parse_ref("Gen 1:1-3:16", &CANON).unwrap();
    let mut expected = span("Gen", 1, 1, 31);
    expected.extend(span("Gen", 2, 1, 25));
    expected.extend(span("Gen", 3, 1, 16));
    assert_eq!(verses.len(), 31 + 25 + 16);
    assert_eq!(verses, expected);
}

#[test]
fn test_mixed_expression() {
    let verses = parse_ref("Rom 7:24-8:5; 8:9,26-28,32-9:2", &CANON).unwrap();
    let mut expected = span("Rom", 7, 24, 25);
    expected.extend(span("Rom", 8, 1, 5));
    expected.push(r("Rom", 8, 9));
    expected.extend(span("Rom", 8, 26, 28));
    expected.extend(span("Rom", 8, 32, 39));
    expected.extend(span("Rom", 9, 1, 2));
    assert_eq!(verses, expected);
}

#[test]
fn test_range_across_books() {
    let verses = parse_ref("Gen 50:25-Exo 1:2", &CANON).unwrap();
    assert_eq!(
        verses,
        vec![r("Gen", 50, 25), r("Gen", 50, 26), r("Exo", 1, 1), r("Exo", 1, 2)]
    );
}

#[test]
fn test_range_into_single_chapter_book() {
    let verses = parse_ref("Rom 9:33-Jde 2", &CANON).unwrap();
    assert_eq!(verses, vec![r("Rom", 9, 33), r("Jde", 1, 1), r("Jde", 1, 2)]);
}

#[test]
fn test_whole_single_chapter_book() {
    assert_eq!(parse_ref("Jde 1-25", &CANON).unwrap(), span("Jde", 1, 1, 25));
    assert_eq!(parse_ref("Jde 1:25", &CANON).unwrap(), vec![r("Jde", 1, 25)]);
}

#[test]
fn test_overlaps_are_kept() {
    let verses = parse_ref("Gen 1:1-3, 2-4", &CANON).unwrap();
    let mut expected = span("Gen", 1, 1, 3);
    expected.extend(span("Gen", 1, 2, 4));
    assert_eq!(verses, expected);
}

#[test]
fn test_out_of_range_verse() {
    assert!(matches!(
        parse_ref("Gen 1:32", &CANON),
        Err(TgnError::InvalidReference(id)) if id == r("Gen", 1, 32)
    ));
    assert!(matches!(
        parse_ref("Gen 51:1", &CANON),
        Err(TgnError::InvalidReference(_))
    ));
    assert!(matches!(
        parse_ref("Rev 1:1", &CANON),
        Err(TgnError::InvalidReference(_))
    ));
}

#[test]
fn test_one_bad_item_aborts_expression() {
    assert!(matches!(
        parse_ref("Gen 1:1; Gen 1:40", &CANON),
        Err(TgnError::InvalidReference(_))
    ));
}

#[test]
fn test_backwards_ranges() {
    assert!(matches!(
        parse_ref("Gen 1:10-5", &CANON),
        Err(TgnError::InvalidRange { .. })
    ));
    assert!(matches!(
        parse_ref("Exo 1:1-Gen 1:1", &CANON),
        Err(TgnError::InvalidRange { .. })
    ));
}

#[test]
fn test_range_end_out_of_bounds() {
    assert!(matches!(
        parse_ref("Gen 1:30-40", &CANON),
        Err(TgnError::InvalidRange { start, end })
            if start == r("Gen", 1, 30) && end == r("Gen", 1, 40)
    ));
    assert!(matches!(
        parse_ref("Gen 1:2-51:1", &CANON),
        Err(TgnError::InvalidRange { end, .. }) if end == r("Gen", 51, 1)
    ));
    assert!(matches!(
        parse_ref("Jde 1:20-30", &CANON),
        Err(TgnError::InvalidRange { end, .. }) if end == r("Jde", 1, 30)
    ));
}

#[test]
fn test_range_start_out_of_bounds() {
    assert!(matches!(
        parse_ref("Gen 1:40-2:3", &CANON),
        Err(TgnError::InvalidReference(id)) if id == r("Gen", 1, 40)
    ));
}
