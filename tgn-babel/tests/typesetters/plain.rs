use super::{feed_expr, render};
use crate::common::CANON;
use tgn_babel::formats::plain::{PlainTextBackend, MAX_COLUMN, NAME, VERSE_COLUMN};
use tgn_babel::BackendOptions;

#[test]
fn test_auto_verse_column_fits_longest_reference() {
    // "Genesis 50:67 - "
    let backend = PlainTextBackend::from_options(&BackendOptions::new(), &CANON).unwrap();
    assert_eq!(backend.verse_column(), 16);
}

#[test]
fn test_headers_leaders_and_gap() {
    let out = render(NAME, &[], |ts| feed_expr(ts, "Exo 1:1-2; 2:3"));
    assert_eq!(
        out,
        concat!(
            "   Exodus 1:1 - Text of Exo 1:1.\n",
            "            2 - Text of Exo 1:2.\n",
            "                . . .\n",
            "   Exodus 2:3 - Text of Exo 2:3.\n",
        )
    );
}

#[test]
fn test_chapter_boundary_without_gap() {
    let out = render(NAME, &[], |ts| feed_expr(ts, "Exo 1:22-2:1"));
    assert_eq!(
        out,
        concat!(
            "  Exodus 1:22 - Text of Exo 1:22.\n",
            "   Exodus 2:1 - Text of Exo 2:1.\n",
        )
    );
}

#[test]
fn test_wrapped_lines_align_to_text_column() {
    let out = render(NAME, &[(MAX_COLUMN, "40"), (VERSE_COLUMN, "16")], |ts| {
        feed_expr(ts, "Gen 1:1")
    });
    assert_eq!(
        out,
        concat!(
            "  Genesis 1:1 - In the beginning God\n",
            "                created the heaven and\n",
            "                the earth.\n",
        )
    );
}

#[test]
fn test_paragraph_and_debug() {
    let out = render(NAME, &[(VERSE_COLUMN, "12")], |ts| {
        ts.debug("Jde 25")?;
        feed_expr(ts, "Jde 24")?;
        ts.paragraph()?;
        ts.paragraph()?;
        feed_expr(ts, "Jde 25")
    });
    assert_eq!(
        out,
        concat!(
            "Jde 25\n",
            "Jude 1:24 - Text of Jde 1:24.\n",
            "       25 - To the only wise God our Saviour, be glory and majesty, dominion and power, both now and\n",
            "            ever. Amen.\n",
        )
    );
}
