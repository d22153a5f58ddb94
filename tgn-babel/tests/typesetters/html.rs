use super::{feed_expr, render};
use insta::assert_snapshot;
use tgn_babel::formats::html::{CLASS_PREFIX, INLINE_STYLES, NAME, STYLE_SHEET};

const LINKED: &[(&str, &str)] = &[(INLINE_STYLES, "false"), (STYLE_SHEET, "tgn.css")];

#[test]
fn test_verse_boxes_and_skip() {
    let out = render(NAME, LINKED, |ts| {
        ts.debug("Exo 1:1-2; 2:3")?;
        feed_expr(ts, "Exo 1:1-2; 2:3")
    });
    assert_snapshot!(out, @r###"
    <!DOCTYPE html>
    <html>
        <head>
            <meta charset="utf-8">
            <title>The Gospel Narrative</title>
            <link rel="stylesheet" href="tgn.css">
        </head>
        <body>
            <div class="tgn-content">
                <pre class="tgn-debug">Exo 1:1-2; 2:3</pre>
                <div class="tgn-verse-box">
                    <div class="tgn-verse-text">Text of Exo 1:1.</div>
                    <div class="tgn-verse-number">1</div>
                    <div class="tgn-verse-chapter">1</div>
                    <div class="tgn-verse-book">Exodus</div>
                </div>
                <div class="tgn-verse-box">
                    <div class="tgn-verse-text">Text of Exo 1:2.</div>
                    <div class="tgn-verse-number">2</div>
                </div>
                <hr class="tgn-skip" />
                <div class="tgn-verse-box">
                    <div class="tgn-verse-text">Text of Exo 2:3.</div>
                    <div class="tgn-verse-number">3</div>
                    <div class="tgn-verse-chapter">2</div>
                    <div class="tgn-verse-book">Exodus</div>
                </div>
            </div>
        </body>
    </html>
    "###);
}

#[test]
fn test_class_prefix() {
    let out = render(
        NAME,
        &[(INLINE_STYLES, "false"), (STYLE_SHEET, "x.css"), (CLASS_PREFIX, "bible")],
        |ts| feed_expr(ts, "Jde 1, 3"),
    );
    assert!(out.contains("<div class=\"bible-verse-book\">Jude</div>"));
    assert!(out.contains("<hr class=\"bible-skip\" />"));
    assert!(!out.contains("tgn-"));
}

#[test]
fn test_default_styles_are_inlined() {
    let out = render(NAME, &[], |_| Ok(()));
    assert!(out.contains("<style>"));
    assert!(out.contains(".tgn-verse-box {"));
    assert!(out.ends_with("    </body>\n</html>\n"));
}

#[test]
fn test_cross_book_header() {
    let out = render(NAME, LINKED, |ts| feed_expr(ts, "Gen 50:26-Exo 1:1"));
    assert!(!out.contains("tgn-skip"));
    assert_eq!(out.matches("tgn-verse-book").count(), 2);
}
