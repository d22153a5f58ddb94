use super::{feed_expr, render};
use insta::assert_snapshot;
use tgn_babel::formats::sile::{silescape, NAME, PRELUDE, SILE_REPLACEMENTS};

#[test]
fn test_inline_prose() {
    let out = render(NAME, &[(PRELUDE, "\\begin{document}")], |ts| {
        ts.debug("not inline")?;
        feed_expr(ts, "Exo 1:1-2")?;
        ts.paragraph()?;
        ts.paragraph()?;
        feed_expr(ts, "Exo 1:4-5; 2:3")
    });
    assert_snapshot!(out, @r###"
    \begin{document}
    \vref{Exodus 1:1}\nobreak{}Text of Exo 1:1.\goodbreak
    \vref{2}\nobreak{}Text of Exo 1:2.\goodbreak

    \vref{Exodus 1:4}\nobreak{}Text of Exo 1:4.\goodbreak
    \vref{5}\nobreak{}Text of Exo 1:5.\goodbreak
    \gap{}\vref{Exodus 2:3}\nobreak{}Text of Exo 2:3.\goodbreak
    \end{document}
    "###);
}

#[test]
fn test_default_prelude_defines_commands() {
    let out = render(NAME, &[], |ts| feed_expr(ts, "Jde 1"));
    assert!(out.starts_with("\\begin[papersize=statement]{document}\n"));
    assert!(out.contains("\\define[command=vref]"));
    assert!(out.contains("\\define[command=gap]"));
}

#[test]
fn test_escape_leaves_no_bare_specials() {
    let all: String = SILE_REPLACEMENTS.iter().map(|(c, _)| *c).collect();
    let mut rest = silescape(&all);
    for (_, replacement) in SILE_REPLACEMENTS {
        rest = rest.replace(replacement, "");
    }
    assert_eq!(rest, "");
}
