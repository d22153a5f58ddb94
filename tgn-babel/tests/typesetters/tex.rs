use super::{feed_expr, render};
use crate::common::r;
use insta::assert_snapshot;
use tgn_babel::formats::tex::{texscape, NAME, PRELUDE, TEX_REPLACEMENTS};

#[test]
fn test_verses_and_discontinuity() {
    let out = render(NAME, &[(PRELUDE, "\\input tgn")], |ts| {
        ts.debug("Exo 1:1-2; 2:3")?;
        feed_expr(ts, "Exo 1:1-2; 2:3")
    });
    assert_snapshot!(out, @r###"
    \input tgn
    \line{\tt Exo 1:1-2; 2:3}
    \verse {Exodus} 1:1 {Text of Exo 1:1.}
    \verse {Exodus} 1:2 {Text of Exo 1:2.}
    \discontinuity
    \hardverse {Exodus} 2:3 {Text of Exo 2:3.}
    \end
    "###);
}

#[test]
fn test_verse_text_is_escaped() {
    let out = render(NAME, &[(PRELUDE, "%")], |ts| {
        ts.feed(&r("Exo", 1, 1), "50% of $5 & {x}")
    });
    assert!(out.contains("\\verse {Exodus} 1:1 {50\\% of \\$5 \\& $\\{$x$\\}$}"));
}

#[test]
fn test_default_prelude_comes_first() {
    let out = render(NAME, &[], |ts| feed_expr(ts, "Jde 1"));
    assert!(out.starts_with("% tgn plain TeX prelude\n"));
    assert!(out.ends_with("\\verse {Jude} 1:1 {Text of Jde 1:1.}\n\\end\n"));
}

#[test]
fn test_escape_leaves_no_bare_specials() {
    let all: String = TEX_REPLACEMENTS.iter().map(|(c, _)| *c).collect();
    let escaped = texscape(&all);
    for (special, replacement) in TEX_REPLACEMENTS {
        assert!(escaped.contains(replacement), "{special} not replaced");
    }
    // Strip the substitutes; nothing special may remain.
    let mut rest = escaped.clone();
    for (_, replacement) in TEX_REPLACEMENTS {
        rest = rest.replace(replacement, "");
    }
    assert_eq!(rest, "");
}
