//! Behavior every registered backend shares

use super::{feed_expr, render};
use tgn_babel::{TgnError, TypesetterRegistry};

/// Options that keep preludes free of marker text, and the marker each backend emits
fn backends() -> Vec<(&'static str, Vec<(&'static str, &'static str)>, &'static str)> {
    vec![
        ("plain", vec![], ". . .\n"),
        (
            "html5",
            vec![("inline-styles", "false"), ("style-sheet", "tgn.css")],
            "<hr class=\"tgn-skip\" />",
        ),
        ("tex", vec![("prelude", "%")], "\\discontinuity\n"),
        ("sile", vec![("prelude", "%")], "\\gap{}"),
    ]
}

#[test]
fn test_every_default_backend_is_covered() {
    let registry = TypesetterRegistry::with_defaults().unwrap();
    let mut names: Vec<_> = backends().into_iter().map(|(name, _, _)| name).collect();
    names.sort();
    assert_eq!(registry.list_typesetters(), names);
}

#[test]
fn test_one_marker_per_discontinuity() {
    for (name, options, marker) in backends() {
        let contiguous = render(name, &options, |ts| feed_expr(ts, "Gen 1:31-2:2"));
        assert_eq!(contiguous.matches(marker).count(), 0, "{name}");

        let one_gap = render(name, &options, |ts| feed_expr(ts, "Gen 1:1, 3"));
        assert_eq!(one_gap.matches(marker).count(), 1, "{name}");

        let two_gaps = render(name, &options, |ts| feed_expr(ts, "Gen 1:1; Rom 8:28; Jde 3"));
        assert_eq!(two_gaps.matches(marker).count(), 2, "{name}");
    }
}

#[test]
fn test_repeated_paragraph_emits_one_break() {
    for (name, options, _) in backends() {
        let once = render(name, &options, |ts| {
            feed_expr(ts, "Gen 1:1")?;
            ts.paragraph()?;
            feed_expr(ts, "Gen 1:2")
        });
        let thrice = render(name, &options, |ts| {
            feed_expr(ts, "Gen 1:1")?;
            ts.paragraph()?;
            ts.paragraph()?;
            ts.paragraph()?;
            feed_expr(ts, "Gen 1:2")
        });
        assert_eq!(once, thrice, "{name}");
    }
}

#[test]
fn test_feed_before_start_fails_for_every_backend() {
    let registry = TypesetterRegistry::with_defaults().unwrap();
    for name in registry.list_typesetters() {
        let mut ts = registry
            .create(&name, &Default::default(), &crate::common::CANON)
            .unwrap();
        assert!(matches!(
            ts.feed(&crate::common::r("Gen", 1, 1), "text"),
            Err(TgnError::NotStarted(n)) if n == name
        ));
    }
}
