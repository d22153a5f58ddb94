//! Plain TeX typesetter
//!
//! - start: the prelude defining `\verse`, `\hardverse` and `\discontinuity`
//! - debug: a `{\tt ...}` line
//! - feed: `\verse {Book} Ch:Vs {text}`, or `\discontinuity` followed by `\hardverse ...`
//! - finish: `\end`
//!
//! Example:
//!
//!     \verse {Genesis} 1:1 {In the beginning God created the heaven and the earth.}
//!     \discontinuity
//!     \hardverse {II Chronicles} 36:14 {Moreover all the chief of the priests...}
//!
//! Options:
//!     - `prelude`: prelude text replacing the embedded default

use crate::error::Result;
use crate::formats::common::{escape_with, string_option, write_lines};
use crate::registry::BackendOptions;
use crate::typesetter::{Backend, VerseEvent};
use std::io::{self, Write};

pub const NAME: &str = "tex";
pub const PRELUDE: &str = "prelude";

pub const DEFAULT_PRELUDE: &str = include_str!("../../../assets/plaintex-prelude.tex");

/// TeX special characters and their safe substitutes
pub const TEX_REPLACEMENTS: &[(char, &str)] = &[
    ('$', "\\$"),
    ('#', "\\#"),
    ('&', "\\&"),
    ('%', "\\%"),
    ('_', "\\_"),
    ('^', "\\^{ }"),
    ('~', "\\~{ }"),
    ('{', "$\\{$"),
    ('}', "$\\}$"),
    ('\\', "$\\backslash$"),
];

/// Escape `verbatim` for inclusion into TeX source.
pub fn texscape(verbatim: &str) -> String {
    escape_with(verbatim, TEX_REPLACEMENTS)
}

#[derive(Debug, Clone)]
pub struct PlainTexBackend {
    prelude: String,
}

impl Default for PlainTexBackend {
    fn default() -> Self {
        Self::new(DEFAULT_PRELUDE)
    }
}

impl PlainTexBackend {
    pub fn new(prelude: impl Into<String>) -> Self {
        Self {
            prelude: prelude.into(),
        }
    }

    pub fn from_options(options: &BackendOptions) -> Result<Self> {
        Ok(Self::new(
            string_option(options, PRELUDE).unwrap_or(DEFAULT_PRELUDE),
        ))
    }
}

impl Backend for PlainTexBackend {
    fn prelude(&mut self, out: &mut dyn Write) -> io::Result<()> {
        write_lines(out, &self.prelude)
    }

    fn discontinuity(&mut self, out: &mut dyn Write, _after_paragraph: bool) -> io::Result<()> {
        writeln!(out, "\\discontinuity")
    }

    fn verse(&mut self, out: &mut dyn Write, event: &VerseEvent<'_>) -> io::Result<()> {
        let csname = if event.discontinuous {
            "\\hardverse"
        } else {
            "\\verse"
        };
        writeln!(
            out,
            "{csname} {{{}}} {}:{} {{{}}}",
            texscape(event.book_name),
            event.reference.chapter,
            event.reference.verse,
            texscape(event.text)
        )
    }

    fn debug(&mut self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "\\line{{\\tt {}}}", texscape(message))
    }

    fn postlude(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\\end")
    }
}
