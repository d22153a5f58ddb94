//! Inline SILE typesetter
//!
//! Unlike the TeX and HTML typesetters, which produce versified layouts, SILE output runs the
//! verses together as prose. References are minimized and typeset as small grey superscripts
//! by the `\vref` command the prelude defines.
//!
//! - start: the prelude, which opens the document and defines `\vref` and `\gap`
//! - debug: not representable inline; logged under the `tgn::debug` target instead
//! - feed: `\vref{...}\nobreak{}TEXT\goodbreak`, preceded by `\gap{}` after a discontinuity
//! - paragraph: a blank line
//! - finish: `\end{document}`
//!
//! Example:
//!
//!     \vref{Genesis 1:1}\nobreak{}In the beginning God created the heaven and the earth.\goodbreak
//!     \vref{2}\nobreak{}And the earth was without form, and void.\goodbreak
//!     \gap{}\vref{Genesis 1:27}\nobreak{}So God created man in his own image.\goodbreak
//!
//! Options:
//!     - `prelude`: prelude text replacing the embedded default

use crate::error::Result;
use crate::formats::common::{escape_with, string_option, write_lines};
use crate::registry::BackendOptions;
use crate::typesetter::{Backend, VerseEvent};
use std::io::{self, Write};
use tracing::info;

pub const NAME: &str = "sile";
pub const PRELUDE: &str = "prelude";

pub const DEFAULT_PRELUDE: &str = include_str!("../../../assets/sile-prelude.sil");

/// SILE special characters and their safe substitutes
pub const SILE_REPLACEMENTS: &[(char, &str)] = &[
    ('%', "\\%"),
    ('{', "$\\{$"),
    ('}', "$\\}$"),
    ('\\', "$\\backslash$"),
];

/// Escape `verbatim` for inclusion into SILE source.
pub fn silescape(verbatim: &str) -> String {
    escape_with(verbatim, SILE_REPLACEMENTS)
}

#[derive(Debug, Clone)]
pub struct SileBackend {
    prelude: String,
}

impl Default for SileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_PRELUDE)
    }
}

impl SileBackend {
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

impl Backend for SileBackend {
    fn prelude(&mut self, out: &mut dyn Write) -> io::Result<()> {
        write_lines(out, &self.prelude)
    }

    fn discontinuity(&mut self, out: &mut dyn Write, after_paragraph: bool) -> io::Result<()> {
        // A fresh paragraph already separates the passages.
        if after_paragraph {
            return Ok(());
        }
        write!(out, "\\gap{{}}")
    }

    fn verse(&mut self, out: &mut dyn Write, event: &VerseEvent<'_>) -> io::Result<()> {
        let reference = event.reference;
        if event.new_chapter || event.discontinuous {
            write!(
                out,
                "\\vref{{{} {}:{}}}",
                silescape(event.book_name),
                reference.chapter,
                reference.verse
            )?;
        } else {
            write!(out, "\\vref{{{}}}", reference.verse)?;
        }
        writeln!(out, "\\nobreak{{}}{}\\goodbreak", silescape(event.text))
    }

    fn supports_paragraph(&self) -> bool {
        true
    }

    fn paragraph(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)
    }

    fn debug(&mut self, _out: &mut dyn Write, message: &str) -> io::Result<()> {
        info!(target: "tgn::debug", "{message}");
        Ok(())
    }

    fn postlude(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\\end{{document}}")
    }
}
