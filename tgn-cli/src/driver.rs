// Edit-list driver
//
// An edit list holds one reference expression per line:
//
//  # Creation
//  Gen 1:1-5
//
//  Rom 8:26-39
//
// Lines starting with '#' are comments. Blank lines request a paragraph break. Every other line
// is expanded against the verse database and its verses are fed, in order, to the typesetter.
// A line that fails to parse (or names verses the typesetter cannot place) is logged and
// skipped; I/O failures on the output sink end the run.

use std::io::BufRead;
use tgn_babel::{ReferenceParser, Result, TgnError, Typesetter};
use tracing::{debug, error};

/// Outcome of one edit-list run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub expressions: usize,
    pub verses: usize,
    pub failed: usize,
}

pub struct Driver<'t, 'a> {
    typesetter: &'t mut Typesetter<'a>,
    parser: ReferenceParser<'a>,
    debug: bool,
}

impl<'t, 'a> Driver<'t, 'a> {
    pub fn new(typesetter: &'t mut Typesetter<'a>, parser: ReferenceParser<'a>) -> Self {
        Self {
            typesetter,
            parser,
            debug: false,
        }
    }

    /// Echo each expression into the document through `Typesetter::debug`.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Process every line of `input`. The typesetter must already be started.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let lineno = idx + 1;

            if line.starts_with('#') {
                continue;
            }
            if line.is_empty() {
                if !self.typesetter.supports_paragraph() {
                    debug!(lineno, "paragraph break ignored by typesetter");
                }
                self.typesetter.paragraph()?;
                continue;
            }

            summary.expressions += 1;
            match self.expression(line) {
                Ok(count) => summary.verses += count,
                Err(TgnError::Io(err)) => return Err(TgnError::Io(err)),
                Err(err) => {
                    error!(lineno, expression = line, "{err}");
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    fn expression(&mut self, line: &str) -> Result<usize> {
        let verses = self.parser.parse(line)?;
        if self.debug {
            self.typesetter.debug(line)?;
        }
        self.typesetter.feed_refs(&verses)?;
        Ok(verses.len())
    }
}
