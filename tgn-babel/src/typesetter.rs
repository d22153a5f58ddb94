//! Typesetter contract and the shared transition logic
//!
//!     Every output format implements [`Backend`]: the tokens it emits for a document prelude,
//!     a discontinuity, a verse (with or without a chapter header), a paragraph break, a debug
//!     annotation and the closing boilerplate.
//!
//!     [`Typesetter`] wraps one backend and owns everything the formats have in common: the
//!     Unstarted → Active → Finished lifecycle, the output sink, and the [`RenderCursor`] that
//!     decides, for each fed verse, whether a discontinuity marker and a chapter header are due.
//!     Backends never see the verse database or the cursor; they receive those decisions as a
//!     [`VerseEvent`].
//!
//!     Decision sequence for `feed(id, text)`:
//!         1. last emitted verse valid and not contiguous with `id` → `Backend::discontinuity`
//!         2. book or chapter differs from the last emitted verse (or nothing emitted yet) →
//!            `VerseEvent::new_chapter`
//!         3. `Backend::verse` emits the header or short leader, then the escaped body
//!         4. the cursor moves to `id` and any pending paragraph break is cleared

use crate::data::{VerseDatabase, VerseRef};
use crate::error::{Result, TgnError};
use std::io::{self, Write};

/// Everything a backend needs to typeset one verse
#[derive(Debug, Clone, Copy)]
pub struct VerseEvent<'e> {
    pub reference: &'e VerseRef,
    pub text: &'e str,
    /// Display name of `reference.book`
    pub book_name: &'e str,
    /// A discontinuity marker was emitted right before this verse
    pub discontinuous: bool,
    /// First verse, or book/chapter differs from the previous verse
    pub new_chapter: bool,
}

/// Format-specific half of a typesetter
pub trait Backend {
    /// Document boilerplate written by `start()`
    fn prelude(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Marker written before a verse that does not follow the previous one
    fn discontinuity(&mut self, out: &mut dyn Write, after_paragraph: bool) -> io::Result<()>;

    /// Header or short leader, then the verse body
    fn verse(&mut self, out: &mut dyn Write, event: &VerseEvent<'_>) -> io::Result<()>;

    /// Whether `paragraph()` produces any output
    fn supports_paragraph(&self) -> bool {
        false
    }

    fn paragraph(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Diagnostic annotation; formats without one route it to a side channel
    fn debug(&mut self, out: &mut dyn Write, message: &str) -> io::Result<()>;

    /// Closing boilerplate written by `finish()`
    fn postlude(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Per-document rendering state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderCursor {
    pub last_emitted: Option<VerseRef>,
    pub paragraph_pending: bool,
}

impl RenderCursor {
    /// Steps 1 and 2 of the decision sequence: `(discontinuous, new_chapter)`
    pub fn transition(&self, db: &VerseDatabase, id: &VerseRef) -> (bool, bool) {
        match &self.last_emitted {
            Some(last) => {
                let discontinuous = db.is_valid(last) && !db.contiguous(last, id);
                (discontinuous, !last.same_chapter(id))
            }
            None => (false, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unstarted,
    Active,
    Finished,
}

/// A backend bound to a database, a sink and a cursor
pub struct Typesetter<'a> {
    name: String,
    backend: Box<dyn Backend>,
    db: &'a VerseDatabase,
    out: Option<Box<dyn Write + 'a>>,
    cursor: RenderCursor,
    state: State,
}

impl<'a> Typesetter<'a> {
    pub fn new(name: impl Into<String>, backend: Box<dyn Backend>, db: &'a VerseDatabase) -> Self {
        Self {
            name: name.into(),
            backend,
            db,
            out: None,
            cursor: RenderCursor::default(),
            state: State::Unstarted,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> State {
        self.state
    }

    fn ensure_active(&self) -> Result<()> {
        match self.state {
            State::Active => Ok(()),
            State::Unstarted => Err(TgnError::NotStarted(self.name.clone())),
            State::Finished => Err(TgnError::AlreadyFinished(self.name.clone())),
        }
    }

    /// Bind the sink, reset the cursor and emit the prelude.
    pub fn start<W: Write + 'a>(&mut self, out: W) -> Result<()> {
        match self.state {
            State::Unstarted => {}
            State::Active => return Err(TgnError::AlreadyStarted(self.name.clone())),
            State::Finished => return Err(TgnError::AlreadyFinished(self.name.clone())),
        }
        let mut out: Box<dyn Write + 'a> = Box::new(out);
        self.cursor = RenderCursor::default();
        self.state = State::Active;
        let written = self.backend.prelude(out.as_mut());
        self.out = Some(out);
        written?;
        Ok(())
    }

    /// Append one verse.
    pub fn feed(&mut self, id: &VerseRef, text: &str) -> Result<()> {
        self.ensure_active()?;
        let Some(out) = self.out.as_mut() else {
            return Err(TgnError::NotStarted(self.name.clone()));
        };

        let book_name = self.db.pretty_name(&id.book)?;
        let (discontinuous, new_chapter) = self.cursor.transition(self.db, id);
        if discontinuous {
            self.backend
                .discontinuity(out.as_mut(), self.cursor.paragraph_pending)?;
        }
        let event = VerseEvent {
            reference: id,
            text,
            book_name,
            discontinuous,
            new_chapter,
        };
        self.backend.verse(out.as_mut(), &event)?;

        self.cursor.last_emitted = Some(id.clone());
        self.cursor.paragraph_pending = false;
        Ok(())
    }

    /// Feed each reference with its text from the database.
    ///
    /// Names and texts are looked up for the whole slice first; a failed lookup writes nothing.
    pub fn feed_refs(&mut self, refs: &[VerseRef]) -> Result<()> {
        self.ensure_active()?;
        let db = self.db;
        let texts = refs
            .iter()
            .map(|id| {
                db.pretty_name(&id.book)?;
                db.text(id)
            })
            .collect::<Result<Vec<_>>>()?;
        for (id, text) in refs.iter().zip(texts) {
            self.feed(id, text)?;
        }
        Ok(())
    }

    /// Whether the backend has an explicit paragraph break
    pub fn supports_paragraph(&self) -> bool {
        self.backend.supports_paragraph()
    }

    /// Request a paragraph break; repeated calls without a `feed` emit one break.
    pub fn paragraph(&mut self) -> Result<()> {
        self.ensure_active()?;
        if self.cursor.paragraph_pending || !self.backend.supports_paragraph() {
            return Ok(());
        }
        if let Some(out) = self.out.as_mut() {
            self.backend.paragraph(out.as_mut())?;
        }
        self.cursor.paragraph_pending = true;
        Ok(())
    }

    pub fn debug(&mut self, message: &str) -> Result<()> {
        self.ensure_active()?;
        if let Some(out) = self.out.as_mut() {
            self.backend.debug(out.as_mut(), message)?;
        }
        Ok(())
    }

    /// Emit the closing boilerplate and flush the sink.
    pub fn finish(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.state = State::Finished;
        if let Some(out) = self.out.as_mut() {
            let written = self.backend.postlude(out.as_mut());
            out.flush()?;
            written?;
        }
        Ok(())
    }
}

impl Drop for Typesetter<'_> {
    fn drop(&mut self) {
        // Partial output from an aborted document still reaches the sink.
        if self.state == State::Active {
            if let Some(out) = self.out.as_mut() {
                let _ = out.flush();
            }
        }
    }
}
