//! Verse database: loading and canon boundary queries
//!
//!     The verse source is a line-oriented file, one record per line:
//!
//!         Gen|1|1| In the beginning God created the heaven and the earth.~
//!
//!     Loading derives, incrementally, the last verse number of every chapter of every book.
//!     Those limits are the boundary oracle the reference parser and the typesetters rely on:
//!     validity, canonical successor (`next`) and contiguity.
//!
//!     Records must arrive in canon order with contiguous numbering (chapters and verses each
//!     count up from 1 without gaps), so the limits fully describe the loaded text.

use crate::books;
use crate::error::{Result, TgnError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

static RX_VLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([^|]+)\|([^|]+)\|([^|]+)\|\s+([^~]+)~\s*$").expect("verse record regex")
});

/// A concrete verse identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseRef {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRef {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// True when `other` lies in the same book and chapter
    pub fn same_chapter(&self, other: &VerseRef) -> bool {
        self.book == other.book && self.chapter == other.chapter
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl Ord for VerseRef {
    // Books compare by canonical position; codes missing from the metadata table sort last.
    fn cmp(&self, other: &Self) -> Ordering {
        let rank = |book: &str| books::canonical_position(book).unwrap_or(usize::MAX);
        rank(&self.book)
            .cmp(&rank(&other.book))
            .then_with(|| self.book.cmp(&other.book))
            .then_with(|| self.chapter.cmp(&other.chapter))
            .then_with(|| self.verse.cmp(&other.verse))
    }
}

impl PartialOrd for VerseRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Into<String>> From<(T, u32, u32)> for VerseRef {
    fn from((book, chapter, verse): (T, u32, u32)) -> Self {
        VerseRef::new(book, chapter, verse)
    }
}

/// A verse identifier plus its text, as read from the verse source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub reference: VerseRef,
    pub text: String,
}

/// Parse a single verse-source line into a [`Verse`].
pub fn parse_verse_line(line: &str) -> Result<Verse> {
    let malformed = || TgnError::MalformedRecord {
        line: line.to_string(),
    };
    let caps = RX_VLINE.captures(line).ok_or_else(malformed)?;
    let book = caps[1].trim();
    if book.is_empty() {
        return Err(malformed());
    }
    let chapter: u32 = caps[2].trim().parse().map_err(|_| malformed())?;
    let verse: u32 = caps[3].trim().parse().map_err(|_| malformed())?;
    if chapter == 0 || verse == 0 {
        return Err(malformed());
    }
    Ok(Verse {
        reference: VerseRef::new(book, chapter, verse),
        text: caps[4].trim_end().to_string(),
    })
}

/// In-memory canon: verse text plus per-book, per-chapter limits
#[derive(Debug, Clone, Default)]
pub struct VerseDatabase {
    text_by_id: HashMap<VerseRef, String>,
    chapter_limits: HashMap<String, BTreeMap<u32, u32>>,
    book_order: Vec<String>,
}

/// Rolling state of the loader: the chapter currently being read and its last verse
struct Cursor {
    book: String,
    chapter: u32,
    verse: u32,
}

impl VerseDatabase {
    /// Load a database from a verse-source stream.
    pub fn load<R: BufRead>(source: R) -> Result<Self> {
        let mut db = VerseDatabase::default();
        let mut limits: BTreeMap<u32, u32> = BTreeMap::new();
        let mut cursor: Option<Cursor> = None;

        for line in source.lines() {
            let line = line?;
            let Verse { reference, text } = parse_verse_line(&line)?;
            let malformed = || TgnError::MalformedRecord { line: line.clone() };

            match cursor.as_mut() {
                Some(cur) if cur.book == reference.book => {
                    if reference.chapter == cur.chapter {
                        if reference.verse != cur.verse + 1 {
                            return Err(malformed());
                        }
                    } else if reference.chapter == cur.chapter + 1 && reference.verse == 1 {
                        limits.insert(cur.chapter, cur.verse);
                        cur.chapter = reference.chapter;
                    } else {
                        return Err(malformed());
                    }
                    cur.verse = reference.verse;
                }
                previous => {
                    if reference.chapter != 1
                        || reference.verse != 1
                        || db.chapter_limits.contains_key(&reference.book)
                    {
                        return Err(malformed());
                    }
                    if let Some(cur) = previous {
                        limits.insert(cur.chapter, cur.verse);
                        db.commit_book(&cur.book, std::mem::take(&mut limits));
                    }
                    cursor = Some(Cursor {
                        book: reference.book.clone(),
                        chapter: 1,
                        verse: 1,
                    });
                }
            }
            db.text_by_id.insert(reference, text);
        }

        // The final book/chapter never sees a transition inside the loop.
        if let Some(cur) = cursor {
            limits.insert(cur.chapter, cur.verse);
            db.commit_book(&cur.book, limits);
        }

        debug!(
            verses = db.text_by_id.len(),
            books = db.book_order.len(),
            "loaded verse database"
        );
        Ok(db)
    }

    /// Load a database from a verse-source file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::load(BufReader::new(file))
    }

    fn commit_book(&mut self, book: &str, limits: BTreeMap<u32, u32>) {
        self.chapter_limits.insert(book.to_string(), limits);
        self.book_order.push(book.to_string());
    }

    fn chapters(&self, book: &str) -> Result<&BTreeMap<u32, u32>> {
        self.chapter_limits
            .get(book)
            .ok_or_else(|| TgnError::UnknownBook(book.to_string()))
    }

    /// Book codes in load order
    pub fn books(&self) -> &[String] {
        &self.book_order
    }

    pub fn len(&self) -> usize {
        self.text_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_by_id.is_empty()
    }

    /// True if the book is known and the chapter/verse lie within its limits.
    pub fn is_valid(&self, id: &VerseRef) -> bool {
        self.chapter_limits
            .get(&id.book)
            .and_then(|chapters| chapters.get(&id.chapter))
            .is_some_and(|&last| id.verse >= 1 && id.verse <= last)
    }

    pub fn last_chapter(&self, book: &str) -> Result<u32> {
        self.chapters(book)?
            .keys()
            .next_back()
            .copied()
            .ok_or_else(|| TgnError::UnknownBook(book.to_string()))
    }

    pub fn last_verse(&self, book: &str, chapter: u32) -> Result<u32> {
        self.chapters(book)?
            .get(&chapter)
            .copied()
            .ok_or_else(|| TgnError::UnknownChapter {
                book: book.to_string(),
                chapter,
            })
    }

    /// First verse of the first loaded book
    pub fn first(&self) -> Option<VerseRef> {
        self.book_order
            .first()
            .map(|book| VerseRef::new(book.as_str(), 1, 1))
    }

    /// Canonical successor of `id`: next verse, else next chapter, else next book.
    pub fn next(&self, id: &VerseRef) -> Result<VerseRef> {
        let chapters = self.chapters(&id.book)?;
        let last = chapters
            .get(&id.chapter)
            .ok_or_else(|| TgnError::UnknownChapter {
                book: id.book.clone(),
                chapter: id.chapter,
            })?;

        if id.verse < *last {
            return Ok(VerseRef::new(id.book.as_str(), id.chapter, id.verse + 1));
        }

        let next_chapter = VerseRef::new(id.book.as_str(), id.chapter + 1, 1);
        if self.is_valid(&next_chapter) {
            return Ok(next_chapter);
        }

        self.book_order
            .iter()
            .position(|book| *book == id.book)
            .and_then(|idx| self.book_order.get(idx + 1))
            .map(|book| VerseRef::new(book.as_str(), 1, 1))
            .filter(|first| self.is_valid(first))
            .ok_or_else(|| TgnError::EndOfCanon(id.clone()))
    }

    /// True iff `b` is the canonical successor of `a`.
    pub fn contiguous(&self, a: &VerseRef, b: &VerseRef) -> bool {
        self.next(a).is_ok_and(|successor| successor == *b)
    }

    /// Display name of a book, from the static metadata table.
    pub fn pretty_name(&self, book: &str) -> Result<&'static str> {
        books::display_name(book).ok_or_else(|| TgnError::UnknownBook(book.to_string()))
    }

    /// `(code, display name)` for every loaded book that has a display name
    pub fn pretty_names(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.book_order
            .iter()
            .filter_map(|book| books::display_name(book).map(|name| (book.as_str(), name)))
    }

    /// Position of `id` along the loaded canon, for ordering checks against load order
    pub fn position(&self, id: &VerseRef) -> Option<(usize, u32, u32)> {
        if !self.is_valid(id) {
            return None;
        }
        let idx = self.book_order.iter().position(|book| *book == id.book)?;
        Some((idx, id.chapter, id.verse))
    }

    pub fn get(&self, id: &VerseRef) -> Option<&str> {
        self.text_by_id.get(id).map(String::as_str)
    }

    /// Verse text, failing with the most specific boundary error.
    pub fn text(&self, id: &VerseRef) -> Result<&str> {
        if let Some(text) = self.get(id) {
            return Ok(text);
        }
        self.last_verse(&id.book, id.chapter)?;
        Err(TgnError::InvalidReference(id.clone()))
    }
}
