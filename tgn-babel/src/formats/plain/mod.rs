//! Fixed-column plain-text typesetter
//!
//! Output is UTF-8 with no markup:
//!
//!     [<book name> <chapter>:]<verse> - <verse text, wrapped and indented>
//!
//! The text column starts at a fixed position on every line, with the reference right-aligned
//! against it. Book name and chapter are printed only when they change. Non-contiguous verses
//! are separated by a line of `. . .` in the text column.
//!
//! Options:
//!     - `max-column`: maximum line width, default 100
//!     - `verse-column`: text column; by default the width of the longest full reference the
//!       loaded database can produce

use crate::data::VerseDatabase;
use crate::error::Result;
use crate::formats::common::usize_option;
use crate::registry::BackendOptions;
use crate::typesetter::{Backend, VerseEvent};
use std::io::{self, Write};

pub const NAME: &str = "plain";
pub const MAX_COLUMN: &str = "max-column";
pub const VERSE_COLUMN: &str = "verse-column";
pub const DEFAULT_MAX_COLUMN: usize = 100;

pub fn format_full_ref(book_name: &str, chapter: u32, verse: u32) -> String {
    format!("{book_name} {chapter}:{verse} - ")
}

pub fn format_short_ref(verse: u32) -> String {
    format!("{verse} - ")
}

/// Width of the longest full reference among the loaded books
pub fn auto_verse_column(db: &VerseDatabase) -> usize {
    db.pretty_names()
        .filter_map(|(book, name)| {
            let last_chapter = db.last_chapter(book).ok()?;
            let longest_verse = (1..=last_chapter)
                .filter_map(|chapter| db.last_verse(book, chapter).ok())
                .max()?;
            Some(
                format_full_ref(name, last_chapter, longest_verse)
                    .chars()
                    .count(),
            )
        })
        .max()
        .unwrap_or(0)
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let rest_len = rest.chars().count();
            let needed = if line_len == 0 {
                rest_len
            } else {
                line_len + 1 + rest_len
            };
            if needed <= width {
                if line_len > 0 {
                    line.push(' ');
                    line_len += 1;
                }
                line.push_str(rest);
                line_len += rest_len;
                break;
            }
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }
            let split = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(idx, _)| idx);
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
    }
    if line_len > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextBackend {
    max_column: usize,
    verse_column: usize,
}

impl PlainTextBackend {
    pub fn new(max_column: usize, verse_column: usize) -> Self {
        Self {
            max_column,
            verse_column,
        }
    }

    pub fn from_options(options: &BackendOptions, db: &VerseDatabase) -> Result<Self> {
        let max_column = usize_option(options, NAME, MAX_COLUMN)?.unwrap_or(DEFAULT_MAX_COLUMN);
        let verse_column = match usize_option(options, NAME, VERSE_COLUMN)? {
            Some(column) => column,
            None => auto_verse_column(db),
        };
        Ok(Self::new(max_column, verse_column))
    }

    pub fn verse_column(&self) -> usize {
        self.verse_column
    }
}

impl Backend for PlainTextBackend {
    fn discontinuity(&mut self, out: &mut dyn Write, _after_paragraph: bool) -> io::Result<()> {
        writeln!(out, "{}. . .", " ".repeat(self.verse_column))
    }

    fn verse(&mut self, out: &mut dyn Write, event: &VerseEvent<'_>) -> io::Result<()> {
        let reference = event.reference;
        let leader = if event.new_chapter {
            format_full_ref(event.book_name, reference.chapter, reference.verse)
        } else {
            format_short_ref(reference.verse)
        };
        let column = self.verse_column;
        let indent = " ".repeat(column);
        let lines = wrap(event.text, self.max_column.saturating_sub(column));

        let mut lines = lines.iter();
        let first = lines.next().map(String::as_str).unwrap_or("");
        write!(out, "{leader:>column$}{first}")?;
        for line in lines {
            write!(out, "\n{indent}{line}")?;
        }
        writeln!(out)
    }

    fn debug(&mut self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "{message}")
    }
}
