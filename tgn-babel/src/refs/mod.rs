//! Reference expression parsing and expansion
//!
//!     A reference expression names verses the way people write them:
//!
//!         expression   := group (";" group)*
//!         group        := item ("," item)*
//!         item         := endpoint [ "-" endpoint ]
//!         endpoint     := [ book ] [ chapter ":" ] verse
//!
//!     Parsing happens in two passes. The syntax pass turns tokens into [`Expression`] items
//!     whose endpoints may omit book and chapter. The resolution pass walks the items in order,
//!     carrying a [`ParseContext`] (current book and chapter) that fills the omissions in, and
//!     expands each item against the [`VerseDatabase`].
//!
//! Context inheritance
//!
//!     - The first item must name a book. When that book has more than one chapter it must also
//!       name a chapter; `Jde 3` is accepted because Jude has a single chapter.
//!     - Every later item, whether it follows a `,` or a `;`, inherits the book and chapter of
//!       the item immediately before it unless it supplies its own.
//!     - The context after a range is the range's end, so in `Rom 8:32-9:2, 5` the `5` is
//!       Romans 9:5.
//!     - A range end inherits the book and chapter of its own start.
//!
//!     Output preserves source order. Ranges expand by repeated `next()` from start to end; nothing
//!     is sorted, merged or deduplicated.

mod lexer;

pub use lexer::{tokenize, Token};

use crate::data::{VerseDatabase, VerseRef};
use crate::error::{Result, TgnError};
use std::ops::Range;
use tracing::debug;

/// One side of an item, as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub book: Option<String>,
    pub chapter: Option<u32>,
    pub verse: u32,
}

/// A single reference or a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Single(Endpoint),
    Range(Endpoint, Endpoint),
}

/// Items joined by `,`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub items: Vec<Item>,
}

/// Groups joined by `;`, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub groups: Vec<Group>,
}

impl Expression {
    /// Items of every group, flattened in source order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }
}

/// Parse the syntax of an expression without consulting a database.
pub fn parse_expression(expression: &str) -> Result<Expression> {
    SyntaxParser::new(expression)?.parse()
}

struct SyntaxParser<'s> {
    source: &'s str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
}

impl<'s> SyntaxParser<'s> {
    fn new(source: &'s str) -> Result<Self> {
        Ok(Self {
            source,
            tokens: tokenize(source)?,
            pos: 0,
        })
    }

    fn error(&self, detail: impl Into<String>) -> TgnError {
        TgnError::Syntax {
            expression: self.source.to_string(),
            detail: detail.into(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn describe_current(&self) -> String {
        match self.tokens.get(self.pos) {
            Some((_, span)) => format!(
                "unexpected '{}' at offset {}",
                &self.source[span.clone()],
                span.start
            ),
            None => "unexpected end of expression".to_string(),
        }
    }

    fn number(&mut self, what: &str) -> Result<u32> {
        match self.peek() {
            Some(Token::Number(n)) => {
                let n = *n;
                self.pos += 1;
                if n == 0 {
                    return Err(self.error(format!("{what} numbers start at 1")));
                }
                Ok(n)
            }
            _ => Err(self.error(format!("expected {what}: {}", self.describe_current()))),
        }
    }

    fn parse(mut self) -> Result<Expression> {
        if self.tokens.is_empty() {
            return Err(self.error("empty expression"));
        }
        let mut groups = vec![self.group()?];
        while self.eat(&Token::Semicolon) {
            groups.push(self.group()?);
        }
        if self.peek().is_some() {
            return Err(self.error(self.describe_current()));
        }
        Ok(Expression { groups })
    }

    fn group(&mut self) -> Result<Group> {
        let mut items = vec![self.item()?];
        while self.eat(&Token::Comma) {
            items.push(self.item()?);
        }
        Ok(Group { items })
    }

    fn item(&mut self) -> Result<Item> {
        let start = self.endpoint()?;
        if self.eat(&Token::Dash) {
            let end = self.endpoint()?;
            Ok(Item::Range(start, end))
        } else {
            Ok(Item::Single(start))
        }
    }

    fn endpoint(&mut self) -> Result<Endpoint> {
        let book = match self.peek() {
            Some(Token::Book(code)) => {
                let code = code.clone();
                self.pos += 1;
                Some(code)
            }
            _ => None,
        };
        let first = self.number("chapter or verse")?;
        if self.eat(&Token::Colon) {
            let verse = self.number("verse")?;
            Ok(Endpoint {
                book,
                chapter: Some(first),
                verse,
            })
        } else {
            Ok(Endpoint {
                book,
                chapter: None,
                verse: first,
            })
        }
    }
}

/// Rolling book/chapter state used to fill in omitted parts of an endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub book: Option<String>,
    pub chapter: Option<u32>,
}

impl ParseContext {
    /// Context positioned at `reference`
    pub fn at(reference: &VerseRef) -> Self {
        Self {
            book: Some(reference.book.clone()),
            chapter: Some(reference.chapter),
        }
    }

    /// Resolve one endpoint against this context.
    pub fn resolve(
        &self,
        endpoint: &Endpoint,
        db: &VerseDatabase,
        expression: &str,
    ) -> Result<VerseRef> {
        let syntax = |detail: String| TgnError::Syntax {
            expression: expression.to_string(),
            detail,
        };

        let (book, chapter) = match (&endpoint.book, endpoint.chapter) {
            (Some(book), Some(chapter)) => (book.clone(), chapter),
            (Some(book), None) => match db.last_chapter(book) {
                Ok(1) => (book.clone(), 1),
                Ok(chapters) => {
                    return Err(syntax(format!(
                        "'{book}' has {chapters} chapters; give a chapter for verse {}",
                        endpoint.verse
                    )))
                }
                Err(_) => {
                    return Err(TgnError::InvalidReference(VerseRef::new(
                        book.as_str(),
                        1,
                        endpoint.verse,
                    )))
                }
            },
            (None, chapter) => {
                let book = self
                    .book
                    .clone()
                    .ok_or_else(|| syntax("the first reference must name a book".to_string()))?;
                let chapter = chapter.or(self.chapter).ok_or_else(|| {
                    syntax(format!("no chapter in context for verse {}", endpoint.verse))
                })?;
                (book, chapter)
            }
        };
        Ok(VerseRef::new(book, chapter, endpoint.verse))
    }

    /// Resolve and expand one item, returning its verses and the context for the next item.
    pub fn resolve_item(
        self,
        item: &Item,
        db: &VerseDatabase,
        expression: &str,
    ) -> Result<(Vec<VerseRef>, ParseContext)> {
        match item {
            Item::Single(endpoint) => {
                let verse = self.resolve(endpoint, db, expression)?;
                if !db.is_valid(&verse) {
                    return Err(TgnError::InvalidReference(verse));
                }
                let next = ParseContext::at(&verse);
                Ok((vec![verse], next))
            }
            Item::Range(start, end) => {
                let start = self.resolve(start, db, expression)?;
                let end = ParseContext::at(&start).resolve(end, db, expression)?;
                let verses = expand_range(db, &start, &end)?;
                Ok((verses, ParseContext::at(&end)))
            }
        }
    }
}

/// Inclusive walk from `start` to `end` by repeated [`VerseDatabase::next`].
///
/// An end the walk can never reach (outside the canon, or before `start`) is `InvalidRange`.
pub fn expand_range(
    db: &VerseDatabase,
    start: &VerseRef,
    end: &VerseRef,
) -> Result<Vec<VerseRef>> {
    if !db.is_valid(start) {
        return Err(TgnError::InvalidReference(start.clone()));
    }
    let invalid_range = || TgnError::InvalidRange {
        start: start.clone(),
        end: end.clone(),
    };
    if !db.is_valid(end) || db.position(end) < db.position(start) {
        return Err(invalid_range());
    }

    let mut current = start.clone();
    let mut verses = vec![current.clone()];
    while current != *end {
        current = db.next(&current).map_err(|_| invalid_range())?;
        verses.push(current.clone());
    }
    Ok(verses)
}

/// Parser bound to one database
#[derive(Debug, Clone, Copy)]
pub struct ReferenceParser<'db> {
    db: &'db VerseDatabase,
}

impl<'db> ReferenceParser<'db> {
    pub fn new(db: &'db VerseDatabase) -> Self {
        Self { db }
    }

    /// Parse and expand `expression` into concrete verses, in source order.
    pub fn parse(&self, expression: &str) -> Result<Vec<VerseRef>> {
        let parsed = parse_expression(expression)?;
        let mut context = ParseContext::default();
        let mut verses = Vec::new();
        for item in parsed.items() {
            let (expanded, next) = context.resolve_item(item, self.db, expression)?;
            verses.extend(expanded);
            context = next;
        }
        debug!(expression, verses = verses.len(), "expanded reference expression");
        Ok(verses)
    }
}

/// Parse and expand `expression` against `db`.
pub fn parse_ref(expression: &str, db: &VerseDatabase) -> Result<Vec<VerseRef>> {
    ReferenceParser::new(db).parse(expression)
}
