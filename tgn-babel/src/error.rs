//! Error types for loading, parsing and typesetting

use crate::data::VerseRef;
use thiserror::Error;

pub type Result<T, E = TgnError> = std::result::Result<T, E>;

/// Errors that can occur anywhere in the verse pipeline
#[derive(Error, Debug)]
pub enum TgnError {
    /// A verse-source line does not match `BOOK|CHAPTER|VERSE| TEXT~`
    #[error("malformed verse record '{line}'")]
    MalformedRecord { line: String },

    /// Book code absent from the loaded database or the book metadata table
    #[error("unknown book '{0}'")]
    UnknownBook(String),

    /// Chapter absent from a known book
    #[error("unknown chapter {chapter} in book '{book}'")]
    UnknownChapter { book: String, chapter: u32 },

    /// A resolved reference is outside the canon's boundaries
    #[error("invalid reference {0}")]
    InvalidReference(VerseRef),

    /// A range end cannot be reached from its start by walking forward
    #[error("invalid range {start}-{end}")]
    InvalidRange { start: VerseRef, end: VerseRef },

    /// The reference expression does not match the grammar
    #[error("syntax error in '{expression}': {detail}")]
    Syntax { expression: String, detail: String },

    /// `next()` was asked to step past the final verse of the final book
    #[error("no verse follows {0}")]
    EndOfCanon(VerseRef),

    /// A typesetter operation was invoked before `start()`
    #[error("typesetter '{0}' has not been started")]
    NotStarted(String),

    /// `start()` was invoked on an already active typesetter
    #[error("typesetter '{0}' has already been started")]
    AlreadyStarted(String),

    /// An operation was invoked after `finish()`
    #[error("typesetter '{0}' has already finished")]
    AlreadyFinished(String),

    /// Two backends registered under one name
    #[error("duplicate typesetter name '{0}'")]
    DuplicateRegistration(String),

    /// Registry lookup miss
    #[error("typesetter '{0}' not found")]
    TypesetterNotFound(String),

    /// A backend option value could not be interpreted
    #[error("invalid value '{value}' for option '{key}' of typesetter '{typesetter}'")]
    InvalidOption {
        typesetter: String,
        key: String,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
