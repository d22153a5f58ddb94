//! Token definitions for reference expressions
//!
//! Whitespace between tokens is insignificant and skipped by the lexer. Book codes must start
//! with a letter so they never collide with chapter/verse numbers (`Co1 13:4`).
use crate::error::{Result, TgnError};
use logos::Logos;
use std::ops::Range;

/// All possible tokens in a reference expression
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    // ASCII hyphen or en dash
    #[token("-")]
    #[token("\u{2013}")]
    Dash,

    #[token(":")]
    Colon,

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Number(u32),

    #[regex(r"[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Book(String),
}

/// Tokenize `expression`, pairing every token with its byte span.
pub fn tokenize(expression: &str) -> Result<Vec<(Token, Range<usize>)>> {
    let mut lexer = Token::lexer(expression);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(TgnError::Syntax {
                    expression: expression.to_string(),
                    detail: format!(
                        "unexpected '{}' at offset {}",
                        lexer.slice(),
                        lexer.span().start
                    ),
                })
            }
        }
    }
    Ok(tokens)
}
