//! Token definitions for constraint expressions
//!
//! The token kinds are defined using the logos derive macro. Whitespace (space, tab,
//! newline, carriage return) only separates tokens and is skipped by the lexer.
use logos::Logos;
use std::fmt;

use crate::constraint::Group;

/// All possible token kinds in a constraint expression
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    // Group delimiters
    #[token("<")]
    OpenAngle,
    #[token(">")]
    CloseAngle,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Suffix marking the preceding term as optional
    #[token("?")]
    Question,

    // Wildcard
    #[token(".")]
    Period,

    // Any maximal run of ASCII letters
    #[regex(r"[a-zA-Z]+")]
    Word,
}

impl TokenKind {
    /// The group this token opens, if it is an opening delimiter
    pub fn opens(&self) -> Option<Group> {
        match self {
            TokenKind::OpenAngle => Some(Group::Sequence),
            TokenKind::OpenBracket => Some(Group::AllOf),
            TokenKind::OpenBrace => Some(Group::AnySubset),
            TokenKind::OpenParen => Some(Group::Alternative),
            _ => None,
        }
    }

    /// The group this token closes, if it is a closing delimiter
    pub fn closes(&self) -> Option<Group> {
        match self {
            TokenKind::CloseAngle => Some(Group::Sequence),
            TokenKind::CloseBracket => Some(Group::AllOf),
            TokenKind::CloseBrace => Some(Group::AnySubset),
            TokenKind::CloseParen => Some(Group::Alternative),
            _ => None,
        }
    }
}

/// A token together with where it was found.
///
/// Tokens borrow from the expression text; they only live for the duration of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub lexeme: &'s str,
    /// Byte offset of the lexeme in `source`
    pub offset: usize,
    pub source: &'s str,
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, lexeme: &'s str, offset: usize, source: &'s str) -> Self {
        Self {
            kind,
            lexeme,
            offset,
            source,
        }
    }

    /// Byte range of the lexeme in `source`
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.lexeme.len()
    }
}

impl fmt::Display for Token<'_> {
    /// Renders the source with the token underlined by carets
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}{}",
            self.source,
            " ".repeat(self.offset),
            "^".repeat(self.lexeme.len().max(1))
        )
    }
}
