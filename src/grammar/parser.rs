//! Recursive-descent parser for constraint expressions
//!
//! Grammar:
//!
//!     expression := term*
//!     term       := (group | '.' | word) '?'?
//!     group      := open term* close          (one open/close pair per group kind)
//!
//! A top-level expression with a single term is that term. Several top-level terms are
//! combined as if wrapped in `{...}`: any subset of them, in any order.

use tracing::trace;

use super::cursor::TokenCursor;
use super::error::{ParseError, ParseErrorKind};
use super::tokens::{Token, TokenKind};
use crate::constraint::{Constraint, Group};

/// Parses one constraint expression.
pub struct Parser<'s> {
    source: &'s str,
    cursor: TokenCursor<'s>,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            cursor: TokenCursor::new(source),
        }
    }

    /// Parse the whole expression into a single constraint tree
    pub fn parse(mut self) -> Result<Constraint, ParseError> {
        let mut terms = self.parse_terms(None)?;
        let tree = match terms.len() {
            0 => {
                return Err(self.error(ParseErrorKind::EmptyExpression, 0..self.source.len()));
            }
            1 => terms.remove(0),
            _ => Constraint::AnySubset(terms),
        };
        trace!(expression = self.source, tree = %tree, "parsed constraint");
        Ok(tree)
    }

    /// Parse terms until end of input, or until a closing delimiter when inside a group.
    ///
    /// The closing delimiter is pushed back for the caller.
    fn parse_terms(&mut self, inside: Option<Group>) -> Result<Vec<Constraint>, ParseError> {
        let mut terms = Vec::new();
        while let Some(token) = self.cursor.pop()? {
            if let Some(group) = token.kind.opens() {
                terms.push(self.parse_group(group, token)?);
                continue;
            }
            if token.kind.closes().is_some() {
                if inside.is_some() {
                    self.cursor.unget(token);
                    break;
                }
                return Err(self.error(
                    ParseErrorKind::UnexpectedDelimiter {
                        delimiter: first_char(token.lexeme),
                    },
                    token.span(),
                ));
            }
            match token.kind {
                TokenKind::Question => {
                    let last = terms.pop().ok_or_else(|| {
                        self.error(ParseErrorKind::DanglingOptional, token.span())
                    })?;
                    terms.push(Constraint::optional(last));
                }
                TokenKind::Period => terms.push(Constraint::Wildcard),
                _ => terms.push(Constraint::Literal(token.lexeme.to_string())),
            }
        }
        Ok(terms)
    }

    /// Parse the rest of a group whose opening delimiter has been consumed
    fn parse_group(&mut self, group: Group, open: Token<'s>) -> Result<Constraint, ParseError> {
        let children = self.parse_terms(Some(group))?;
        match self.cursor.peek()? {
            Some(close) if close.kind.closes() == Some(group) => {
                self.cursor.pop()?;
            }
            _ => return Err(self.error(ParseErrorKind::UnclosedGroup { group }, open.span())),
        }
        if children.is_empty() {
            return Err(self.error(ParseErrorKind::EmptyExpression, open.span()));
        }
        Ok(Constraint::group(group, children))
    }

    fn error(&self, kind: ParseErrorKind, span: std::ops::Range<usize>) -> ParseError {
        ParseError::new(kind, self.source, span)
    }
}

fn first_char(lexeme: &str) -> char {
    lexeme.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Parse a constraint expression
pub fn parse(source: &str) -> Result<Constraint, ParseError> {
    Parser::new(source).parse()
}
