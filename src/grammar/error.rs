//! Error types for parsing constraint expressions
//!
//! Every error keeps the expression text and the byte range of the offending token so that it
//! can be reported with a caret underline:
//!
//!     Unexpected '?' with no preceding term
//!     ? foo
//!     ^

use std::fmt;
use std::ops::Range;

use crate::constraint::Group;

/// What went wrong while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that is neither a letter, whitespace, nor a delimiter
    Lex { character: char },
    /// A group's closing delimiter was never found; the span is the opening delimiter
    UnclosedGroup { group: Group },
    /// A `?` with no term before it
    DanglingOptional,
    /// No terms at all, either in the whole expression or inside a group
    EmptyExpression,
    /// A closing delimiter with no group open
    UnexpectedDelimiter { delimiter: char },
}

/// A fatal error for one constraint expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The full expression text
    pub source: String,
    /// Byte range of the offending token in `source`
    pub span: Range<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: &str, span: Range<usize>) -> Self {
        Self {
            kind,
            source: source.to_string(),
            span,
        }
    }

    /// Byte offset of the offending token
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// The expression text with the offending token underlined
    pub fn caret_diagnostic(&self) -> String {
        let width = self.span.end.saturating_sub(self.span.start).max(1);
        format!(
            "{}\n{}{}",
            self.source,
            " ".repeat(self.span.start),
            "^".repeat(width)
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Lex { character } => write!(f, "Illegal character {:?}", character),
            ParseErrorKind::UnclosedGroup { group } => write!(
                f,
                "Expected \"{}\" to close the group opened here",
                group.close()
            ),
            ParseErrorKind::DanglingOptional => write!(f, "Unexpected '?' with no preceding term"),
            ParseErrorKind::EmptyExpression => write!(f, "No terms found"),
            ParseErrorKind::UnexpectedDelimiter { delimiter } => {
                write!(f, "Unexpected {:?} with no open group", delimiter)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.kind, self.caret_diagnostic())
    }
}

impl std::error::Error for ParseError {}
