//! Grammar for constraint expressions
//!
//! This module turns constraint text into a [`Constraint`](crate::constraint::Constraint) tree.
//!
//! Structure:
//!     The tokenization is done through the logos lexer library (see [tokens]). The [lexer]
//!     wraps it into a lazy stream of positioned tokens, the [cursor] adds one token of
//!     lookahead with pushback, and the [parser] is a small recursive-descent builder.
//!
//! Syntax
//!
//!     <all must occur in order>
//!     [all must occur in any order]
//!     (exactly one must occur)
//!     {any can occur in any order}
//!     optional?
//!     .                               a wildcard, matching any single letter
//!
//!     Bare words at the top level behave as if wrapped in curly braces.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod tokens;

pub use cursor::TokenCursor;
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{tokenize, Tokenizer};
pub use parser::{parse, Parser};
pub use tokens::{Token, TokenKind};
