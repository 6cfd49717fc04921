//! Lazy tokenizer for constraint expressions
//!
//! The actual tokenization is handled entirely by logos; this wrapper attaches offsets and the
//! source text to each token and turns logos errors into [`ParseErrorKind::Lex`] errors.

use logos::Logos;

use super::error::{ParseError, ParseErrorKind};
use super::tokens::{Token, TokenKind};

/// One-pass, lazy tokenizer. Yields an error for the first illegal character.
pub struct Tokenizer<'s> {
    lexer: logos::Lexer<'s, TokenKind>,
    source: &'s str,
}

impl<'s> Tokenizer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            lexer: TokenKind::lexer(source),
            source,
        }
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = Result<Token<'s>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lexer.next()?;
        let span = self.lexer.span();
        Some(match result {
            Ok(kind) => Ok(Token::new(kind, self.lexer.slice(), span.start, self.source)),
            Err(()) => {
                let character = self.source[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(ParseError::new(
                    ParseErrorKind::Lex { character },
                    self.source,
                    span.start..span.start + character.len_utf8(),
                ))
            }
        })
    }
}

/// Convenience function to tokenize a string lazily
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}
