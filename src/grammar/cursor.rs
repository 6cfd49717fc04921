//! A pushback-capable cursor over the token stream

use super::error::ParseError;
use super::lexer::Tokenizer;
use super::tokens::Token;

/// Token cursor with `pop`, `peek` and `unget`.
///
/// Lex errors surface from whichever call first pulls the bad token from the tokenizer.
pub struct TokenCursor<'s> {
    tokens: Tokenizer<'s>,
    // Pushed-back tokens, next token last
    buffer: Vec<Token<'s>>,
}

impl<'s> TokenCursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            buffer: Vec::new(),
        }
    }

    /// Take the next token, or `None` at end of input
    pub fn pop(&mut self) -> Result<Option<Token<'s>>, ParseError> {
        match self.buffer.pop() {
            Some(token) => Ok(Some(token)),
            None => self.tokens.next().transpose(),
        }
    }

    /// Look at the next token without consuming it
    pub fn peek(&mut self) -> Result<Option<Token<'s>>, ParseError> {
        if self.buffer.is_empty() {
            match self.tokens.next().transpose()? {
                Some(token) => self.buffer.push(token),
                None => return Ok(None),
            }
        }
        Ok(self.buffer.last().copied())
    }

    /// Push a token back so the next `pop` returns it
    pub fn unget(&mut self, token: Token<'s>) {
        self.buffer.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::tokens::TokenKind;

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = TokenCursor::new("foo ?");
        let peeked = cursor.peek().unwrap().unwrap();
        assert_eq!(peeked.lexeme, "foo");
        assert_eq!(cursor.pop().unwrap().unwrap(), peeked);
        assert_eq!(cursor.pop().unwrap().unwrap().kind, TokenKind::Question);
        assert_eq!(cursor.pop().unwrap(), None);
        assert_eq!(cursor.peek().unwrap(), None);
    }

    #[test]
    fn test_unget_is_last_in_first_out() {
        let mut cursor = TokenCursor::new("a b c");
        let a = cursor.pop().unwrap().unwrap();
        let b = cursor.pop().unwrap().unwrap();
        cursor.unget(b);
        cursor.unget(a);
        assert_eq!(cursor.pop().unwrap().unwrap().lexeme, "a");
        assert_eq!(cursor.peek().unwrap().unwrap().lexeme, "b");
        assert_eq!(cursor.pop().unwrap().unwrap().lexeme, "b");
        assert_eq!(cursor.pop().unwrap().unwrap().lexeme, "c");
    }

    #[test]
    fn test_lex_error_surfaces_on_peek() {
        let mut cursor = TokenCursor::new("a $");
        assert!(cursor.pop().unwrap().is_some());
        assert!(cursor.peek().is_err());
    }
}
