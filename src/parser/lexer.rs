//! Lexer (tokenizer) for a single C declaration
//!
//! Pulls bytes from any [`Read`] source one at a time and produces one
//! [`Token`] per call to [`Lexer::next_token`]. A word may over-read by one
//! byte to find its end; that byte is pushed back and starts the next token.
//!
//! The declaration ends at the first newline or at end of stream, after which
//! the lexer keeps returning [`TokenKind::End`].

use super::classify::Classifier;
use super::token::{Token, TokenKind};
use crate::explain::errors::ExplainError;
use log::trace;
use std::io::{Bytes, Read};

/// Lexer over a byte stream
pub struct Lexer<R: Read> {
    input: Bytes<R>,
    pushback: Option<u8>,
    finished: bool,
    classifier: Classifier,
}

impl<R: Read> Lexer<R> {
    /// Create a lexer reading from `input`.
    pub fn new(input: R) -> Self {
        Self {
            input: input.bytes(),
            pushback: None,
            finished: false,
            classifier: Classifier::new(),
        }
    }

    /// Lex the next token.
    pub fn next_token(&mut self) -> Result<Token, ExplainError> {
        let token = self.scan()?;
        trace!("lexed {}", token);
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, ExplainError> {
        self.skip_blanks()?;

        let Some(byte) = self.advance()? else {
            return Ok(Token::end());
        };

        match byte {
            b'\n' => {
                self.finished = true;
                Ok(Token::end())
            }
            b'*' => Ok(Token::new(TokenKind::PointerMark, "*")),
            b if is_word_byte(b) => self.word(b),
            b => Ok(Token::punct(char::from(b))),
        }
    }

    /// Read a run of word bytes starting with `first`.
    fn word(&mut self, first: u8) -> Result<Token, ExplainError> {
        let mut text = String::new();
        text.push(char::from(first));

        while let Some(b) = self.advance()? {
            if is_word_byte(b) {
                text.push(char::from(b));
            } else {
                self.unread(b);
                break;
            }
        }

        let kind = self.classifier.classify(&text);
        Ok(Token::new(kind, text))
    }

    /// Skip spaces, tabs and carriage returns
    fn skip_blanks(&mut self) -> Result<(), ExplainError> {
        while let Some(b) = self.advance()? {
            if !matches!(b, b' ' | b'\t' | b'\r') {
                self.unread(b);
                break;
            }
        }
        Ok(())
    }

    /// Next byte, honouring pushback. `None` once the declaration is over.
    fn advance(&mut self) -> Result<Option<u8>, ExplainError> {
        if let Some(b) = self.pushback.take() {
            return Ok(Some(b));
        }
        if self.finished {
            return Ok(None);
        }
        match self.input.next().transpose()? {
            Some(b) => Ok(Some(b)),
            None => {
                self.finished = true;
                Ok(None)
            }
        }
    }

    /// Return one byte to the stream. Only one byte of pushback is held.
    fn unread(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none(), "pushback slot already full");
        self.pushback = Some(byte);
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(src: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(src.as_bytes());
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            let done = token.is_end();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = lex_all("const char *s[10]");

        assert_eq!(tokens[0], Token::new(TokenKind::ReadOnly, "const"));
        assert_eq!(tokens[1], Token::new(TokenKind::TypeKeyword, "char"));
        assert_eq!(tokens[2], Token::new(TokenKind::PointerMark, "*"));
        assert_eq!(tokens[3], Token::new(TokenKind::Identifier, "s"));
        assert!(tokens[4].is_punct('['));
        assert_eq!(tokens[5], Token::new(TokenKind::Identifier, "10"));
        assert!(tokens[6].is_punct(']'));
        assert!(tokens[7].is_end());
        assert_eq!(tokens.len(), 8);
    }

    #[test]
    fn test_word_ends_at_punctuation() {
        let tokens = lex_all("int(*fp)()");

        assert_eq!(tokens[0].text, "int");
        assert!(tokens[1].is_punct('('));
        assert_eq!(tokens[2].kind, TokenKind::PointerMark);
        assert_eq!(tokens[3].text, "fp");
        assert!(tokens[4].is_punct(')'));
        assert!(tokens[5].is_punct('('));
        assert!(tokens[6].is_punct(')'));
    }

    #[test]
    fn test_blanks_skipped() {
        let tokens = lex_all(" \tunsigned \t long\r\n");

        assert_eq!(tokens[0].text, "unsigned");
        assert_eq!(tokens[1].text, "long");
        assert!(tokens[2].is_end());
    }

    #[test]
    fn test_underscores_in_words() {
        let tokens = lex_all("struct my_node *_next");

        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "my_node"));
        assert_eq!(tokens[3], Token::new(TokenKind::Identifier, "_next"));
    }

    #[test]
    fn test_long_words_are_not_truncated() {
        let name = "a".repeat(200);
        let tokens = lex_all(&name);
        assert_eq!(tokens[0].text.len(), 200);
    }

    #[test]
    fn test_end_is_sticky() {
        let mut lexer = Lexer::new("x\nint y".as_bytes());
        assert_eq!(lexer.next_token().unwrap().text, "x");
        assert!(lexer.next_token().unwrap().is_end());
        // The second line is never read
        assert!(lexer.next_token().unwrap().is_end());
        assert!(lexer.next_token().unwrap().is_end());
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("".as_bytes());
        assert!(lexer.next_token().unwrap().is_end());
    }
}
