//! Token model shared by the lexer, the token stack and the state machine
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal text it was read from.
//! Word tokens carry one of the semantic kinds; every other character is kept
//! as [`TokenKind::Punct`] and compared by character downstream.

use super::classify::TAG_KEYWORDS;
use crate::explain::constants::{POINTER_PHRASE, READ_ONLY_PHRASE, VOLATILE_PHRASE};
use std::fmt;

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `const`
    ReadOnly,
    /// `volatile`
    Volatile,
    /// `*`
    PointerMark,
    /// One of the built-in type words (`int`, `struct`, ...)
    TypeKeyword,
    /// Any other word, including tags and array sizes
    Identifier,
    /// A single non-word character such as `[` or `)`
    Punct(char),
    /// The declaration is exhausted (end of line or end of stream)
    End,
}

impl TokenKind {
    /// True for the kinds ProcessPointer consumes: `*`, `const`, `volatile`.
    pub fn is_pointer_or_qualifier(self) -> bool {
        matches!(
            self,
            TokenKind::PointerMark | TokenKind::ReadOnly | TokenKind::Volatile
        )
    }

    /// True for `const` and `volatile`.
    pub fn is_qualifier(self) -> bool {
        matches!(self, TokenKind::ReadOnly | TokenKind::Volatile)
    }

    /// English phrase printed for pointer marks and qualifiers.
    pub fn phrase(self) -> Option<&'static str> {
        match self {
            TokenKind::ReadOnly => Some(READ_ONLY_PHRASE),
            TokenKind::Volatile => Some(VOLATILE_PHRASE),
            TokenKind::PointerMark => Some(POINTER_PHRASE),
            _ => None,
        }
    }
}

/// A lexed token: its kind plus the source text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Single-character punctuation token.
    pub fn punct(ch: char) -> Self {
        Token::new(TokenKind::Punct(ch), ch.to_string())
    }

    /// End-of-declaration marker.
    pub fn end() -> Self {
        Token::new(TokenKind::End, String::new())
    }

    /// Whether this is the punctuation token for `ch`.
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punct(ch)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    /// `struct`, `union` and `enum` are followed by a tag name
    pub fn introduces_tag(&self) -> bool {
        self.kind == TokenKind::TypeKeyword && TAG_KEYWORDS.contains(&self.text.as_str())
    }

    /// Array sizes are words that begin with a decimal digit.
    pub fn starts_with_digit(&self) -> bool {
        self.text
            .as_bytes()
            .first()
            .is_some_and(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::ReadOnly => write!(f, "'const'"),
            TokenKind::Volatile => write!(f, "'volatile'"),
            TokenKind::PointerMark => write!(f, "'*'"),
            TokenKind::TypeKeyword => write!(f, "type '{}'", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Punct(ch) => write!(f, "'{}'", ch),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_or_qualifier_kinds() {
        assert!(TokenKind::PointerMark.is_pointer_or_qualifier());
        assert!(TokenKind::ReadOnly.is_pointer_or_qualifier());
        assert!(TokenKind::Volatile.is_pointer_or_qualifier());
        assert!(!TokenKind::TypeKeyword.is_pointer_or_qualifier());
        assert!(!TokenKind::Punct('(').is_pointer_or_qualifier());

        assert!(TokenKind::ReadOnly.is_qualifier());
        assert!(!TokenKind::PointerMark.is_qualifier());
    }

    #[test]
    fn test_phrases() {
        assert_eq!(TokenKind::ReadOnly.phrase(), Some("read-only"));
        assert_eq!(TokenKind::Volatile.phrase(), Some("volatile"));
        assert_eq!(TokenKind::PointerMark.phrase(), Some("pointer to"));
        assert_eq!(TokenKind::Identifier.phrase(), None);
    }

    #[test]
    fn test_digit_detection() {
        assert!(Token::new(TokenKind::Identifier, "10").starts_with_digit());
        assert!(!Token::new(TokenKind::Identifier, "x10").starts_with_digit());
        assert!(!Token::end().starts_with_digit());
    }

    #[test]
    fn test_tag_keywords() {
        assert!(Token::new(TokenKind::TypeKeyword, "struct").introduces_tag());
        assert!(Token::new(TokenKind::TypeKeyword, "enum").introduces_tag());
        assert!(!Token::new(TokenKind::TypeKeyword, "int").introduces_tag());
        assert!(!Token::new(TokenKind::Identifier, "struct").introduces_tag());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::punct('[').to_string(), "'['");
        assert_eq!(
            Token::new(TokenKind::Identifier, "foo").to_string(),
            "identifier 'foo'"
        );
        assert_eq!(Token::end().to_string(), "end of input");
    }
}
