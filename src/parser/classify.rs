//! Keyword classification for word tokens
//!
//! Only two tables exist: the qualifiers and the built-in type words.
//! Everything else, including `struct` tags and array sizes, is an identifier;
//! the state machine tells them apart purely by position.

use super::token::TokenKind;
use rustc_hash::FxHashSet;

/// Built-in type words recognised as [`TokenKind::TypeKeyword`].
pub const TYPE_KEYWORDS: [&str; 12] = [
    "void", "char", "signed", "unsigned", "short", "int", "long", "float", "double", "struct",
    "union", "enum",
];

/// Type words that take a tag name after them
pub const TAG_KEYWORDS: [&str; 3] = ["struct", "union", "enum"];

/// Maps word text to its [`TokenKind`].
#[derive(Debug, Clone)]
pub struct Classifier {
    types: FxHashSet<&'static str>,
}

impl Classifier {
    pub fn new() -> Self {
        Classifier {
            types: TYPE_KEYWORDS.iter().copied().collect(),
        }
    }

    /// Classify a word. Qualifiers are checked before the type table.
    pub fn classify(&self, text: &str) -> TokenKind {
        match text {
            "const" => TokenKind::ReadOnly,
            "volatile" => TokenKind::Volatile,
            _ if self.types.contains(text) => TokenKind::TypeKeyword,
            _ => TokenKind::Identifier,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
