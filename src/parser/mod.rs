//! Declaration tokenizer
//!
//! This module turns the raw characters of one declaration into tokens:
//! - [`token`]: Token and token-kind definitions
//! - [`classify`]: Keyword tables and word classification
//! - [`lexer`]: Character-level tokenization with one byte of pushback
//!
//! # Supported input
//!
//! Words (letters, digits, `_`), `*`, and single punctuation characters.
//! Spaces, tabs and carriage returns separate tokens; a newline ends the
//! declaration.

pub mod classify;
pub mod lexer;
pub mod token;
