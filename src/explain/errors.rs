//! Error types for the declaration explainer
//!
//! Every error is fatal: it ends the translation and the driver exits with a
//! failure status. Output already written stays written.

use std::io;
use thiserror::Error;

/// Errors raised while explaining a declaration
#[derive(Debug, Error)]
pub enum ExplainError {
    /// More tokens preceded the identifier than the stack can hold
    #[error("too many tokens (at most {capacity} may precede the identifier)")]
    TooManyTokens { capacity: usize },

    /// Input ended while the machine still needed tokens
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: &'static str },

    /// Reading the declaration or writing the explanation failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ExplainError::TooManyTokens { capacity: 40 };
        assert_eq!(
            err.to_string(),
            "too many tokens (at most 40 may precede the identifier)"
        );

        let err = ExplainError::UnexpectedEndOfInput {
            expected: "an identifier",
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input, expected an identifier"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: ExplainError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ExplainError::Io(_)));
    }
}
