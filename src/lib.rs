//! # Introduction
//!
//! cdecl-explain reads one C declaration and explains its type in English,
//! e.g. `int *x[]` becomes `x is an array of pointer to int`.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Lexer → State machine (+ token stack) → Unwind → Output
//! ```
//!
//! 1. [`parser`]: tokenizes the declaration and classifies words.
//! 2. [`explain`]: the state machine. Tokens before the identifier are
//!    deferred on a bounded stack and replayed in English word order.
//!
//! ## Example
//!
//! ```
//! let line = cdecl_explain::explain("int (*f)()").unwrap();
//! assert_eq!(line, "f is pointer to function returning int \n");
//! ```

pub mod explain;
pub mod parser;

pub use explain::engine::Explainer;
pub use explain::errors::ExplainError;
pub use explain::explain;
