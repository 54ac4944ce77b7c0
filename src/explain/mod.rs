//! Declaration explainer
//!
//! This module turns a token stream into English:
//! - [`engine`]: The state machine ([`engine::Explainer`])
//! - [`stack`]: Bounded stack of tokens deferred until the identifier is found
//! - [`unwind`]: Prints the remaining base-type phrase in source order
//! - [`errors`]: Fatal error types
//!
//! # Output
//!
//! Phrases are written as the machine runs, each followed by one space, and
//! the line ends with a newline. Output written before an error stays
//! written.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod stack;
pub mod unwind;

use engine::Explainer;
use errors::ExplainError;

/// Explain a declaration held in memory and return the output line.
pub fn explain(declaration: &str) -> Result<String, ExplainError> {
    let mut explainer = Explainer::new(declaration.as_bytes(), Vec::new());
    explainer.run()?;
    Ok(String::from_utf8_lossy(&explainer.into_output()).into_owned())
}
