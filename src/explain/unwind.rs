//! Final type phrase
//!
//! By the time the machine reaches its last state, only qualifiers and the
//! base-type words remain on the stack, in source order. [`unwind`] prints
//! them bottom to top so `const unsigned int` reads the way it was written.

use super::errors::ExplainError;
use super::stack::TokenStack;
use std::io::Write;

/// Drain `stack`, printing the first-pushed token first.
///
/// Recursion depth is bounded by the stack capacity.
pub fn unwind<W: Write>(stack: &mut TokenStack, out: &mut W) -> Result<(), ExplainError> {
    let Some(token) = stack.pop() else {
        return Ok(());
    };

    unwind(stack, out)?;

    match token.kind.phrase() {
        Some(phrase) if token.kind.is_qualifier() => write!(out, "{} ", phrase)?,
        _ => write!(out, "{} ", token.text)?,
    }
    Ok(())
}
