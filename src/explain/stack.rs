//! Bounded token stack
//!
//! Holds the tokens seen before the identifier, in source order, so the state
//! machine can replay them nearest-first. Capacity is fixed; pushing past it
//! is the fatal [`ExplainError::TooManyTokens`].

use super::constants::MAX_TOKENS;
use super::errors::ExplainError;
use crate::parser::token::Token;
use log::trace;

/// The deferred-token stack
#[derive(Debug, Clone)]
pub struct TokenStack {
    tokens: Vec<Token>,
    capacity: usize,
}

impl TokenStack {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TOKENS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenStack {
            tokens: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a token, failing when the stack is full
    pub fn push(&mut self, token: Token) -> Result<(), ExplainError> {
        if self.tokens.len() >= self.capacity {
            return Err(ExplainError::TooManyTokens {
                capacity: self.capacity,
            });
        }
        trace!("push {} (depth {})", token, self.tokens.len() + 1);
        self.tokens.push(token);
        Ok(())
    }

    /// Pop the top token
    pub fn pop(&mut self) -> Option<Token> {
        let token = self.tokens.pop();
        if let Some(t) = &token {
            trace!("pop {} (depth {})", t, self.tokens.len());
        }
        token
    }

    /// The top token, if any
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TokenStack {
    fn default() -> Self {
        Self::new()
    }
}
