//! State machine driving the translation
//!
//! [`Explainer`] owns the lexer, the deferred-token stack, the current token
//! and the output. [`Explainer::run`] dispatches on [`State`] until the
//! machine reaches its terminal state. Each step reads or advances the
//! current token, may print, and picks the next state.
//!
//! # Why a stack
//!
//! Everything before the identifier is pushed in source order. Suffixes after
//! the identifier (`[...]`, `(...)`) read forwards, then the stack is popped
//! nearest-first for pointers and qualifiers. A `(` on top of the stack means
//! a parenthesized declarator just closed, so suffixes are read again.

use super::errors::ExplainError;
use super::stack::TokenStack;
use super::unwind::unwind;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use log::debug;
use std::io::{Read, Write};

/// States of the machine. `None` in [`Explainer::state`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    ParseUntilIdentifier,
    ProcessArray,
    ProcessParams,
    ProcessLeftParen,
    ProcessPointer,
    ProcessType,
}

/// Explains one declaration read from `R`, writing English to `W`
pub struct Explainer<R: Read, W: Write> {
    lexer: Lexer<R>,
    stack: TokenStack,
    current: Token,
    out: W,
    state: Option<State>,
}

impl<R: Read, W: Write> Explainer<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Explainer {
            lexer: Lexer::new(input),
            stack: TokenStack::new(),
            current: Token::end(),
            out,
            state: Some(State::ParseUntilIdentifier),
        }
    }

    /// Run the machine to completion
    pub fn run(&mut self) -> Result<(), ExplainError> {
        while let Some(state) = self.state {
            let next = self.step(state)?;
            debug!("{:?} -> {:?} (current {})", state, next, self.current);
            self.state = next;
        }
        Ok(())
    }

    /// Current state, or `None` once finished
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// Consume the explainer and return its writer
    pub fn into_output(self) -> W {
        self.out
    }

    fn step(&mut self, state: State) -> Result<Option<State>, ExplainError> {
        match state {
            State::ParseUntilIdentifier => self.parse_until_identifier(),
            State::ProcessArray => self.process_array(),
            State::ProcessParams => self.process_params(),
            State::ProcessLeftParen => self.process_left_paren(),
            State::ProcessPointer => self.process_pointer(),
            State::ProcessType => self.process_type(),
        }
    }

    fn advance(&mut self) -> Result<(), ExplainError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Advance, treating end of input as an error
    fn expect_more(&mut self, expected: &'static str) -> Result<(), ExplainError> {
        self.advance()?;
        if self.current.is_end() {
            return Err(ExplainError::UnexpectedEndOfInput { expected });
        }
        Ok(())
    }

    fn parse_until_identifier(&mut self) -> Result<Option<State>, ExplainError> {
        self.expect_more("an identifier")?;
        while self.current.kind != TokenKind::Identifier || self.expects_tag() {
            let token = std::mem::replace(&mut self.current, Token::end());
            self.stack.push(token)?;
            self.expect_more("an identifier")?;
        }

        write!(self.out, "{} is ", self.current.text)?;
        self.advance()?;
        Ok(Some(State::ProcessArray))
    }

    /// A word right after `struct`, `union` or `enum` is a tag, not the name
    fn expects_tag(&self) -> bool {
        self.stack.peek().is_some_and(Token::introduces_tag)
    }

    fn process_array(&mut self) -> Result<Option<State>, ExplainError> {
        let mut next = State::ProcessParams;

        while self.current.is_punct('[') {
            write!(self.out, "an array ")?;
            self.expect_more("an array size or ']'")?;
            if self.current.starts_with_digit() {
                write!(self.out, "{} ", leading_number(&self.current.text))?;
                self.expect_more("']'")?;
            }
            self.advance()?;
            write!(self.out, "of ")?;
            next = State::ProcessLeftParen;
        }

        Ok(Some(next))
    }

    fn process_params(&mut self) -> Result<Option<State>, ExplainError> {
        if self.current.is_punct('(') {
            while !self.current.is_punct(')') {
                self.expect_more("')' closing the parameter list")?;
            }
            self.advance()?;
            write!(self.out, "function returning ")?;
        }
        Ok(Some(State::ProcessLeftParen))
    }

    fn process_left_paren(&mut self) -> Result<Option<State>, ExplainError> {
        if self.stack.peek().is_some_and(|t| t.is_punct('(')) {
            self.stack.pop();
            if self.current.is_end() {
                return Err(ExplainError::UnexpectedEndOfInput {
                    expected: "')' closing the declarator",
                });
            }
            // The current token is the matching ')'
            self.advance()?;
            return Ok(Some(State::ProcessArray));
        }
        Ok(Some(State::ProcessPointer))
    }

    fn process_pointer(&mut self) -> Result<Option<State>, ExplainError> {
        let phrase = match self.stack.peek() {
            Some(top) if top.kind.is_pointer_or_qualifier() => top.kind.phrase(),
            _ => None,
        };

        match phrase {
            Some(phrase) => {
                write!(self.out, "{} ", phrase)?;
                self.stack.pop();
                Ok(Some(State::ProcessLeftParen))
            }
            None => Ok(Some(State::ProcessType)),
        }
    }

    fn process_type(&mut self) -> Result<Option<State>, ExplainError> {
        unwind(&mut self.stack, &mut self.out)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(None)
    }
}

/// Decimal value of the leading digits of an array size, like C's `atoi`
fn leading_number(text: &str) -> u64 {
    text.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |n, b| {
            n.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}
