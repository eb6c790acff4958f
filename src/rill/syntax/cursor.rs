//! Shared token cursor for one analysis pass
//!
//! A single mutable position over the buffered token slice. The analyzer and
//! every generator it invokes share one cursor, so tokens consumed inside a
//! generator are never re-offered at the top level.
//!
//! There is no engine-level backtracking. A generator that advances
//! speculatively and then declines must restore the cursor itself with
//! [`rewind_to`](TokenCursor::rewind_to); bounded lookahead without
//! consumption is available through [`peek`](TokenCursor::peek).

use crate::rill::token::core::Token;

/// Mutable position over a token slice. The buffer stays owned by the
/// analyzer; the cursor only borrows it for the duration of one pass.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// The token at the present position, without moving
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// The token `n` positions ahead of the present one, without moving
    pub fn peek(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    /// Return the token at the present position and move forward by one
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Whether advancing is possible
    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// The present position, for restore-on-decline
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Restore the cursor to a previously observed position
    pub fn rewind_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len());
        self.pos = pos;
    }
}
