//! Recoverable grammar-violation errors reported by generators
//!
//! These cover violations inside an already-committed construct (an
//! unterminated argument list, a declaration missing its terminator). They
//! are recorded by the analyzer and the offending position degrades to a
//! passthrough token; they never abort the pass. Wiring defects (an
//! unregistered generator id) are a different class entirely and panic at
//! the point of misuse, see the registry.

use std::fmt;

use crate::rill::token::core::{Token, TokenMeta};

/// A grammar violation inside a construct a generator had committed to
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxError {
    /// Input ended inside a construct
    UnexpectedEnd {
        context: &'static str,
        meta: TokenMeta,
    },
    /// A token that cannot appear at this point of the construct
    UnexpectedToken {
        context: &'static str,
        found: Token,
    },
}

impl SyntaxError {
    /// Position metadata inherited from the offending lexical token
    pub fn meta(&self) -> &TokenMeta {
        match self {
            SyntaxError::UnexpectedEnd { meta, .. } => meta,
            SyntaxError::UnexpectedToken { found, .. } => &found.meta,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedEnd { context, meta } => {
                write!(
                    f,
                    "unexpected end of input in {} starting at line {}",
                    context, meta.line
                )
            }
            SyntaxError::UnexpectedToken { context, found } => {
                write!(
                    f,
                    "unexpected `{}` in {} at line {}",
                    found.text, context, found.meta.line
                )
            }
        }
    }
}

impl std::error::Error for SyntaxError {}
