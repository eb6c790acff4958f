//! Tokenizer interface consumed by the syntax analyzer
//!
//! The analyzer drains a [Tokenizer] to exhaustion at the start of every
//! run, so implementations only need sequential access plus the ability to
//! rewind to the start of the source.

use crate::rill::lexing::tokens::lex_source;
use crate::rill::token::core::{SourceId, Token};

/// Upstream token source for one source unit.
pub trait Tokenizer {
    /// Rewind to the start of the source
    fn reset(&mut self);

    /// Produce the next lexical token, or `None` on exhaustion
    fn next_token(&mut self) -> Option<Token>;

    /// Which source unit is being analyzed, for diagnostics
    fn source_id(&self) -> &SourceId;
}

/// Standard tokenizer over a source string, backed by the logos lexer.
///
/// The source is tokenized once at construction; `reset` rewinds over the
/// buffered sequence, so repeated analyzer runs see identical tokens unless
/// the tokenizer itself is rebuilt.
pub struct SourceTokenizer {
    id: SourceId,
    tokens: Vec<Token>,
    pos: usize,
}

impl SourceTokenizer {
    pub fn new(id: SourceId, source: &str) -> Self {
        SourceTokenizer {
            id,
            tokens: lex_source(source),
            pos: 0,
        }
    }

    /// Tokenizer over an anonymous in-memory source
    pub fn from_source(source: &str) -> Self {
        Self::new(SourceId::memory(), source)
    }
}

impl Tokenizer for SourceTokenizer {
    fn reset(&mut self) {
        self.pos = 0;
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        Some(token)
    }

    fn source_id(&self) -> &SourceId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rill::token::core::TokenKind;

    #[test]
    fn test_drains_to_exhaustion() {
        let mut tokenizer = SourceTokenizer::from_source("a b");
        assert_eq!(tokenizer.next_token().unwrap().text, "a");
        assert_eq!(tokenizer.next_token().unwrap().text, "b");
        assert_eq!(tokenizer.next_token(), None);
        assert_eq!(tokenizer.next_token(), None);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut tokenizer = SourceTokenizer::from_source("x;");
        let first = tokenizer.next_token().unwrap();
        assert_eq!(first.kind, TokenKind::Name);
        while tokenizer.next_token().is_some() {}

        tokenizer.reset();
        assert_eq!(tokenizer.next_token().unwrap(), first);
    }

    #[test]
    fn test_source_identity() {
        let tokenizer = SourceTokenizer::new(SourceId::new("main.rill"), "");
        assert_eq!(tokenizer.source_id().as_str(), "main.rill");

        let anonymous = SourceTokenizer::from_source("");
        assert_eq!(anonymous.source_id().as_str(), "<memory>");
    }
}
