//! Factories for tokens, token streams, and analyzers

use crate::rill::lexing::tokenizer::{SourceTokenizer, Tokenizer};
use crate::rill::syntax::analyzer::SyntaxAnalyzer;
use crate::rill::token::core::{SourceId, Token, TokenKind, TokenMeta};

/// Make position metadata on line 1
pub fn meta(start: usize, end: usize) -> TokenMeta {
    TokenMeta::new(start..end, 1)
}

/// Make a token of a single-spelling kind (punctuation, keyword) at `start`.
/// Panics for payload-carrying kinds; use [`name`] / [`number`] / [`string`].
pub fn tok(kind: TokenKind, start: usize) -> Token {
    let text = kind
        .fixed_lexeme()
        .unwrap_or_else(|| panic!("kind {:?} needs explicit text", kind));
    Token::new(kind, text, meta(start, start + text.len()))
}

/// Make a name token
pub fn name(text: &str, start: usize) -> Token {
    Token::new(TokenKind::Name, text, meta(start, start + text.len()))
}

/// Make a number token
pub fn number(text: &str, start: usize) -> Token {
    Token::new(TokenKind::Number, text, meta(start, start + text.len()))
}

/// Make a string-literal token; `text` includes the quotes
pub fn string(text: &str, start: usize) -> Token {
    Token::new(TokenKind::Str, text, meta(start, start + text.len()))
}

/// Tokenizer over a pre-built token sequence, for synthetic streams
pub struct BufferTokenizer {
    id: SourceId,
    tokens: Vec<Token>,
    pos: usize,
}

impl BufferTokenizer {
    pub fn new(tokens: Vec<Token>) -> Self {
        BufferTokenizer {
            id: SourceId::memory(),
            tokens,
            pos: 0,
        }
    }
}

impl Tokenizer for BufferTokenizer {
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

/// Analyze a synthetic token sequence with the standard registry
pub fn analyze_tokens(tokens: Vec<Token>) -> SyntaxAnalyzer<BufferTokenizer> {
    SyntaxAnalyzer::new(BufferTokenizer::new(tokens))
}

/// Analyze source text with the standard registry
pub fn analyze_source(source: &str) -> SyntaxAnalyzer<SourceTokenizer> {
    SyntaxAnalyzer::new(SourceTokenizer::from_source(source))
}
