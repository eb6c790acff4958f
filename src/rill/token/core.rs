//! Lexical token definitions for the rill language
//!
//! The token kinds are defined with the logos derive macro; the lexer skips
//! whitespace and line comments, so every produced token is grammar-relevant.
//! Keywords are plain `#[token]` patterns and win over the identifier regex
//! by logos priority.

use logos::Logos;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

/// All lexical token kinds in the rill grammar
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum TokenKind {
    // Keywords
    #[token("class")]
    Class,
    #[token("const")]
    Const,
    #[token("fn")]
    Fn,

    // Delimiters
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // Operators
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token(".")]
    Dot,

    // Identifiers and literals
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,
}

/// Canonical source text for kinds that have exactly one spelling.
/// `Name`, `Number`, and `Str` carry arbitrary text and are absent here.
static FIXED_LEXEMES: Lazy<HashMap<TokenKind, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (TokenKind::Class, "class"),
        (TokenKind::Const, "const"),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenBrace, "{"),
        (TokenKind::CloseBrace, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Star, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::Dot, "."),
    ])
});

impl TokenKind {
    /// The canonical spelling for single-spelling kinds, `None` for
    /// payload-carrying kinds (names, literals).
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        FIXED_LEXEMES.get(&self).copied()
    }

    /// Check if this kind is a declaration keyword
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Class | TokenKind::Const | TokenKind::Fn)
    }

    /// Check if this kind is a binary operator
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Dot
        )
    }

    /// Check if this kind ends a statement-level expression
    pub fn is_expression_terminator(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::CloseParen
                | TokenKind::CloseBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_lexeme() {
            Some(lexeme) => write!(f, "{}", lexeme),
            None => write!(f, "{:?}", self),
        }
    }
}

/// Source-position metadata attached to every token.
///
/// `span` is the byte range in the source, `line` is 1-based. Composite tree
/// nodes carry a merged span covering everything they consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMeta {
    pub span: Range<usize>,
    pub line: u32,
}

impl TokenMeta {
    pub fn new(span: Range<usize>, line: u32) -> Self {
        TokenMeta { span, line }
    }

    /// Merge two metas into one covering both, keeping the first line
    pub fn merged(&self, last: &TokenMeta) -> TokenMeta {
        TokenMeta {
            span: self.span.start..last.span.end.max(self.span.end),
            line: self.line,
        }
    }
}

/// Identity of the source unit being analyzed, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        SourceId(id.into())
    }

    /// Identity used for sources not backed by a file
    pub fn memory() -> Self {
        SourceId("<memory>".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lexical token: kind, covered source text, and position metadata.
/// Immutable once produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub meta: TokenMeta,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, meta: TokenMeta) -> Self {
        Token {
            kind,
            text: text.into(),
            meta,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lexemes() {
        assert_eq!(TokenKind::OpenParen.fixed_lexeme(), Some("("));
        assert_eq!(TokenKind::Fn.fixed_lexeme(), Some("fn"));
        assert_eq!(TokenKind::Name.fixed_lexeme(), None);
        assert_eq!(TokenKind::Number.fixed_lexeme(), None);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::Class.is_keyword());
        assert!(!TokenKind::Name.is_keyword());

        assert!(TokenKind::Plus.is_operator());
        assert!(TokenKind::Dot.is_operator());
        assert!(!TokenKind::Comma.is_operator());

        assert!(TokenKind::Semicolon.is_expression_terminator());
        assert!(TokenKind::CloseParen.is_expression_terminator());
        assert!(!TokenKind::OpenParen.is_expression_terminator());
    }

    #[test]
    fn test_meta_merged() {
        let first = TokenMeta::new(3..6, 1);
        let last = TokenMeta::new(10..14, 2);
        let merged = first.merged(&last);
        assert_eq!(merged.span, 3..14);
        assert_eq!(merged.line, 1);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Semicolon.to_string(), ";");
        assert_eq!(TokenKind::Const.to_string(), "const");
    }
}
