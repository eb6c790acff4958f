//! Base tokenization using the logos lexer
//!
//! This is the entry point where source strings become token sequences.
//! Transformation or analysis code should operate on the produced sequence,
//! not call logos directly.

use logos::Logos;

use crate::rill::token::core::{Token, TokenKind, TokenMeta};

/// Tokenize source text into lexical tokens with position metadata.
///
/// Spans come from `lexer.span()`; lines are counted from newlines in the
/// skipped-over source. Unrecognized input (lex errors) is dropped, matching
/// the degrade-rather-than-abort policy of the analysis pass.
pub fn lex_source(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    let mut line: u32 = 1;
    let mut scanned = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        line += source[scanned..span.start].matches('\n').count() as u32;
        scanned = span.start;

        if let Ok(kind) = result {
            tokens.push(Token::new(
                kind,
                lexer.slice(),
                TokenMeta::new(span, line),
            ));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenizes_call() {
        let tokens = lex_source("foo(a, b)");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Name,
                TokenKind::OpenParen,
                TokenKind::Name,
                TokenKind::Comma,
                TokenKind::Name,
                TokenKind::CloseParen,
            ]
        );
        assert_eq!(tokens[0].text, "foo");
        assert_eq!(tokens[0].meta.span, 0..3);
        assert_eq!(tokens[2].text, "a");
        assert_eq!(tokens[4].text, "b");
    }

    #[test]
    fn test_keywords_win_over_names() {
        let tokens = lex_source("const fn class classes");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Const,
                TokenKind::Fn,
                TokenKind::Class,
                TokenKind::Name,
            ]
        );
        // "classes" is an ordinary name, not the keyword plus a suffix
        assert_eq!(tokens[3].text, "classes");
    }

    #[test]
    fn test_line_tracking() {
        let tokens = lex_source("a\nb\n\nc");
        assert_eq!(tokens[0].meta.line, 1);
        assert_eq!(tokens[1].meta.line, 2);
        assert_eq!(tokens[2].meta.line, 4);
    }

    #[test]
    fn test_comments_and_whitespace_skipped() {
        let tokens = lex_source("x // trailing comment\ny");
        assert_eq!(kinds(&tokens), vec![TokenKind::Name, TokenKind::Name]);
        assert_eq!(tokens[1].meta.line, 2);
    }

    #[test]
    fn test_string_literals() {
        let tokens = lex_source(r#"say("hi there")"#);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Name,
                TokenKind::OpenParen,
                TokenKind::Str,
                TokenKind::CloseParen,
            ]
        );
        assert_eq!(tokens[2].text, r#""hi there""#);
    }

    #[test]
    fn test_meta_monotonic() {
        let tokens = lex_source("const x = 1;\nfn main() { x }\n");
        let mut last_start = 0;
        for token in &tokens {
            assert!(token.meta.span.start >= last_start);
            last_start = token.meta.span.start;
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lex_source(""), vec![]);
    }
}
