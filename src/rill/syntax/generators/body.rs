//! Block-body generator (manual)
//!
//! Parses a brace-delimited block. Inside the braces every token goes
//! through the same automatic dispatch as the top level, so block bodies
//! nest declarations, calls, and passthrough tokens exactly like the root
//! of the tree. Declines unless offered an opening brace; an unterminated
//! block is a violation anchored at that brace.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{dispatch, Generator, GeneratorId, GeneratorRegistry};
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::{Body, SynNode};

pub struct BodyGenerator;

impl Generator for BodyGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::BODY
    }

    fn is_automatic(&self) -> bool {
        false
    }

    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError> {
        if current.kind != TokenKind::OpenBrace {
            return Ok(None);
        }

        let mut nodes = Vec::new();
        loop {
            let token = match cursor.current() {
                Some(token) => token,
                None => {
                    return Err(SyntaxError::UnexpectedEnd {
                        context: "block body",
                        meta: current.meta.clone(),
                    })
                }
            };

            if token.kind == TokenKind::CloseBrace {
                cursor.advance();
                return Ok(Some(SynNode::Body(Body {
                    nodes,
                    meta: current.meta.merged(&token.meta),
                })));
            }

            cursor.advance();
            match dispatch(registry, token, cursor)? {
                Some(node) => nodes.push(node),
                None => nodes.push(SynNode::Lexical(token.clone())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rill::lexing::lex_source;

    fn run(source: &str) -> (Result<Option<SynNode>, SyntaxError>, usize) {
        let tokens = lex_source(source);
        let registry = GeneratorRegistry::standard();
        let mut cursor = TokenCursor::new(&tokens);
        let current = cursor.advance().expect("source must not be empty");
        let result = BodyGenerator.generate(current, &mut cursor, &registry);
        (result, cursor.position())
    }

    #[test]
    fn test_empty_body() {
        let (result, pos) = run("{}");
        let node = result.unwrap().unwrap();
        match node {
            SynNode::Body(body) => {
                assert!(body.nodes.is_empty());
                assert_eq!(body.meta.span, 0..2);
            }
            other => panic!("expected body, got {}", other.kind_name()),
        }
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_nested_statements_dispatch_like_top_level() {
        let (result, _) = run("{ foo(x); const y = 1; }");
        let node = result.unwrap().unwrap();
        let body = match node {
            SynNode::Body(body) => body,
            other => panic!("expected body, got {}", other.kind_name()),
        };
        // call, `;`, const decl
        assert_eq!(body.nodes.len(), 3);
        assert_eq!(body.nodes[0].expect_call().callee.expect_name().name, "foo");
        assert_eq!(body.nodes[1].expect_lexical().kind, TokenKind::Semicolon);
        assert_eq!(body.nodes[2].expect_const_decl().name, "y");
    }

    #[test]
    fn test_declines_without_brace() {
        let (result, pos) = run("foo {");
        assert_eq!(result.unwrap(), None);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_unterminated_body() {
        let (result, _) = run("{ foo(x);");
        assert!(matches!(
            result.unwrap_err(),
            SyntaxError::UnexpectedEnd { context: "block body", .. }
        ));
    }

    #[test]
    fn test_nested_bodies_via_class() {
        let (result, _) = run("{ class Inner { } }");
        let node = result.unwrap().unwrap();
        let body = match node {
            SynNode::Body(body) => body,
            other => panic!("expected body, got {}", other.kind_name()),
        };
        assert_eq!(body.nodes.len(), 1);
        assert_eq!(body.nodes[0].expect_class_decl().name, "Inner");
    }
}
