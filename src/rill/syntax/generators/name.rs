//! Name and call-expression generator
//!
//! Recognizes a bare name, or a call expression when the name is directly
//! followed by `(`. One token of lookahead decides between the two, so the
//! generator never consumes anything before the decision is certain.
//!
//! Call arguments are parsed by the manual simple-expression generator, one
//! statement-level expression per argument slot, which makes nested calls
//! like `foo(bar(x), y)` compose through the registry.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{Generator, GeneratorId, GeneratorRegistry};
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::{CallExpr, ExprStmt, NameExpr, SynNode};

pub struct NameGenerator;

impl Generator for NameGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::NAME
    }

    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError> {
        if current.kind != TokenKind::Name {
            return Ok(None);
        }

        let is_call = cursor
            .current()
            .map(|t| t.kind == TokenKind::OpenParen)
            .unwrap_or(false);
        if !is_call {
            return Ok(Some(SynNode::Name(NameExpr {
                name: current.text.clone(),
                meta: current.meta.clone(),
            })));
        }

        cursor.advance(); // the `(`
        let callee = SynNode::Name(NameExpr {
            name: current.text.clone(),
            meta: current.meta.clone(),
        });
        let (parameters, close) = parse_arguments(current, cursor, registry)?;

        Ok(Some(SynNode::Call(CallExpr {
            callee: Box::new(callee),
            parameters,
            meta: current.meta.merged(&close.meta),
        })))
    }
}

/// Parse the argument list after the opening `(`, returning the parameters
/// and the closing `)` token.
fn parse_arguments<'a>(
    start: &Token,
    cursor: &mut TokenCursor<'a>,
    registry: &GeneratorRegistry,
) -> Result<(Vec<ExprStmt>, &'a Token), SyntaxError> {
    let simple_expr = registry.get(GeneratorId::SIMPLE_EXPR);
    let mut parameters = Vec::new();

    loop {
        let token = match cursor.current() {
            Some(token) => token,
            None => {
                return Err(SyntaxError::UnexpectedEnd {
                    context: "call argument list",
                    meta: start.meta.clone(),
                })
            }
        };

        match token.kind {
            TokenKind::CloseParen => {
                cursor.advance();
                return Ok((parameters, token));
            }
            // an argument slot must hold an expression
            TokenKind::Comma | TokenKind::Semicolon | TokenKind::CloseBrace => {
                return Err(SyntaxError::UnexpectedToken {
                    context: "call argument list",
                    found: token.clone(),
                });
            }
            _ => {
                cursor.advance();
                match simple_expr.generate(token, cursor, registry)? {
                    Some(SynNode::ExprStmt(stmt)) => parameters.push(stmt),
                    Some(node) => parameters.push(ExprStmt::from_node(node)),
                    None => {
                        return Err(SyntaxError::UnexpectedToken {
                            context: "call argument",
                            found: token.clone(),
                        });
                    }
                }

                // between arguments: a comma, or the closing paren next turn
                match cursor.current() {
                    Some(delim) if delim.kind == TokenKind::Comma => {
                        cursor.advance();
                    }
                    Some(delim) if delim.kind == TokenKind::CloseParen => {}
                    Some(delim) => {
                        return Err(SyntaxError::UnexpectedToken {
                            context: "call argument list",
                            found: delim.clone(),
                        });
                    }
                    None => {}
                }
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
        let result = NameGenerator.generate(current, &mut cursor, &registry);
        (result, cursor.position())
    }

    #[test]
    fn test_bare_name() {
        let (result, pos) = run("foo bar");
        let node = result.unwrap().unwrap();
        assert_eq!(node.expect_name().name, "foo");
        // only `foo` consumed
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_declines_non_name_without_consumption() {
        let (result, pos) = run("42 foo");
        assert_eq!(result.unwrap(), None);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_empty_call() {
        let (result, pos) = run("foo()");
        let node = result.unwrap().unwrap();
        let call = node.expect_call();
        assert_eq!(call.callee.expect_name().name, "foo");
        assert!(call.parameters.is_empty());
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_call_with_arguments_in_order() {
        let (result, _) = run("foo(a, b)");
        let node = result.unwrap().unwrap();
        let call = node.expect_call();
        assert_eq!(call.parameters.len(), 2);
        assert_eq!(call.parameters[0].parts[0].expect_name().name, "a");
        assert_eq!(call.parameters[1].parts[0].expect_name().name, "b");
    }

    #[test]
    fn test_nested_call_argument() {
        let (result, _) = run("foo(bar(x), y)");
        let node = result.unwrap().unwrap();
        let call = node.expect_call();
        assert_eq!(call.parameters.len(), 2);

        let inner = call.parameters[0].parts[0].expect_call();
        assert_eq!(inner.callee.expect_name().name, "bar");
        assert_eq!(inner.parameters.len(), 1);
        assert_eq!(call.parameters[1].parts[0].expect_name().name, "y");
    }

    #[test]
    fn test_call_meta_spans_whole_construct() {
        let (result, _) = run("foo(a, b)");
        let node = result.unwrap().unwrap();
        assert_eq!(node.meta().span, 0..9);
        assert_eq!(node.meta().line, 1);
    }

    #[test]
    fn test_unterminated_argument_list() {
        let (result, _) = run("foo(a, b");
        let err = result.unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_leading_comma_is_an_error() {
        let (result, _) = run("foo(, a)");
        let err = result.unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedToken { .. }));
    }
}
