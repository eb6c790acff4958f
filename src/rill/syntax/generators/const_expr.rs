//! Constant-expression generator (manual)
//!
//! Parses the value side of a `const` declaration: literals, references to
//! other constants by name, and operators between them. Calls are not
//! constant, so names here never resolve through the name generator; a `(`
//! after a name is a violation. Stops at the same terminator set as the
//! simple-expression generator.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{Generator, GeneratorId, GeneratorRegistry};
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::{ExprStmt, LiteralExpr, NameExpr, SynNode};

pub struct ConstExprGenerator;

impl Generator for ConstExprGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::CONST_EXPR
    }

    fn is_automatic(&self) -> bool {
        false
    }

    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        _registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError> {
        if current.kind.is_expression_terminator() {
            return Ok(None);
        }

        let mut parts = Vec::new();
        let mut token = current;
        loop {
            let node = match token.kind {
                TokenKind::Name => {
                    let called = cursor
                        .current()
                        .map(|t| t.kind == TokenKind::OpenParen)
                        .unwrap_or(false);
                    if called {
                        return Err(SyntaxError::UnexpectedToken {
                            context: "constant expression",
                            found: token.clone(),
                        });
                    }
                    SynNode::Name(NameExpr {
                        name: token.text.clone(),
                        meta: token.meta.clone(),
                    })
                }
                TokenKind::Number | TokenKind::Str => SynNode::Literal(LiteralExpr {
                    token: token.clone(),
                }),
                kind if kind.is_operator() => SynNode::Lexical(token.clone()),
                _ => {
                    return Err(SyntaxError::UnexpectedToken {
                        context: "constant expression",
                        found: token.clone(),
                    });
                }
            };
            parts.push(node);

            match cursor.current() {
                Some(next) if !next.kind.is_expression_terminator() => {
                    cursor.advance();
                    token = next;
                }
                _ => break,
            }
        }

        let meta = match parts.last() {
            Some(last) => current.meta.merged(last.meta()),
            None => current.meta.clone(),
        };
        Ok(Some(SynNode::ExprStmt(ExprStmt { parts, meta })))
    }
}
