//! Simple-expression generator (manual)
//!
//! Parses one statement-level expression starting at the current token and
//! running up to, but not including, the nearest terminator (`,`, `;`, `)`,
//! `}`, or end of input). The expression is kept as a flat part sequence:
//! names resolve through the name generator (so calls nest), literals become
//! literal nodes, and operator tokens stay lexical for a later phase to
//! shape. Declines without consumption when offered a terminator.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{Generator, GeneratorId, GeneratorRegistry};
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::{ExprStmt, LiteralExpr, SynNode};

pub struct SimpleExprGenerator;

impl Generator for SimpleExprGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::SIMPLE_EXPR
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
        if current.kind.is_expression_terminator() {
            return Ok(None);
        }

        let mut parts = Vec::new();
        let mut token = current;
        loop {
            let node = match token.kind {
                TokenKind::Name => registry
                    .get(GeneratorId::NAME)
                    .generate(token, cursor, registry)?
                    .unwrap_or_else(|| SynNode::Lexical(token.clone())),
                TokenKind::Number | TokenKind::Str => SynNode::Literal(LiteralExpr {
                    token: token.clone(),
                }),
                _ => SynNode::Lexical(token.clone()),
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
