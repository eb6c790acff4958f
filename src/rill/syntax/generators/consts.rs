//! Const-declaration generator
//!
//! `const NAME = <constant expression> ;`
//!
//! Commits on the `const` keyword; everything after it must follow the
//! declaration shape, and deviations are violations rather than declines.
//! The value is parsed by the manual constant-expression generator.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{Generator, GeneratorId, GeneratorRegistry};
use crate::rill::syntax::generators::expect_kind;
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::{ConstDecl, SynNode};

pub struct ConstGenerator;

impl Generator for ConstGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::CONST
    }

    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError> {
        if current.kind != TokenKind::Const {
            return Ok(None);
        }

        let context = "const declaration";
        let name = expect_kind(cursor, TokenKind::Name, context, current)?;
        expect_kind(cursor, TokenKind::Assign, context, current)?;

        let first = match cursor.current() {
            Some(token) => {
                cursor.advance();
                token
            }
            None => {
                return Err(SyntaxError::UnexpectedEnd {
                    context,
                    meta: current.meta.clone(),
                })
            }
        };
        let value = match registry
            .get(GeneratorId::CONST_EXPR)
            .generate(first, cursor, registry)?
        {
            Some(SynNode::ExprStmt(stmt)) => stmt,
            _ => {
                return Err(SyntaxError::UnexpectedToken {
                    context,
                    found: first.clone(),
                })
            }
        };

        let semi = expect_kind(cursor, TokenKind::Semicolon, context, current)?;

        Ok(Some(SynNode::ConstDecl(ConstDecl {
            name: name.text.clone(),
            value,
            meta: current.meta.merged(&semi.meta),
        })))
    }
}
