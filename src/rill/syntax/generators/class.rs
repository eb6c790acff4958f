//! Class-declaration generator
//!
//! `class Name { body }` is the most specific automatic generator, first in
//! the standard registration. The body reuses the manual block-body
//! generator, so member declarations dispatch like any other block.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{Generator, GeneratorId, GeneratorRegistry};
use crate::rill::syntax::generators::expect_kind;
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::{ClassDecl, SynNode};

pub struct ClassGenerator;

impl Generator for ClassGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::CLASS
    }

    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError> {
        if current.kind != TokenKind::Class {
            return Ok(None);
        }

        let context = "class declaration";
        let name = expect_kind(cursor, TokenKind::Name, context, current)?;
        let brace = expect_kind(cursor, TokenKind::OpenBrace, context, current)?;
        let body = match registry
            .get(GeneratorId::BODY)
            .generate(brace, cursor, registry)?
        {
            Some(SynNode::Body(body)) => body,
            _ => {
                return Err(SyntaxError::UnexpectedToken {
                    context,
                    found: brace.clone(),
                })
            }
        };

        let meta = current.meta.merged(&body.meta);
        Ok(Some(SynNode::ClassDecl(ClassDecl {
            name: name.text.clone(),
            body,
            meta,
        })))
    }
}
