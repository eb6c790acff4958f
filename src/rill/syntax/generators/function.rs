//! Function-declaration generator
//!
//! `fn name(param, param) { body }`
//!
//! Commits on the `fn` keyword. Parameters are bare names; the body is
//! parsed by the manual block-body generator, so statements inside nest
//! through the same dispatch as the top level.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{Generator, GeneratorId, GeneratorRegistry};
use crate::rill::syntax::generators::expect_kind;
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::{Body, FunctionDecl, SynNode};

pub struct FunctionGenerator;

impl Generator for FunctionGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::FUNCTION
    }

    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError> {
        if current.kind != TokenKind::Fn {
            return Ok(None);
        }

        let context = "function declaration";
        let name = expect_kind(cursor, TokenKind::Name, context, current)?;
        expect_kind(cursor, TokenKind::OpenParen, context, current)?;
        let params = parse_params(current, cursor)?;
        let body = parse_body(current, cursor, registry)?;

        let meta = current.meta.merged(&body.meta);
        Ok(Some(SynNode::FunctionDecl(FunctionDecl {
            name: name.text.clone(),
            params,
            body,
            meta,
        })))
    }
}

fn parse_params(start: &Token, cursor: &mut TokenCursor<'_>) -> Result<Vec<String>, SyntaxError> {
    let context = "function parameter list";
    let mut params = Vec::new();
    loop {
        let token = match cursor.current() {
            Some(token) => token,
            None => {
                return Err(SyntaxError::UnexpectedEnd {
                    context,
                    meta: start.meta.clone(),
                })
            }
        };

        match token.kind {
            TokenKind::CloseParen => {
                cursor.advance();
                return Ok(params);
            }
            TokenKind::Name => {
                params.push(token.text.clone());
                cursor.advance();
                if let Some(delim) = cursor.current() {
                    if delim.kind == TokenKind::Comma {
                        cursor.advance();
                    }
                }
            }
            _ => {
                return Err(SyntaxError::UnexpectedToken {
                    context,
                    found: token.clone(),
                });
            }
        }
    }
}

fn parse_body(
    start: &Token,
    cursor: &mut TokenCursor<'_>,
    registry: &GeneratorRegistry,
) -> Result<Body, SyntaxError> {
    let context = "function body";
    let brace = expect_kind(cursor, TokenKind::OpenBrace, context, start)?;
    match registry
        .get(GeneratorId::BODY)
        .generate(brace, cursor, registry)?
    {
        Some(SynNode::Body(body)) => Ok(body),
        _ => Err(SyntaxError::UnexpectedToken {
            context,
            found: brace.clone(),
        }),
    }
}
