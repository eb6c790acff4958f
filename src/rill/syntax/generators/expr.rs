//! Catch-all expression-statement generator
//!
//! Registered last among the automatic generators. Picks up statement
//! expressions led by a literal (name-led expressions are claimed by the
//! name generator earlier in the chain) and consumes an optional trailing
//! `;`. Everything else declines, which is what makes raw passthrough the
//! default for stray punctuation.

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{Generator, GeneratorId, GeneratorRegistry};
use crate::rill::token::core::{Token, TokenKind};
use crate::rill::token::tree::SynNode;

pub struct ExprGenerator;

impl Generator for ExprGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::EXPR
    }

    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError> {
        if !matches!(current.kind, TokenKind::Number | TokenKind::Str) {
            return Ok(None);
        }

        let stmt = match registry
            .get(GeneratorId::SIMPLE_EXPR)
            .generate(current, cursor, registry)?
        {
            Some(SynNode::ExprStmt(stmt)) => stmt,
            other => return Ok(other),
        };

        // a trailing `;` belongs to the statement
        let mut stmt = stmt;
        if let Some(semi) = cursor.current() {
            if semi.kind == TokenKind::Semicolon {
                cursor.advance();
                stmt.meta = stmt.meta.merged(&semi.meta);
            }
        }

        Ok(Some(SynNode::ExprStmt(stmt)))
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
        let result = ExprGenerator.generate(current, &mut cursor, &registry);
        (result, cursor.position())
    }

    #[test]
    fn test_literal_statement_consumes_terminator() {
        let (result, pos) = run("1 + 2;");
        let stmt = result.unwrap().unwrap();
        assert_eq!(stmt.expect_expr_stmt().parts.len(), 3);
        assert_eq!(stmt.meta().span, 0..6);
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_string_statement() {
        let (result, _) = run(r#""banner";"#);
        let stmt = result.unwrap().unwrap();
        assert_eq!(stmt.expect_expr_stmt().parts.len(), 1);
    }

    #[test]
    fn test_declines_on_punctuation() {
        let (result, pos) = run("} x");
        assert_eq!(result.unwrap(), None);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_declines_on_name() {
        // name-led expressions belong to the name generator
        let (result, pos) = run("foo + 1");
        assert_eq!(result.unwrap(), None);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_without_trailing_terminator() {
        let (result, pos) = run("3 * 4");
        let stmt = result.unwrap().unwrap();
        assert_eq!(stmt.expect_expr_stmt().parts.len(), 3);
        assert_eq!(pos, 3);
    }
}
