//! Concrete construct generators for the rill grammar
//!
//!     Automatic generators, in standard registration order:
//!
//!     class     `class Name { ... }`
//!     const     `const NAME = <constant expression> ;`
//!     function  `fn name(params) { ... }`
//!     name      bare names and call expressions `callee(args)`
//!     expr      catch-all: literal-led statement expressions
//!
//!     Manual generators, reached only by registry lookup:
//!
//!     simple-expr  one statement-level expression, up to a terminator
//!     const-expr   constant expression (literals, names, operators)
//!     body         brace-delimited block of nested statements
//!
//!     Every generator observes the decline contract: it commits only once
//!     its decision token is certain (a keyword, a name followed by `(`)
//!     and restores nothing afterwards only because nothing was consumed
//!     before that point. Past the commit point a malformed construct is a
//!     [SyntaxError](crate::rill::syntax::error::SyntaxError), and the
//!     cursor stays where the violation was found.

pub mod body;
pub mod class;
pub mod const_expr;
pub mod consts;
pub mod expr;
pub mod function;
pub mod name;
pub mod simple_expr;

pub use body::BodyGenerator;
pub use class::ClassGenerator;
pub use const_expr::ConstExprGenerator;
pub use consts::ConstGenerator;
pub use expr::ExprGenerator;
pub use function::FunctionGenerator;
pub use name::NameGenerator;
pub use simple_expr::SimpleExprGenerator;

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::token::core::{Token, TokenKind};

/// Consume the next token if it has the expected kind, or report a
/// violation in `context`. `at` anchors end-of-input errors to the
/// construct's starting token.
pub(crate) fn expect_kind<'a>(
    cursor: &mut TokenCursor<'a>,
    kind: TokenKind,
    context: &'static str,
    at: &Token,
) -> Result<&'a Token, SyntaxError> {
    match cursor.current() {
        Some(token) if token.kind == kind => {
            cursor.advance();
            Ok(token)
        }
        Some(token) => Err(SyntaxError::UnexpectedToken {
            context,
            found: token.clone(),
        }),
        None => Err(SyntaxError::UnexpectedEnd {
            context,
            meta: at.meta.clone(),
        }),
    }
}
