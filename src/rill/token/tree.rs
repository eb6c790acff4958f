//! Syntactic tree node variants produced by the analyzer
//!
//!     The tree is a closed sum type rather than an open hierarchy: the node
//!     kinds of a grammar version are enumerable and fixed, and a closed enum
//!     makes the passthrough path (a lexical token no generator recognized)
//!     a natural default variant instead of a special case.
//!
//!     Ownership is strictly top-down. A call node owns its callee and its
//!     parameter nodes; nothing in the tree is shared or back-referenced.
//!     Nodes are never mutated once placed in the tree.

use serde::{Deserialize, Serialize};

use crate::rill::token::core::{Token, TokenMeta};

/// A node in the output tree: either a recognized construct or a passthrough
/// lexical token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SynNode {
    /// A lexical token no generator recognized, passed through unchanged
    Lexical(Token),
    Name(NameExpr),
    Literal(LiteralExpr),
    Call(CallExpr),
    ExprStmt(ExprStmt),
    ConstDecl(ConstDecl),
    FunctionDecl(FunctionDecl),
    ClassDecl(ClassDecl),
    Body(Body),
}

/// A resolved identifier used as a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameExpr {
    pub name: String,
    pub meta: TokenMeta,
}

/// A literal value (number or string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpr {
    pub token: Token,
}

/// An invocation: a callee plus an ordered parameter sequence.
///
/// The callee is itself a node so that addressable expressions beyond a bare
/// name can act as call targets. Parameter order is binding order; the
/// sequence may be empty. Each parameter is a statement-level expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<SynNode>,
    pub parameters: Vec<ExprStmt>,
    pub meta: TokenMeta,
}

/// An expression used in statement position; the boundary marker between
/// expression-level and statement-level grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub parts: Vec<SynNode>,
    pub meta: TokenMeta,
}

/// `const NAME = <constant expression> ;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: String,
    pub value: ExprStmt,
    pub meta: TokenMeta,
}

/// `fn name(params) { body }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Body,
    pub meta: TokenMeta,
}

/// `class Name { body }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub body: Body,
    pub meta: TokenMeta,
}

/// A brace-delimited block of nested nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub nodes: Vec<SynNode>,
    pub meta: TokenMeta,
}

impl SynNode {
    /// Position metadata of the lexical token(s) this node was built from
    pub fn meta(&self) -> &TokenMeta {
        match self {
            SynNode::Lexical(token) => &token.meta,
            SynNode::Name(name) => &name.meta,
            SynNode::Literal(literal) => &literal.token.meta,
            SynNode::Call(call) => &call.meta,
            SynNode::ExprStmt(stmt) => &stmt.meta,
            SynNode::ConstDecl(decl) => &decl.meta,
            SynNode::FunctionDecl(decl) => &decl.meta,
            SynNode::ClassDecl(decl) => &decl.meta,
            SynNode::Body(body) => &body.meta,
        }
    }

    /// Short tag for diagnostics and test output
    pub fn kind_name(&self) -> &'static str {
        match self {
            SynNode::Lexical(_) => "lexical",
            SynNode::Name(_) => "name",
            SynNode::Literal(_) => "literal",
            SynNode::Call(_) => "call",
            SynNode::ExprStmt(_) => "expr-stmt",
            SynNode::ConstDecl(_) => "const-decl",
            SynNode::FunctionDecl(_) => "function-decl",
            SynNode::ClassDecl(_) => "class-decl",
            SynNode::Body(_) => "body",
        }
    }

    // Structural accessors for tests and downstream phases. These panic on a
    // variant mismatch, so they belong in assertions, not in recognition
    // logic.

    pub fn expect_call(&self) -> &CallExpr {
        match self {
            SynNode::Call(call) => call,
            other => panic!("expected call node, got {}", other.kind_name()),
        }
    }

    pub fn expect_name(&self) -> &NameExpr {
        match self {
            SynNode::Name(name) => name,
            other => panic!("expected name node, got {}", other.kind_name()),
        }
    }

    pub fn expect_expr_stmt(&self) -> &ExprStmt {
        match self {
            SynNode::ExprStmt(stmt) => stmt,
            other => panic!("expected expr-stmt node, got {}", other.kind_name()),
        }
    }

    pub fn expect_const_decl(&self) -> &ConstDecl {
        match self {
            SynNode::ConstDecl(decl) => decl,
            other => panic!("expected const-decl node, got {}", other.kind_name()),
        }
    }

    pub fn expect_function_decl(&self) -> &FunctionDecl {
        match self {
            SynNode::FunctionDecl(decl) => decl,
            other => panic!("expected function-decl node, got {}", other.kind_name()),
        }
    }

    pub fn expect_class_decl(&self) -> &ClassDecl {
        match self {
            SynNode::ClassDecl(decl) => decl,
            other => panic!("expected class-decl node, got {}", other.kind_name()),
        }
    }

    pub fn expect_lexical(&self) -> &Token {
        match self {
            SynNode::Lexical(token) => token,
            other => panic!("expected passthrough token, got {}", other.kind_name()),
        }
    }
}

impl ExprStmt {
    /// Wrap a single node as a statement-level expression
    pub fn from_node(node: SynNode) -> Self {
        let meta = node.meta().clone();
        ExprStmt {
            parts: vec![node],
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rill::token::core::TokenKind;

    fn tok(kind: TokenKind, text: &str, start: usize) -> Token {
        Token::new(kind, text, TokenMeta::new(start..start + text.len(), 1))
    }

    #[test]
    fn test_meta_accessor_covers_variants() {
        let token = tok(TokenKind::Number, "42", 3);
        let node = SynNode::Literal(LiteralExpr {
            token: token.clone(),
        });
        assert_eq!(node.meta(), &token.meta);

        let passthrough = SynNode::Lexical(token.clone());
        assert_eq!(passthrough.meta(), &token.meta);
    }

    #[test]
    fn test_expr_stmt_from_node() {
        let name = SynNode::Name(NameExpr {
            name: "x".to_string(),
            meta: TokenMeta::new(0..1, 1),
        });
        let stmt = ExprStmt::from_node(name.clone());
        assert_eq!(stmt.parts, vec![name]);
        assert_eq!(stmt.meta, TokenMeta::new(0..1, 1));
    }

    #[test]
    #[should_panic(expected = "expected call node")]
    fn test_expect_call_panics_on_mismatch() {
        let node = SynNode::Lexical(tok(TokenKind::Semicolon, ";", 0));
        node.expect_call();
    }
}
