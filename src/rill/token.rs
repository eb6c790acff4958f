//! Core token types shared across the lexer, the analyzer, and tooling.
//!
//!     Two layers of tokens exist in the pipeline:
//!
//!     Lexical Tokens:
//!         Immutable units produced by the tokenizer: a kind, the source text
//!         they cover, and position metadata (byte span + line). See the
//!         [core](core) module for the complete kind list. Position metadata
//!         is monotonically non-decreasing across a lexed sequence.
//!
//!     Syntactic Tokens (tree nodes):
//!         Nodes placed into the output tree by the syntax analyzer. Each
//!         carries the metadata of the lexical tokens it was built from, so
//!         later phases can report errors precisely. A lexical token that no
//!         generator recognizes becomes a passthrough node unchanged. See the
//!         [tree](tree) module.

pub mod core;
pub mod formatting;
pub mod tree;

pub use self::core::{SourceId, Token, TokenKind, TokenMeta};
pub use self::formatting::{detokenize, tree_to_json};
pub use self::tree::{
    Body, CallExpr, ClassDecl, ConstDecl, ExprStmt, FunctionDecl, LiteralExpr, NameExpr, SynNode,
};
