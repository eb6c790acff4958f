//! Lexer
//!
//! This module produces the flat lexical token sequence the syntax analyzer
//! consumes.
//!
//! Structure:
//!     Raw tokenization is done by the logos lexer over [TokenKind]
//!     patterns; whitespace and line comments are skipped at that level, so
//!     every emitted token is grammar-relevant. Line numbers are computed
//!     while draining the logos lexer, and the resulting [Token]s carry byte
//!     spans plus 1-based lines.
//!
//!     The analyzer does not depend on the concrete lexer: it consumes the
//!     [Tokenizer] trait (`reset` / `next_token` / `source_id`), so tests and
//!     embedders can feed synthetic token streams. [SourceTokenizer] is the
//!     standard implementation over a source string.

pub mod tokenizer;
pub mod tokens;

pub use tokenizer::{SourceTokenizer, Tokenizer};
pub use tokens::lex_source;
