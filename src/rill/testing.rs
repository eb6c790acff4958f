//! Testing utilities shared by unit and integration tests
//!
//!     Tests build token streams through the factories here instead of
//!     hand-writing `Token` literals: the factories fill in canonical
//!     lexemes and consistent metadata, so a change to the token model is a
//!     one-place fix. Tree assertions are explicit (the `expect_*`
//!     accessors on nodes), never opaque comparisons of dumped output.
//!
//!     [factories::BufferTokenizer] feeds a synthetic token sequence through
//!     the real `Tokenizer` trait, which is how the engine tests exercise
//!     the analyzer without involving the lexer.

pub mod factories;

pub use factories::{analyze_source, analyze_tokens, BufferTokenizer};
