//! Main module for the rill syntax-analysis library
//!
//!     The pipeline has two stages. The lexing stage turns source text into a
//!     flat sequence of lexical tokens. The syntax stage buffers that sequence
//!     and runs a single forward dispatch pass over it: every top-level token
//!     is offered to an ordered chain of construct generators, and the first
//!     generator that recognizes a construct contributes a tree node in place
//!     of the raw tokens it consumed. Tokens no generator recognizes pass
//!     through unchanged.
//!
//! Module layout:
//!
//!     token    Lexical token model and the syntactic tree node variants
//!     lexing   The logos-based tokenizer and the Tokenizer trait
//!     syntax   Cursor, generator contract, registry, and the analyzer
//!     testing  Factories and helpers shared by unit and integration tests

pub mod lexing;
pub mod syntax;
pub mod testing;
pub mod token;
