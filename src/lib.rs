//! # rill
//!
//! The syntax-analysis stage of the rill language front end.
//!
//! The crate turns a flat stream of lexical tokens into a structured token
//! tree. Recognition is done by a chain of pluggable "generators", each
//! responsible for one grammar construct, dispatched over a shared cursor.
//! See the [syntax module](rill::syntax) for the engine and the
//! [lexing module](rill::lexing) for the upstream tokenizer interface.
//!
//! ## Testing
//!
//! Tests use the factories in the [testing module](rill::testing) to build
//! synthetic token streams, and assert tree structure explicitly.

pub mod rill;
