//! Syntax analysis engine
//!
//!     The engine is a chain-of-responsibility dispatcher. The analyzer
//!     buffers the full lexical token sequence, then walks it once with a
//!     shared [cursor](cursor::TokenCursor). At every top-level position the
//!     current token is offered to each automatic generator in registration
//!     order; the first one to recognize a construct contributes a tree node
//!     and may have consumed arbitrarily many further tokens through the
//!     cursor. If every automatic generator declines, the raw token passes
//!     through unchanged.
//!
//!     Generators invoke one another recursively through the
//!     [registry](generator::GeneratorRegistry): sub-grammars (simple
//!     expressions, constant expressions, block bodies) are registered as
//!     manual generators that the main loop never offers tokens to, reached
//!     only by explicit lookup.
//!
//!     Recognition failure is locally silent: an unrecognized position
//!     degrades to a passthrough token and malformedness surfaces in a later
//!     phase. Requesting an unregistered generator, by contrast, is a wiring
//!     defect and panics immediately.

pub mod analyzer;
pub mod cursor;
pub mod error;
pub mod generator;
pub mod generators;

pub use analyzer::SyntaxAnalyzer;
pub use cursor::TokenCursor;
pub use error::SyntaxError;
pub use generator::{dispatch, Generator, GeneratorId, GeneratorRegistry};
