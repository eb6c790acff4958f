//! Syntax analyzer - buffer, dispatch pass, and result tree
//!
//!     One analysis run has two steps. First the upstream tokenizer is reset
//!     and drained to exhaustion into an ordered buffer. Then a single
//!     forward pass walks the buffer with a shared cursor: each position is
//!     offered to the automatic generators in priority order, the first
//!     match contributes its (possibly multi-token) construct to the tree,
//!     and positions no generator recognizes pass through as raw tokens.
//!
//!     The top-level loop continues from the shared cursor, never from a
//!     separate index, so a token consumed inside a generator is never
//!     re-offered at the top level.
//!
//!     Generator errors are recorded, not fatal: the position where the
//!     construct started degrades to a passthrough token and the pass
//!     continues after whatever prefix the failing generator consumed.

use crate::rill::lexing::tokenizer::Tokenizer;
use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::syntax::generator::{dispatch, Generator, GeneratorId, GeneratorRegistry};
use crate::rill::token::core::{SourceId, Token};
use crate::rill::token::tree::SynNode;

/// Orchestrator for one source unit. Construction runs a full analysis;
/// [`reprocess`](SyntaxAnalyzer::reprocess) re-runs it after a tokenizer
/// change. Instances are independent and own their buffer and tree.
pub struct SyntaxAnalyzer<T: Tokenizer> {
    tokenizer: T,
    registry: GeneratorRegistry,
    tokens: Vec<Token>,
    tree: Vec<SynNode>,
    errors: Vec<SyntaxError>,
}

impl<T: Tokenizer> SyntaxAnalyzer<T> {
    /// Analyze with the standard rill generator registration
    pub fn new(tokenizer: T) -> Self {
        Self::with_registry(tokenizer, GeneratorRegistry::standard())
    }

    /// Analyze with a caller-assembled registry
    pub fn with_registry(tokenizer: T, registry: GeneratorRegistry) -> Self {
        let mut analyzer = SyntaxAnalyzer {
            tokenizer,
            registry,
            tokens: Vec::new(),
            tree: Vec::new(),
            errors: Vec::new(),
        };
        analyzer.process();
        analyzer
    }

    fn process(&mut self) {
        self.tokenizer.reset();
        self.tokens.clear();
        while let Some(token) = self.tokenizer.next_token() {
            self.tokens.push(token);
        }

        let mut tree = Vec::new();
        let mut errors = Vec::new();
        let mut cursor = TokenCursor::new(&self.tokens);
        while let Some(current) = cursor.advance() {
            match dispatch(&self.registry, current, &mut cursor) {
                Ok(Some(node)) => tree.push(node),
                Ok(None) => tree.push(SynNode::Lexical(current.clone())),
                Err(err) => {
                    errors.push(err);
                    tree.push(SynNode::Lexical(current.clone()));
                }
            }
        }

        self.tree = tree;
        self.errors = errors;
    }

    /// Re-run tokenize + dispatch. With an unchanged source this reproduces
    /// the previous tree exactly.
    pub fn reprocess(&mut self) {
        self.process();
    }

    /// The finished, ordered tree of syntactic tokens
    pub fn tree(&self) -> &[SynNode] {
        &self.tree
    }

    /// The buffered lexical sequence of the last run
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Grammar violations recorded during the last run, in source order
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Provenance of the analyzed source unit
    pub fn source_id(&self) -> &SourceId {
        self.tokenizer.source_id()
    }

    /// Look up a registered generator, for manual composition by extension
    /// code. Panics on an unregistered id, see the registry.
    pub fn generator(&self, id: GeneratorId) -> &dyn Generator {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }
}
