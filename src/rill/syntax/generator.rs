//! Generator contract and registry
//!
//!     A generator recognizes one grammar construct. Automatic generators
//!     are offered every top-level token by the dispatch pass in
//!     registration order; manual generators exist only to be looked up and
//!     invoked by other generators, for sub-grammars that have no standalone
//!     statement form.
//!
//!     The recognition contract:
//!
//!     - `Ok(Some(node))`: matched; the cursor has been advanced past every
//!       consumed token.
//!     - `Ok(None)`: declined; the cursor is exactly at its entry position.
//!       A declined match must be side-effect-free.
//!     - `Err(_)`: a grammar violation inside a construct the generator had
//!       already committed to. The cursor is left where the violation was
//!       found, so the top level skips the consumed prefix.
//!
//!     Forward progress on a successful match is a contract obligation on
//!     every generator; the engine does not enforce it.

use std::collections::HashMap;
use std::fmt;

use crate::rill::syntax::cursor::TokenCursor;
use crate::rill::syntax::error::SyntaxError;
use crate::rill::token::core::Token;
use crate::rill::token::tree::SynNode;

/// Stable identity tag for a generator, used for registry lookup.
///
/// The built-in generators expose constants; downstream crates can mint
/// their own tags for additional generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorId(pub &'static str);

impl GeneratorId {
    pub const CLASS: GeneratorId = GeneratorId("class");
    pub const CONST: GeneratorId = GeneratorId("const");
    pub const FUNCTION: GeneratorId = GeneratorId("function");
    pub const NAME: GeneratorId = GeneratorId("name");
    pub const EXPR: GeneratorId = GeneratorId("expr");
    pub const SIMPLE_EXPR: GeneratorId = GeneratorId("simple-expr");
    pub const CONST_EXPR: GeneratorId = GeneratorId("const-expr");
    pub const BODY: GeneratorId = GeneratorId("body");
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pluggable recognizer for one grammar construct
pub trait Generator {
    /// Identity tag for registry lookup
    fn id(&self) -> GeneratorId;

    /// Whether the main dispatch pass offers this generator every
    /// top-level token. Manual generators return false and are only
    /// reached via [`GeneratorRegistry::get`].
    fn is_automatic(&self) -> bool {
        true
    }

    /// Attempt to recognize a construct starting at `current`.
    ///
    /// `current` has already been consumed by the caller; `cursor` is
    /// positioned at the token after it. See the module docs for the
    /// result contract.
    fn generate(
        &self,
        current: &Token,
        cursor: &mut TokenCursor<'_>,
        registry: &GeneratorRegistry,
    ) -> Result<Option<SynNode>, SyntaxError>;
}

/// Insertion-ordered collection of generators plus an identity index.
///
/// Registration order defines priority among automatic generators (first
/// match wins); the relative order of manual generators is irrelevant.
pub struct GeneratorRegistry {
    ordered: Vec<Box<dyn Generator>>,
    index: HashMap<GeneratorId, usize>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        GeneratorRegistry {
            ordered: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registry with the standard rill generators, most-specific-first:
    /// declarations, then names, then the catch-all expression generator.
    pub fn standard() -> Self {
        use crate::rill::syntax::generators::{
            BodyGenerator, ClassGenerator, ConstExprGenerator, ConstGenerator, ExprGenerator,
            FunctionGenerator, NameGenerator, SimpleExprGenerator,
        };

        let mut registry = Self::new();
        registry.register(Box::new(ClassGenerator));
        registry.register(Box::new(ConstGenerator));
        registry.register(Box::new(FunctionGenerator));
        registry.register(Box::new(NameGenerator));

        // manual sub-grammars, reached only by lookup
        registry.register(Box::new(SimpleExprGenerator));
        registry.register(Box::new(ConstExprGenerator));
        registry.register(Box::new(BodyGenerator));

        registry.register(Box::new(ExprGenerator));
        registry
    }

    /// Register a generator. Duplicate ids are a wiring defect.
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        let id = generator.id();
        if self.index.insert(id, self.ordered.len()).is_some() {
            panic!("generator '{}' registered twice", id);
        }
        self.ordered.push(generator);
    }

    /// Look up a generator by identity.
    ///
    /// Panics if no generator with this id was registered: that is a defect
    /// in how the analyzer was assembled, never a property of the input.
    pub fn get(&self, id: GeneratorId) -> &dyn Generator {
        match self.index.get(&id) {
            Some(&idx) => self.ordered[idx].as_ref(),
            None => panic!("generator '{}' is not registered", id),
        }
    }

    pub fn has(&self, id: GeneratorId) -> bool {
        self.index.contains_key(&id)
    }

    /// Automatic generators in priority order
    pub fn automatic(&self) -> impl Iterator<Item = &dyn Generator> {
        self.ordered
            .iter()
            .map(|g| g.as_ref())
            .filter(|g| g.is_automatic())
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Offer `current` to every automatic generator in priority order.
///
/// Returns the first successful recognition, `Ok(None)` if all decline
/// (the caller appends the raw token), or the first generator error.
pub fn dispatch(
    registry: &GeneratorRegistry,
    current: &Token,
    cursor: &mut TokenCursor<'_>,
) -> Result<Option<SynNode>, SyntaxError> {
    for generator in registry.automatic() {
        if let Some(node) = generator.generate(current, cursor, registry)? {
            return Ok(Some(node));
        }
    }
    Ok(None)
}
