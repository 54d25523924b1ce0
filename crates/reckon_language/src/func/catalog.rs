//! The ordered function-signature catalog.
//!
//! The catalog is an explicit ordered list, never a name-keyed map:
//! multiple descriptors legitimately share a name distinguished only by
//! arity, and the first name+arity match in catalog order wins.

use reckon_foundation::{Error, Result, Value};

use super::{FuncDef, builtins};

/// An ordered collection of function descriptors.
///
/// Built once at startup from the declarative builtin table, optionally
/// extended with externally supplied descriptors which are consulted
/// before the builtins when enabled.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    externals: Vec<FuncDef>,
    builtins: Vec<FuncDef>,
}

impl Catalog {
    /// Builds a catalog holding the full builtin table.
    ///
    /// # Errors
    /// Returns the first definition error in the builtin table. Definition
    /// errors surface here, at build time, never during evaluation.
    pub fn with_builtins() -> Result<Self> {
        Ok(Self {
            externals: Vec::new(),
            builtins: builtins::defs()?,
        })
    }

    /// Builds a catalog from an explicit descriptor list (test seam).
    #[must_use]
    pub fn new(builtins: Vec<FuncDef>) -> Self {
        Self {
            externals: Vec::new(),
            builtins,
        }
    }

    /// Replaces the externally supplied extension set.
    #[must_use]
    pub fn with_externals(mut self, externals: Vec<FuncDef>) -> Self {
        self.externals = externals;
        self
    }

    /// Iterates descriptors in catalog order.
    ///
    /// With `allow_external`, extension descriptors come first; otherwise
    /// only builtins are visible.
    pub fn iter(&self, allow_external: bool) -> impl Iterator<Item = &FuncDef> {
        let externals = if allow_external {
            &self.externals[..]
        } else {
            &[]
        };
        externals.iter().chain(self.builtins.iter())
    }

    /// Finds the first descriptor matching the call name and argument count.
    ///
    /// # Errors
    /// Returns an unresolved-function error naming the call and argument
    /// count when nothing matches; the caller attaches the source position.
    pub fn find(&self, name: &str, args: &[Value], allow_external: bool) -> Result<&FuncDef> {
        self.iter(allow_external)
            .find(|def| def.matches(name, args))
            .ok_or_else(|| Error::unknown_function(name, args.len()))
    }
}
