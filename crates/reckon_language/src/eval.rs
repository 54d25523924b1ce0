//! Expression evaluation and per-pass context.
//!
//! An [`EvalContext`] is constructed fresh for every recalculation pass and
//! discarded after: variables (including `ans`), the catalog reference, the
//! extensions-enabled flag, and the RNG all live here. Routines never touch
//! global state.

use std::collections::HashMap;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use reckon_foundation::{Error, ErrorContext, Result, Value};

use crate::ast::Expr;
use crate::func::Catalog;
use crate::parser;

/// Per-pass evaluation state.
///
/// Holds an explicitly owned RNG so randomness-producing routines are
/// deterministic under test (seed via [`EvalContext::with_seed`]).
pub struct EvalContext<'a> {
    catalog: &'a Catalog,
    allow_external: bool,
    vars: HashMap<String, Value>,
    rng: ChaCha8Rng,
}

impl<'a> EvalContext<'a> {
    /// Creates a context with an entropy-seeded RNG.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            allow_external: false,
            vars: HashMap::new(),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a context with a deterministic RNG stream.
    #[must_use]
    pub fn with_seed(catalog: &'a Catalog, seed: u64) -> Self {
        Self {
            catalog,
            allow_external: false,
            vars: HashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Enables or disables externally supplied extension functions.
    #[must_use]
    pub const fn allow_external(mut self, allow: bool) -> Self {
        self.allow_external = allow;
        self
    }

    /// The catalog this context dispatches against.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Defines or replaces a variable.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Removes a variable if present.
    pub fn undefine(&mut self, name: &str) {
        self.vars.remove(name);
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// The context-owned random number generator.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Expr {
    /// Evaluates this expression tree.
    ///
    /// Function calls evaluate their arguments first, then dispatch through
    /// the catalog, never at parse time.
    ///
    /// # Errors
    /// Returns the first evaluation error; unresolved calls carry the
    /// call-site source position in their context.
    pub fn eval(&self, ctx: &mut EvalContext<'_>) -> Result<Value> {
        match self {
            Self::Num(value, _) => Ok(Value::Num(*value)),
            Self::Bool(value, _) => Ok(Value::Bool(*value)),
            Self::Str(text, _) => Ok(Value::str(text)),
            Self::Ident(name, span) => ctx.get(name).cloned().ok_or_else(|| {
                Error::undefined_variable(name)
                    .with_context(ErrorContext::new(span.start, span.end))
            }),
            Self::Array(elements, _) => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(element.eval(ctx)?);
                }
                Ok(Value::array(items))
            }
            Self::Unary { op, operand, .. } => op.apply(&operand.eval(ctx)?),
            Self::Binary { op, lhs, rhs, .. } => {
                let lhs = lhs.eval(ctx)?;
                let rhs = rhs.eval(ctx)?;
                op.apply(&lhs, &rhs)
            }
            Self::Call {
                name,
                name_span,
                args,
                ..
            } => {
                let mut actuals = Vec::with_capacity(args.len());
                for arg in args {
                    actuals.push(arg.eval(ctx)?);
                }
                let catalog = ctx.catalog;
                let def = catalog
                    .find(name, &actuals, ctx.allow_external)
                    .map_err(|e| {
                        e.with_context(ErrorContext::new(name_span.start, name_span.end))
                    })?;
                def.call(ctx, &actuals)
            }
            Self::Assign { name, value, .. } => {
                let value = value.eval(ctx)?;
                ctx.define(name.clone(), value.clone());
                Ok(value)
            }
        }
    }
}

/// Parses and evaluates one entry's text.
///
/// # Errors
/// Returns parse errors and evaluation errors alike; the caller renders
/// them per entry.
pub fn eval_entry(source: &str, ctx: &mut EvalContext<'_>) -> Result<Value> {
    parser::parse(source)?.eval(ctx)
}
