//! Function descriptors and the argument-binding dispatcher.
//!
//! A [`FuncDef`] couples a compact prototype (e.g. `"pow(x*, y)"`,
//! `"gcd(x...)"`, `"pack(b, array[]...)"`) with the routine it dispatches
//! to. Before a routine runs, [`FuncDef::call`] reshapes the actual
//! arguments per the descriptor's variadic or vectorization policy, so the
//! routine always sees its declared fixed-parameter shape.

pub mod builtins;
mod catalog;

use std::fmt;

use reckon_foundation::{Error, Result, Value};

use crate::eval::EvalContext;

pub use catalog::Catalog;

/// A native routine: pure function of context + transformed arguments.
pub type Routine = fn(&mut EvalContext<'_>, &[Value]) -> Result<Value>;

/// How a descriptor's trailing arguments are reshaped before dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variadic {
    /// Fixed arity: the routine receives exactly the declared arguments.
    #[default]
    None,
    /// `tail...`: a trailing array argument is spliced flat into the
    /// argument list; otherwise the variable tail passes through as-is.
    Flatten,
    /// `tail[]...`: trailing arguments are gathered into one array in the
    /// final slot (an empty array when the tail is absent).
    Array,
}

/// A function descriptor: name, parameters, arity/vectorization policy,
/// and the routine to invoke.
#[derive(Clone)]
pub struct FuncDef {
    name: String,
    params: Vec<String>,
    variadic: Variadic,
    vec_index: Option<usize>,
    routine: Routine,
    summary: &'static str,
}

impl FuncDef {
    /// Parses a compact prototype into a descriptor.
    ///
    /// Grammar: `name(arg (, arg)* tail?)` or `name()`; each `arg` is an
    /// identifier optionally suffixed `*` (vectorizable); the optional
    /// `tail` is `...` (flatten-variadic) or `[]...` (array-variadic).
    ///
    /// # Errors
    /// Returns a definition error naming the prototype if it is malformed,
    /// declares more than one vectorizable parameter, or combines a
    /// vectorizable parameter with a variadic tail.
    pub fn parse(prototype: &str, routine: Routine, summary: &'static str) -> Result<Self> {
        let (name, params, variadic, vec_index) = parse_prototype(prototype)?;
        Ok(Self {
            name,
            params,
            variadic,
            vec_index,
            routine,
            summary,
        })
    }

    /// The function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter names (the `*` marker is stripped).
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The variadic policy of the trailing slot.
    #[must_use]
    pub const fn variadic(&self) -> Variadic {
        self.variadic
    }

    /// Index of the one vectorizable parameter, if any.
    #[must_use]
    pub const fn vec_index(&self) -> Option<usize> {
        self.vec_index
    }

    /// One-line description for completion and help output.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        self.summary
    }

    /// Returns true if this descriptor accepts the given call.
    ///
    /// Fixed descriptors require an exact argument count; either variadic
    /// mode accepts `params.len() - 1` or more. A vectorizable slot counts
    /// as exactly one parameter regardless of scalar vs. array actual.
    #[must_use]
    pub fn matches(&self, name: &str, args: &[Value]) -> bool {
        if name != self.name {
            return false;
        }
        match self.variadic {
            Variadic::None => args.len() == self.params.len(),
            Variadic::Flatten | Variadic::Array => args.len() + 1 >= self.params.len(),
        }
    }

    /// Transforms the arguments per this descriptor's policy and invokes
    /// the routine.
    ///
    /// # Errors
    /// Returns a too-few-arguments error when a variadic call falls below
    /// its minimum; routine errors propagate unchanged.
    pub fn call(&self, ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
        let n = self.params.len();
        match self.variadic {
            Variadic::Flatten => {
                if args.len() + 1 < n {
                    return Err(Error::too_few_arguments(&self.name));
                }
                // A lone array in the variadic slot is spliced flat; this is
                // the one case where the literal count equals `n` yet
                // flattening still applies.
                if args.len() == n {
                    if let Some(tail) = args[n - 1].as_array() {
                        let mut shaped: Vec<Value> = args[..n - 1].to_vec();
                        shaped.extend(tail.iter().cloned());
                        return (self.routine)(ctx, &shaped);
                    }
                }
                (self.routine)(ctx, args)
            }
            Variadic::Array => {
                if args.len() + 1 < n {
                    return Err(Error::too_few_arguments(&self.name));
                }
                if args.len() + 1 == n {
                    // Absent tail: the variadic slot is an empty array.
                    let mut shaped: Vec<Value> = args.to_vec();
                    shaped.push(Value::empty_array());
                    return (self.routine)(ctx, &shaped);
                }
                if args.len() == n && args[n - 1].is_array() {
                    return (self.routine)(ctx, args);
                }
                let mut shaped: Vec<Value> = args[..n - 1].to_vec();
                shaped.push(Value::array(args[n - 1..].iter().cloned()));
                (self.routine)(ctx, &shaped)
            }
            Variadic::None => {
                if let Some(index) = self.vec_index {
                    if let Some(Value::Array(items)) = args.get(index) {
                        let items = items.clone();
                        let mut shaped: Vec<Value> = args.to_vec();
                        let mut results = Vec::with_capacity(items.len());
                        for item in &items {
                            shaped[index] = item.clone();
                            results.push((self.routine)(ctx, &shaped)?);
                        }
                        return Ok(Value::array(results));
                    }
                }
                (self.routine)(ctx, args)
            }
        }
    }
}

impl fmt::Debug for FuncDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncDef")
            .field("prototype", &self.to_string())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FuncDef {
    /// Reconstructs the prototype, e.g. `pow(x*, y)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
            if self.vec_index == Some(i) {
                write!(f, "*")?;
            }
        }
        match self.variadic {
            Variadic::None => {}
            Variadic::Flatten => write!(f, "...")?,
            Variadic::Array => write!(f, "[]...")?,
        }
        write!(f, ")")
    }
}

/// Parses `name(args)` into its descriptor parts.
#[allow(clippy::type_complexity)]
fn parse_prototype(prototype: &str) -> Result<(String, Vec<String>, Variadic, Option<usize>)> {
    let bad = |reason: &str| Error::invalid_prototype(prototype, reason);

    let s = prototype.trim();
    let Some(open) = s.find('(') else {
        return Err(bad("missing '('"));
    };
    if !s.ends_with(')') {
        return Err(bad("missing ')'"));
    }
    let name = &s[..open];
    if name.is_empty() || !is_ident(name) {
        return Err(bad("invalid function name"));
    }

    let mut inner = s[open + 1..s.len() - 1].trim();
    if inner.is_empty() {
        return Ok((name.to_string(), Vec::new(), Variadic::None, None));
    }

    let mut variadic = Variadic::None;
    if let Some(stripped) = inner.strip_suffix("[]...") {
        variadic = Variadic::Array;
        inner = stripped;
    } else if let Some(stripped) = inner.strip_suffix("...") {
        variadic = Variadic::Flatten;
        inner = stripped;
    }

    let mut params = Vec::new();
    let mut vec_index = None;
    for (i, raw) in inner.split(',').enumerate() {
        let mut param = raw.trim();
        if let Some(stripped) = param.strip_suffix('*') {
            if vec_index.is_some() {
                return Err(bad("only one parameter may be vectorizable"));
            }
            if variadic != Variadic::None {
                return Err(bad("vectorizable and variadic parameters cannot coexist"));
            }
            vec_index = Some(i);
            param = stripped;
        }
        if param.is_empty() || !is_ident(param) {
            return Err(bad("invalid parameter name"));
        }
        params.push(param.to_string());
    }

    Ok((name.to_string(), params, variadic, vec_index))
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}
