//! The declarative builtin function table.
//!
//! Builtins are organized by category:
//! - `math`: powers, logarithms, trigonometry, rounding
//! - `aggregate`: flatten-variadic reductions (gcd, sum, max, ...)
//! - `bits`: bit packing and manipulation
//! - `array`: array construction and observation
//! - `random`: context-RNG-backed generators
//! - `misc`: assertion

mod aggregate;
mod array;
mod bits;
mod math;
mod misc;
#[allow(clippy::unnecessary_wraps)]
mod random;

use reckon_foundation::Result;

use super::FuncDef;

/// Builds the full builtin descriptor table, in catalog order.
///
/// # Errors
/// Propagates the first definition error; a malformed prototype here is a
/// programmer error surfaced at catalog build time.
pub fn defs() -> Result<Vec<FuncDef>> {
    let mut defs = Vec::new();
    defs.extend(math::defs()?);
    defs.extend(aggregate::defs()?);
    defs.extend(bits::defs()?);
    defs.extend(array::defs()?);
    defs.extend(random::defs()?);
    defs.extend(misc::defs()?);
    Ok(defs)
}
