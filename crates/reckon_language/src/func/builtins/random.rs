//! Random number generators backed by the context-owned RNG.
//!
//! Routines draw from [`EvalContext::rng_mut`] and nothing else, so a
//! seeded context replays the same stream.

use rand::Rng;
use rand_chacha::rand_core::RngCore;
use reckon_foundation::{Error, Result, Value};

use super::FuncDef;
use crate::eval::EvalContext;

pub(crate) fn defs() -> Result<Vec<FuncDef>> {
    Ok(vec![
        FuncDef::parse("rand()", rand_unit, "uniform number in [0, 1)")?,
        FuncDef::parse("rand(min, max)", rand_between, "uniform integer in [min, max]")?,
        FuncDef::parse("rand32()", rand32, "uniform 32-bit integer")?,
    ])
}

fn rand_unit(ctx: &mut EvalContext<'_>, _args: &[Value]) -> Result<Value> {
    Ok(Value::Num(ctx.rng_mut().gen_range(0.0..1.0)))
}

#[allow(clippy::cast_precision_loss)]
fn rand_between(ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let min = args[0].expect_int()?;
    let max = args[1].expect_int()?;
    if min > max {
        return Err(Error::domain(format!("rand: empty range {min}..{max}")));
    }
    Ok(Value::Num(ctx.rng_mut().gen_range(min..=max) as f64))
}

fn rand32(ctx: &mut EvalContext<'_>, _args: &[Value]) -> Result<Value> {
    Ok(Value::Num(f64::from(ctx.rng_mut().next_u32())))
}
