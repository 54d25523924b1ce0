//! Flatten-variadic reductions over numeric arguments.
//!
//! Each of these accepts either a spread of scalars or a single array:
//! `gcd(12, 18)` and `gcd([12, 18])` bind identically because the
//! dispatcher splices a lone trailing array flat.

use reckon_foundation::{Error, Result, Value};

use super::FuncDef;
use crate::eval::EvalContext;

pub(crate) fn defs() -> Result<Vec<FuncDef>> {
    Ok(vec![
        FuncDef::parse("gcd(x...)", gcd, "greatest common divisor")?,
        FuncDef::parse("lcm(x...)", lcm, "least common multiple")?,
        FuncDef::parse("max(x...)", max, "largest argument")?,
        FuncDef::parse("min(x...)", min, "smallest argument")?,
        FuncDef::parse("sum(x...)", sum, "sum of the arguments")?,
        FuncDef::parse("ave(x...)", ave, "arithmetic mean of the arguments")?,
        FuncDef::parse("geoMean(x...)", geo_mean, "geometric mean of the arguments")?,
    ])
}

fn nums(name: &str, args: &[Value]) -> Result<Vec<f64>> {
    if args.is_empty() {
        return Err(Error::domain(format!("{name}: no arguments")));
    }
    args.iter().map(Value::expect_num).collect()
}

fn gcd2(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd2(b, a % b) }
}

#[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn gcd(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    if args.is_empty() {
        return Err(Error::domain("gcd: no arguments"));
    }
    let mut acc = 0u64;
    for arg in args {
        let n = arg.expect_int()?;
        if n < 0 {
            return Err(Error::domain(format!("gcd: negative argument {n}")));
        }
        acc = gcd2(acc, n as u64);
    }
    Ok(Value::Num(acc as f64))
}

#[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn lcm(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    if args.is_empty() {
        return Err(Error::domain("lcm: no arguments"));
    }
    let mut acc = 1u64;
    for arg in args {
        let n = arg.expect_int()?;
        if n <= 0 {
            return Err(Error::domain(format!("lcm: non-positive argument {n}")));
        }
        let n = n as u64;
        acc = acc / gcd2(acc, n) * n;
    }
    Ok(Value::Num(acc as f64))
}

fn max(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let nums = nums("max", args)?;
    Ok(Value::Num(nums.into_iter().fold(f64::NEG_INFINITY, f64::max)))
}

fn min(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let nums = nums("min", args)?;
    Ok(Value::Num(nums.into_iter().fold(f64::INFINITY, f64::min)))
}

fn sum(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    // The one reduction with an identity: an empty sum is zero.
    let mut acc = 0.0;
    for arg in args {
        acc += arg.expect_num()?;
    }
    Ok(Value::Num(acc))
}

#[allow(clippy::cast_precision_loss)]
fn ave(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let nums = nums("ave", args)?;
    let count = nums.len() as f64;
    Ok(Value::Num(nums.into_iter().sum::<f64>() / count))
}

#[allow(clippy::cast_precision_loss)]
fn geo_mean(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let nums = nums("geoMean", args)?;
    for &n in &nums {
        if n < 0.0 {
            return Err(Error::domain(format!("geoMean: negative argument {n}")));
        }
    }
    let count = nums.len() as f64;
    Ok(Value::Num(
        nums.into_iter().product::<f64>().powf(1.0 / count),
    ))
}
