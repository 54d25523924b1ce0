//! Powers, logarithms, trigonometry, and rounding.
//!
//! Every single-argument function here is vectorizable: called with an
//! array it maps over the elements and returns an array.

use reckon_foundation::{Error, Result, Value};

use super::FuncDef;
use crate::eval::EvalContext;

pub(crate) fn defs() -> Result<Vec<FuncDef>> {
    Ok(vec![
        FuncDef::parse("pow(x*, y)", pow, "x raised to the power y")?,
        FuncDef::parse("exp(x*)", exp, "e raised to the power x")?,
        FuncDef::parse("sqrt(x*)", sqrt, "square root of x")?,
        FuncDef::parse("log(x*)", log, "natural logarithm of x")?,
        FuncDef::parse("log2(x*)", log2, "base-2 logarithm of x")?,
        FuncDef::parse("log10(x*)", log10, "base-10 logarithm of x")?,
        FuncDef::parse("sin(x*)", sin, "sine of x (radians)")?,
        FuncDef::parse("cos(x*)", cos, "cosine of x (radians)")?,
        FuncDef::parse("tan(x*)", tan, "tangent of x (radians)")?,
        FuncDef::parse("asin(x*)", asin, "arcsine of x, in radians")?,
        FuncDef::parse("acos(x*)", acos, "arccosine of x, in radians")?,
        FuncDef::parse("atan(x*)", atan, "arctangent of x, in radians")?,
        FuncDef::parse("atan2(a, b)", atan2, "arctangent of a/b, in radians")?,
        FuncDef::parse("sinh(x*)", sinh, "hyperbolic sine of x")?,
        FuncDef::parse("cosh(x*)", cosh, "hyperbolic cosine of x")?,
        FuncDef::parse("tanh(x*)", tanh, "hyperbolic tangent of x")?,
        FuncDef::parse("floor(x*)", floor, "largest integer not above x")?,
        FuncDef::parse("ceil(x*)", ceil, "smallest integer not below x")?,
        FuncDef::parse("trunc(x*)", trunc, "x with its fraction removed")?,
        FuncDef::parse("round(x*)", round, "x rounded to the nearest integer")?,
        FuncDef::parse("abs(x*)", abs, "absolute value of x")?,
        FuncDef::parse("sign(x*)", sign, "-1, 0, or 1 per the sign of x")?,
    ])
}

/// Checks a math result for NaN, which marks an argument outside the
/// function's domain.
fn finite(name: &str, n: f64) -> Result<Value> {
    if n.is_nan() {
        return Err(Error::domain(format!("{name}: argument out of domain")));
    }
    Ok(Value::Num(n))
}

fn pow(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    finite("pow", args[0].expect_num()?.powf(args[1].expect_num()?))
}

fn exp(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.exp()))
}

fn sqrt(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    finite("sqrt", args[0].expect_num()?.sqrt())
}

fn log(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    finite("log", args[0].expect_num()?.ln())
}

fn log2(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    finite("log2", args[0].expect_num()?.log2())
}

fn log10(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    finite("log10", args[0].expect_num()?.log10())
}

fn sin(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.sin()))
}

fn cos(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.cos()))
}

fn tan(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.tan()))
}

fn asin(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    finite("asin", args[0].expect_num()?.asin())
}

fn acos(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    finite("acos", args[0].expect_num()?.acos())
}

fn atan(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.atan()))
}

fn atan2(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(
        args[0].expect_num()?.atan2(args[1].expect_num()?),
    ))
}

fn sinh(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.sinh()))
}

fn cosh(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.cosh()))
}

fn tanh(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.tanh()))
}

fn floor(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.floor()))
}

fn ceil(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.ceil()))
}

fn trunc(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.trunc()))
}

fn round(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.round()))
}

fn abs(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()?.abs()))
}

#[allow(clippy::float_cmp)]
fn sign(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let n = args[0].expect_num()?;
    Ok(Value::Num(if n == 0.0 { 0.0 } else { n.signum() }))
}
