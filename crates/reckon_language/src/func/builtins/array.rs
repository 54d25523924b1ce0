//! Array construction and observation.

use reckon_foundation::{Error, Result, Value};

use super::FuncDef;
use crate::eval::EvalContext;

pub(crate) fn defs() -> Result<Vec<FuncDef>> {
    Ok(vec![
        FuncDef::parse("len(array)", len, "number of elements")?,
        // Two descriptors share the name; arity picks between them.
        FuncDef::parse("range(start, stop)", range2, "numbers from start up to stop")?,
        FuncDef::parse("range(start, stop, step)", range3, "numbers from start to stop by step")?,
        FuncDef::parse("reverseArray(array)", reverse_array, "elements in reverse order")?,
        FuncDef::parse("concat(a[]...)", concat, "concatenates arrays and scalars")?,
    ])
}

#[allow(clippy::cast_precision_loss)]
fn len(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_array()?.len() as f64))
}

fn range2(ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let shaped = [args[0].clone(), args[1].clone(), Value::Num(1.0)];
    range3(ctx, &shaped)
}

#[allow(clippy::float_cmp)]
fn range3(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let start = args[0].expect_num()?;
    let stop = args[1].expect_num()?;
    let step = args[2].expect_num()?;
    if step == 0.0 {
        return Err(Error::domain("range: step must be non-zero"));
    }
    let mut items = Vec::new();
    let mut n = start;
    // Half-open: stop itself is excluded.
    while (step > 0.0 && n < stop) || (step < 0.0 && n > stop) {
        items.push(Value::Num(n));
        n += step;
    }
    Ok(Value::array(items))
}

fn reverse_array(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::array(args[0].expect_array()?.iter().rev().cloned()))
}

fn concat(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let mut items = Vec::new();
    for arg in args[0].expect_array()? {
        match arg {
            Value::Array(inner) => items.extend(inner.iter().cloned()),
            other => items.push(other.clone()),
        }
    }
    Ok(Value::array(items))
}
