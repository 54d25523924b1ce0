//! Assertion support.

use reckon_foundation::{Error, ErrorKind, Result, Value};

use super::FuncDef;
use crate::eval::EvalContext;

pub(crate) fn defs() -> Result<Vec<FuncDef>> {
    Ok(vec![FuncDef::parse(
        "assert(x)",
        assert,
        "fails the entry unless x is true",
    )?])
}

fn assert(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    if args[0].expect_bool()? {
        Ok(args[0].clone())
    } else {
        Err(Error::new(ErrorKind::AssertionFailed))
    }
}
