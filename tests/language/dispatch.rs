//! Integration tests for catalog matching and argument transformation.
//!
//! These pin the dispatcher's calling convention: exact arity for fixed
//! descriptors, the flatten/array variadic reshapes, per-element
//! vectorized invocation, and catalog-order tie-breaking.

use proptest::prelude::*;
use reckon_foundation::{Result, Value};
use reckon_language::{Catalog, EvalContext, FuncDef, eval_entry};

/// Returns the transformed argument list itself, exposing what the
/// dispatcher handed the routine.
fn shape(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::array(args.to_vec()))
}

#[allow(clippy::cast_precision_loss)]
fn argc(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args.len() as f64))
}

fn scale(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(args[0].expect_num()? * args[1].expect_num()?))
}

fn eval_with(catalog: &Catalog, source: &str) -> Result<Value> {
    let mut ctx = EvalContext::with_seed(catalog, 0);
    eval_entry(source, &mut ctx)
}

fn nums(ns: &[f64]) -> Value {
    Value::array(ns.iter().copied().map(Value::Num))
}

// =============================================================================
// Fixed Arity
// =============================================================================

#[test]
fn fixed_descriptors_accept_exactly_their_arity() {
    let catalog = Catalog::new(vec![FuncDef::parse("f(a, b)", argc, "").unwrap()]);
    assert_eq!(eval_with(&catalog, "f(1, 2)").unwrap(), Value::Num(2.0));
    assert_eq!(
        eval_with(&catalog, "f(1)").unwrap_err().to_string(),
        "function f(1) was not found"
    );
    assert_eq!(
        eval_with(&catalog, "f(1, 2, 3)").unwrap_err().to_string(),
        "function f(3) was not found"
    );
}

// =============================================================================
// VariadicFlatten
// =============================================================================

#[test]
fn flatten_passes_spread_tails_through() {
    let catalog = Catalog::new(vec![FuncDef::parse("f(x...)", shape, "").unwrap()]);
    assert_eq!(eval_with(&catalog, "f()").unwrap(), nums(&[]));
    assert_eq!(eval_with(&catalog, "f(1, 2, 3)").unwrap(), nums(&[1.0, 2.0, 3.0]));
}

#[test]
fn flatten_splices_a_lone_trailing_array() {
    // Literal count equals the declared count and the last actual is an
    // array: the one case where flattening applies anyway.
    let catalog = Catalog::new(vec![FuncDef::parse("f(a, x...)", shape, "").unwrap()]);
    assert_eq!(
        eval_with(&catalog, "f(9, [1, 2, 3])").unwrap(),
        nums(&[9.0, 1.0, 2.0, 3.0])
    );
    // One past the declared count: no splice, the tail is literal.
    let v = eval_with(&catalog, "f(9, [1], 2)").unwrap();
    assert_eq!(
        v,
        Value::array([Value::Num(9.0), nums(&[1.0]), Value::Num(2.0)])
    );
}

// =============================================================================
// VariadicArray
// =============================================================================

#[test]
fn array_variadic_fills_an_empty_array_when_the_tail_is_absent() {
    let catalog = Catalog::new(vec![FuncDef::parse("f(b, rest[]...)", shape, "").unwrap()]);
    assert_eq!(
        eval_with(&catalog, "f(8)").unwrap(),
        Value::array([Value::Num(8.0), Value::empty_array()])
    );
}

#[test]
fn array_variadic_passes_an_explicit_array_through() {
    let catalog = Catalog::new(vec![FuncDef::parse("f(b, rest[]...)", shape, "").unwrap()]);
    assert_eq!(
        eval_with(&catalog, "f(8, [1, 2])").unwrap(),
        Value::array([Value::Num(8.0), nums(&[1.0, 2.0])])
    );
}

#[test]
fn array_variadic_gathers_scalar_tails() {
    let catalog = Catalog::new(vec![FuncDef::parse("f(b, rest[]...)", shape, "").unwrap()]);
    assert_eq!(
        eval_with(&catalog, "f(8, 1, 2, 3)").unwrap(),
        Value::array([Value::Num(8.0), nums(&[1.0, 2.0, 3.0])])
    );
}

#[test]
fn variadic_below_minimum_is_not_found() {
    let catalog = Catalog::new(vec![FuncDef::parse("f(a, b, x...)", argc, "").unwrap()]);
    assert_eq!(
        eval_with(&catalog, "f(1)").unwrap_err().to_string(),
        "function f(1) was not found"
    );
}

// =============================================================================
// Vectorized Dispatch
// =============================================================================

#[test]
fn vectorized_slot_iterates_in_element_order() {
    let catalog = Catalog::new(vec![FuncDef::parse("v(x*, k)", scale, "").unwrap()]);
    assert_eq!(
        eval_with(&catalog, "v([1, 2, 3], 10)").unwrap(),
        nums(&[10.0, 20.0, 30.0])
    );
    assert_eq!(eval_with(&catalog, "v(4, 10)").unwrap(), Value::Num(40.0));
}

#[test]
fn vectorized_slot_still_counts_as_one_parameter() {
    let catalog = Catalog::new(vec![FuncDef::parse("v(x*, k)", scale, "").unwrap()]);
    assert_eq!(
        eval_with(&catalog, "v([1], 1, 1)").unwrap_err().to_string(),
        "function v(3) was not found"
    );
}

#[test]
fn vectorized_empty_array_yields_an_empty_array() {
    let catalog = Catalog::new(vec![FuncDef::parse("v(x*, k)", scale, "").unwrap()]);
    assert_eq!(eval_with(&catalog, "v([], 10)").unwrap(), nums(&[]));
}

#[test]
fn vectorized_element_errors_propagate() {
    let catalog = Catalog::new(vec![FuncDef::parse("v(x*, k)", scale, "").unwrap()]);
    assert!(eval_with(&catalog, "v([1, true, 3], 10)").is_err());
}

// =============================================================================
// Catalog Order
// =============================================================================

#[test]
fn first_matching_descriptor_wins() {
    let catalog = Catalog::new(vec![
        FuncDef::parse("g(a, b)", argc, "").unwrap(),
        FuncDef::parse("g(x...)", shape, "").unwrap(),
    ]);
    // Two arguments match both; the fixed one is first.
    assert_eq!(eval_with(&catalog, "g(1, 2)").unwrap(), Value::Num(2.0));
    // Three arguments only match the variadic.
    assert_eq!(eval_with(&catalog, "g(1, 2, 3)").unwrap(), nums(&[1.0, 2.0, 3.0]));
}

// =============================================================================
// Property: the Vectorization Law
// =============================================================================

proptest! {
    #[test]
    fn vectorizing_maps_the_routine_over_the_array(
        elements in prop::collection::vec(-100..100i32, 0..20),
        k in 1..10i32,
    ) {
        let catalog = Catalog::new(vec![FuncDef::parse("v(x*, k)", scale, "").unwrap()]);
        let mut ctx = EvalContext::with_seed(&catalog, 0);

        let list = elements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let result = eval_entry(&format!("v([{list}], {k})"), &mut ctx).unwrap();

        let expected = Value::array(
            elements
                .iter()
                .map(|&e| Value::Num(f64::from(e) * f64::from(k))),
        );
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn flatten_accepts_any_count_at_or_above_minimum(extra in 0..8usize) {
        let catalog = Catalog::new(vec![FuncDef::parse("f(a, x...)", argc, "").unwrap()]);
        let mut ctx = EvalContext::with_seed(&catalog, 0);

        let args = vec!["7"; 1 + extra].join(", ");
        let result = eval_entry(&format!("f({args})"), &mut ctx).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = Value::Num((1 + extra) as f64);
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn fixed_arity_accepts_exactly_the_declared_count(count in 0..6usize) {
        let catalog = Catalog::new(vec![FuncDef::parse("f(a, b, c)", argc, "").unwrap()]);
        let mut ctx = EvalContext::with_seed(&catalog, 0);

        let args = vec!["1"; count].join(", ");
        let result = eval_entry(&format!("f({args})"), &mut ctx);
        prop_assert_eq!(result.is_ok(), count == 3);
    }

    #[test]
    fn array_mode_gathers_exactly_the_scalar_tail(tail in 2..10usize) {
        let catalog = Catalog::new(vec![FuncDef::parse("f(b, rest[]...)", shape, "").unwrap()]);
        let mut ctx = EvalContext::with_seed(&catalog, 0);

        let args = vec!["5"; 1 + tail].join(", ");
        let result = eval_entry(&format!("f({args})"), &mut ctx).unwrap();
        let Value::Array(items) = result else {
            panic!("expected array");
        };
        prop_assert_eq!(items.len(), 2);
        let Some(Value::Array(gathered)) = items.get(1) else {
            panic!("expected gathered tail");
        };
        prop_assert_eq!(gathered.len(), tail);
    }
}
