//! Integration tests for the builtin function table, exercised end to end
//! through entry evaluation.

use reckon_foundation::{Result, Value};
use reckon_language::{Catalog, EvalContext, eval_entry};

fn eval(source: &str) -> Result<Value> {
    let catalog = Catalog::with_builtins().unwrap();
    let mut ctx = EvalContext::with_seed(&catalog, 0);
    eval_entry(source, &mut ctx)
}

fn num(source: &str) -> f64 {
    eval(source).unwrap().expect_num().unwrap()
}

// =============================================================================
// Math
// =============================================================================

#[test]
fn powers_and_logs() {
    assert_eq!(num("pow(2, 10)"), 1024.0);
    assert_eq!(num("log2(4096)"), 12.0);
    assert_eq!(num("sqrt(81)"), 9.0);
}

#[test]
fn vectorizable_slots_map_over_arrays() {
    assert_eq!(
        eval("pow([1, 2, 3], 2)").unwrap(),
        Value::array([Value::Num(1.0), Value::Num(4.0), Value::Num(9.0)])
    );
    assert_eq!(
        eval("abs([1, 0-2])").unwrap(),
        Value::array([Value::Num(1.0), Value::Num(2.0)])
    );
}

#[test]
fn out_of_domain_arguments_are_errors_not_nan() {
    assert!(eval("sqrt(0-1)").is_err());
    assert!(eval("asin(2)").is_err());
    assert!(eval("log(0-5)").is_err());
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn reductions_take_spread_or_array_arguments() {
    assert_eq!(num("gcd(12, 18, 30)"), 6.0);
    assert_eq!(num("gcd([12, 18, 30])"), 6.0);
    assert_eq!(num("lcm(4, 6)"), 12.0);
    assert_eq!(num("max(3, 1, 4, 1, 5)"), 5.0);
    assert_eq!(num("min([3, 1, 4])"), 1.0);
    assert_eq!(num("ave(1, 2, 3, 4)"), 2.5);
}

#[test]
fn sum_of_nothing_is_zero() {
    assert_eq!(num("sum()"), 0.0);
}

#[test]
fn reductions_without_an_identity_reject_empty_calls() {
    assert!(eval("max()").is_err());
    assert!(eval("gcd()").is_err());
}

// =============================================================================
// Bits
// =============================================================================

#[test]
fn pack_places_the_first_element_most_significant() {
    assert_eq!(num("pack(8, 1, 2)"), 258.0);
    assert_eq!(num("pack(8, [1, 2])"), 258.0);
    assert_eq!(num("pack(8)"), 0.0);
}

#[test]
fn unpack_splits_most_significant_first() {
    assert_eq!(
        eval("unpack(8, 258)").unwrap(),
        Value::array([Value::Num(1.0), Value::Num(2.0)])
    );
}

#[test]
fn gray_codes_round_trip() {
    assert_eq!(num("toGray(5)"), 7.0);
    assert_eq!(num("fromGray(toGray(1234))"), 1234.0);
}

#[test]
fn rotations_wrap_within_the_declared_width() {
    assert_eq!(num("rotateL(8, 0x81)"), 3.0);
    assert_eq!(num("rotateR(8, 0x81)"), 192.0);
}

// =============================================================================
// Random
// =============================================================================

#[test]
fn random_values_replay_under_the_same_seed() {
    let catalog = Catalog::with_builtins().unwrap();
    let mut a = EvalContext::with_seed(&catalog, 7);
    let mut b = EvalContext::with_seed(&catalog, 7);
    for source in ["rand()", "rand(1, 6)", "rand32()"] {
        assert_eq!(
            eval_entry(source, &mut a).unwrap(),
            eval_entry(source, &mut b).unwrap()
        );
    }
}

#[test]
fn ranged_rand_is_inclusive_of_both_bounds() {
    assert_eq!(num("rand(3, 3)"), 3.0);
    assert!(eval("rand(4, 3)").is_err());
}

// =============================================================================
// Assertions
// =============================================================================

#[test]
fn assert_passes_truth_through_and_rejects_the_rest() {
    assert_eq!(eval("assert(1+1 == 2)").unwrap(), Value::Bool(true));
    assert!(eval("assert(1+1 == 3)").is_err());
    assert!(eval("assert(1)").is_err());
}

// =============================================================================
// Catalog Surface
// =============================================================================

#[test]
fn catalog_lists_builtins_with_summaries() {
    let catalog = Catalog::with_builtins().unwrap();
    let pow = catalog
        .iter(false)
        .find(|def| def.name() == "pow")
        .unwrap();
    assert_eq!(pow.to_string(), "pow(x*, y)");
    assert!(!pow.summary().is_empty());
}
