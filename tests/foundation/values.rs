//! Integration tests for the value model.

use reckon_foundation::{Type, Value};

// =============================================================================
// Construction and Observation
// =============================================================================

#[test]
fn value_types_are_reported() {
    assert_eq!(Value::Num(1.0).value_type(), Type::Num);
    assert_eq!(Value::Bool(true).value_type(), Type::Bool);
    assert_eq!(Value::str("hi").value_type(), Type::Str);
    assert_eq!(Value::empty_array().value_type(), Type::Array);
}

#[test]
fn array_observation_is_the_only_array_capability() {
    let v = Value::array([Value::Num(1.0), Value::str("two")]);
    assert!(v.is_array());
    let items = v.expect_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Value::Num(1.0));
}

#[test]
fn arrays_clone_cheaply_and_compare_structurally() {
    let a = Value::array((0..100).map(|i| Value::Num(f64::from(i))));
    let b = a.clone();
    assert_eq!(a, b);
}

// =============================================================================
// Checked Extraction
// =============================================================================

#[test]
fn expect_num_rejects_other_types() {
    assert_eq!(Value::Num(2.5).expect_num().unwrap(), 2.5);
    let err = Value::str("2.5").expect_num().unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected num, got str");
}

#[test]
fn expect_int_requires_an_integral_number() {
    assert_eq!(Value::Num(-3.0).expect_int().unwrap(), -3);
    assert!(Value::Num(0.5).expect_int().is_err());
    assert!(Value::Num(f64::NAN).expect_int().is_err());
    assert!(Value::Num(1e300).expect_int().is_err());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_drops_trailing_zero_for_integral_numbers() {
    assert_eq!(Value::Num(42.0).to_string(), "42");
    assert_eq!(Value::Num(-0.25).to_string(), "-0.25");
}

#[test]
fn display_nests_arrays_and_quotes_strings() {
    let v = Value::array([
        Value::Num(1.0),
        Value::str("x"),
        Value::array([Value::Bool(false)]),
    ]);
    assert_eq!(v.to_string(), "[1, \"x\", [false]]");
}
