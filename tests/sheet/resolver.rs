//! Integration tests for the stack-entry resolver.
//!
//! A selected entry holding only operator symbols folds the preceding
//! entries into one infix formula, parenthesizing operands exactly where
//! precedence demands.

use reckon_sheet::{Entry, try_resolve};

fn entries(texts: &[&str]) -> Vec<Entry> {
    texts.iter().copied().map(Entry::new).collect()
}

fn resolve(texts: &[&str]) -> Option<String> {
    let stack = entries(texts);
    try_resolve(&stack, stack.len() - 1)
        .and_then(|run| run.resolved().map(ToOwned::to_owned))
}

// =============================================================================
// Run Bounds
// =============================================================================

#[test]
fn a_single_operator_folds_the_two_preceding_entries() {
    let stack = entries(&["9", "3", "4", "+"]);
    let run = try_resolve(&stack, 3).unwrap();
    assert_eq!(run.start(), 1);
    assert_eq!(run.end(), 3);
    assert_eq!(run.resolved(), Some("3+4"));
}

#[test]
fn a_run_of_k_operators_consumes_k_plus_one_operands() {
    let stack = entries(&["1", "2", "3", "* -"]);
    let run = try_resolve(&stack, 3).unwrap();
    assert_eq!(run.start(), 0);
    assert_eq!(run.end(), 3);
    assert_eq!(run.resolved(), Some("1-2*3"));
}

#[test]
fn too_few_preceding_entries_is_not_a_run() {
    assert!(try_resolve(&entries(&["1", "* -"]), 1).is_none());
    assert!(try_resolve(&entries(&["+"]), 0).is_none());
}

#[test]
fn only_all_operator_entries_resolve() {
    assert!(try_resolve(&entries(&["3", "4", "3+4"]), 2).is_none());
    assert!(try_resolve(&entries(&["3", "4", ""]), 2).is_none());
    assert!(try_resolve(&entries(&["3", "4", "+ x"]), 2).is_none());
}

#[test]
fn only_the_selected_entry_is_consulted() {
    // The "+" at index 1 is not selected, so nothing resolves.
    assert!(try_resolve(&entries(&["3", "+", "4"]), 2).is_none());
}

// =============================================================================
// Parenthesization
// =============================================================================

#[test]
fn tighter_operands_stay_bare() {
    assert_eq!(resolve(&["1", "2", "3", "* -"]), Some("1-2*3".into()));
    assert_eq!(resolve(&["1", "2", "3", "* +"]), Some("1+2*3".into()));
}

#[test]
fn looser_right_operands_are_wrapped() {
    assert_eq!(resolve(&["2", "3", "4", "+ *"]), Some("2*(3+4)".into()));
}

#[test]
fn looser_left_operands_are_wrapped() {
    assert_eq!(resolve(&["1+2", "3", "*"]), Some("(1+2)*3".into()));
}

#[test]
fn equal_precedence_wraps_both_sides() {
    // Subtraction folded under subtraction must not reassociate.
    assert_eq!(resolve(&["1", "2", "3", "- -"]), Some("1-(2-3)".into()));
    assert_eq!(resolve(&["1-2", "3", "-"]), Some("(1-2)-3".into()));
}

#[test]
fn already_grouped_operands_are_wrapped_again_on_ties() {
    // "(1+2)" still reports "+" at its top, so a tie re-wraps it.
    assert_eq!(resolve(&["(1*2)", "3", "*"]), Some("((1*2))*3".into()));
}

#[test]
fn unary_operands_never_need_wrapping() {
    assert_eq!(resolve(&["-1", "2", "*"]), Some("-1*2".into()));
}

#[test]
fn atoms_and_calls_never_need_wrapping() {
    assert_eq!(resolve(&["pow(1, 2)", "x", "+"]), Some("pow(1, 2)+x".into()));
}

// =============================================================================
// Malformed Operands
// =============================================================================

#[test]
fn unparsable_operands_surface_as_a_run_error() {
    let stack = entries(&["3", "4)", "+"]);
    let run = try_resolve(&stack, 2).unwrap();
    assert_eq!(run.resolved(), None);
    assert!(run.error().is_some());
    assert_eq!(run.start(), 0);
    assert_eq!(run.end(), 2);
}
