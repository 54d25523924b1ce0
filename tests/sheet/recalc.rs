//! Integration tests for whole-sheet recalculation and run commits.

use reckon_sheet::{RadixMode, Sheet};

fn sheet_of(texts: &[&str]) -> Sheet {
    let mut sheet = Sheet::new().unwrap();
    sheet.clear();
    sheet.set_text(0, texts[0]);
    for text in &texts[1..] {
        sheet.push(*text);
    }
    sheet
}

// =============================================================================
// The Recalculation Pass
// =============================================================================

#[test]
fn answers_chain_through_ans_and_builtins() {
    let mut sheet = sheet_of(&["pow(2, 8)", "ans/4", "sqrt(ans)"]);
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(0).unwrap().answer(), Some("256"));
    assert_eq!(sheet.entry(1).unwrap().answer(), Some("64"));
    assert_eq!(sheet.entry(2).unwrap().answer(), Some("8"));
}

#[test]
fn an_error_breaks_the_ans_chain_but_not_the_pass() {
    let mut sheet = sheet_of(&["6*7", "frob(ans)", "ans", "1+1"]);
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(0).unwrap().answer(), Some("42"));
    assert_eq!(
        sheet.entry(1).unwrap().hint(),
        Some("? function frob(1) was not found")
    );
    assert_eq!(
        sheet.entry(2).unwrap().hint(),
        Some("? undefined variable: ans")
    );
    // Entries after the failure still evaluate.
    assert_eq!(sheet.entry(3).unwrap().answer(), Some("4"));
}

#[test]
fn assignments_are_rederived_every_pass() {
    let mut sheet = sheet_of(&["r = 3", "r*r"]);
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(1).unwrap().answer(), Some("9"));
    sheet.set_text(0, "r = 5");
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(1).unwrap().answer(), Some("25"));
}

#[test]
fn editing_an_operand_reflows_through_the_run() {
    let mut sheet = sheet_of(&["3", "4", "+"]);
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(2).unwrap().answer(), Some("7"));
    sheet.set_text(0, "30");
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(2).unwrap().answer(), Some("34"));
}

// =============================================================================
// Committing Runs
// =============================================================================

#[test]
fn committed_runs_keep_feeding_later_entries() {
    let mut sheet = sheet_of(&["3", "4", "+"]);
    assert!(sheet.commit_rpn());
    sheet.push("ans*2");
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(0).unwrap().text(), "3+4");
    assert_eq!(sheet.entry(1).unwrap().answer(), Some("14"));
}

#[test]
fn committed_text_is_precedence_correct() {
    let mut sheet = sheet_of(&["2", "3", "4", "+ *"]);
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(3).unwrap().answer(), Some("14"));
    assert!(sheet.commit_rpn());
    assert_eq!(sheet.entry(0).unwrap().text(), "2*(3+4)");
    assert_eq!(sheet.entry(0).unwrap().answer(), Some("14"));
}

#[test]
fn entries_outside_the_run_survive_a_commit() {
    let mut sheet = sheet_of(&["100", "3", "4", "+"]);
    assert!(sheet.commit_rpn());
    assert_eq!(sheet.entry(0).unwrap().text(), "100");
    assert_eq!(sheet.entry(1).unwrap().text(), "3+4");
    assert_eq!(sheet.selected(), 1);
}

// =============================================================================
// Radix Display
// =============================================================================

#[test]
fn radix_modes_cycle_and_format() {
    let mut sheet = sheet_of(&["26"]);
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(0).unwrap().answer(), Some("26"));

    for expected in ["0x1A", "0b11010", "0o32", "26"] {
        sheet.cycle_radix();
        sheet.recalc_seeded(0);
        assert_eq!(sheet.entry(0).unwrap().answer(), Some(expected));
    }
    assert_eq!(sheet.entry(0).unwrap().radix(), RadixMode::Dec);
}

#[test]
fn non_integer_answers_ignore_the_radix_mode() {
    let mut sheet = sheet_of(&["2.5"]);
    sheet.cycle_radix();
    sheet.recalc_seeded(0);
    assert_eq!(sheet.entry(0).unwrap().answer(), Some("2.5"));
}

#[test]
fn negative_integers_display_as_two_s_complement_words() {
    let mut sheet = sheet_of(&["0-1"]);
    sheet.cycle_radix();
    sheet.recalc_seeded(0);
    assert_eq!(
        sheet.entry(0).unwrap().answer(),
        Some("0xFFFFFFFFFFFFFFFF")
    );
}
