//! Integration tests for the lexer.

use reckon_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn tokenize_decimal_numbers() {
    assert_eq!(kinds("42")[0], TokenKind::Num(42.0));
    assert_eq!(kinds("3.25")[0], TokenKind::Num(3.25));
    assert_eq!(kinds("1e3")[0], TokenKind::Num(1000.0));
    assert_eq!(kinds("2.5e-1")[0], TokenKind::Num(0.25));
}

#[test]
fn tokenize_radix_literals() {
    assert_eq!(kinds("0xFF")[0], TokenKind::Num(255.0));
    assert_eq!(kinds("0b1010")[0], TokenKind::Num(10.0));
    assert_eq!(kinds("0o17")[0], TokenKind::Num(15.0));
    assert_eq!(kinds("0xDEAD_BEEF")[0], TokenKind::Num(3_735_928_559.0));
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn tokenize_takes_the_longest_operator() {
    assert_eq!(kinds("<<")[0], TokenKind::Op("<<"));
    assert_eq!(kinds("<=")[0], TokenKind::Op("<="));
    let lt = kinds("< <");
    assert_eq!(lt[0], TokenKind::Op("<"));
    assert_eq!(lt[1], TokenKind::Op("<"));
}

#[test]
fn tokenize_distinguishes_assign_from_equality() {
    assert_eq!(kinds("x = 1")[1], TokenKind::Assign);
    assert_eq!(kinds("x == 1")[1], TokenKind::Op("=="));
}

#[test]
fn tokenize_operator_runs() {
    // The resolver feeds entries like "* -" straight through the lexer.
    let run = kinds("* -");
    assert_eq!(run[0], TokenKind::Op("*"));
    assert_eq!(run[1], TokenKind::Op("-"));
    assert_eq!(run[2], TokenKind::Eof);
}

// =============================================================================
// Strings, Identifiers, Errors
// =============================================================================

#[test]
fn tokenize_strings_with_escapes() {
    assert_eq!(
        kinds(r#""a\nb""#)[0],
        TokenKind::Str("a\nb".to_string())
    );
}

#[test]
fn tokenize_call_shapes() {
    let toks = kinds("pow(2, 10)");
    assert_eq!(toks[0], TokenKind::Ident("pow".to_string()));
    assert_eq!(toks[1], TokenKind::LParen);
    assert_eq!(toks[3], TokenKind::Comma);
}

#[test]
fn unknown_characters_are_errors() {
    assert!(Lexer::new("1 @ 2").tokenize().is_err());
    assert!(Lexer::new("\"unterminated").tokenize().is_err());
}
