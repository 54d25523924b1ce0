//! The stack-entry resolver.
//!
//! When the selected entry's text is nothing but binary operator symbols
//! (`k` of them), the `k+1` entries before it are read as postfix operands
//! and folded into one precedence-correct infix expression. The fold only
//! parses operand texts to read each side's top-level precedence; it never
//! evaluates anything.
//!
//! Parenthesization is deliberately asymmetric: a left operand is wrapped
//! when its precedence is *less than or equal to* the candidate's, a right
//! operand when the candidate's is *greater than or equal to* its own.
//! Both ties wrap. The reconstructed text must re-parse to the intended
//! tree; over-parenthesizing on ties is the price.

use reckon_foundation::{Error, Result};
use reckon_language::{BinOp, Lexer, TokenKind, parse};

use crate::entry::Entry;

/// A detected stack-entry run: the operand entries `[start, end)` plus the
/// symbol entry at `end`, and either the resolved infix text or the parse
/// error that aborted the fold.
#[derive(Debug, Clone)]
pub struct RpnRun {
    start: usize,
    end: usize,
    outcome: Result<String>,
}

impl RpnRun {
    /// Index of the first operand entry.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Index of the symbol entry (exclusive bound of the operands).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The resolved infix text, if the fold succeeded.
    #[must_use]
    pub fn resolved(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    /// The parse error that aborted the fold, if any. An errored run still
    /// marks its operands but can never be committed.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    pub(crate) const fn outcome(&self) -> &Result<String> {
        &self.outcome
    }
}

/// Looks for a stack-entry run ending at the selected entry.
///
/// Returns `None` when the selected entry is not a pure operator-symbol
/// sequence, and also when there are not enough preceding entries to
/// supply the operands; the malformed case is a silent no-op so ordinary
/// entries never see spurious errors.
#[must_use]
pub fn try_resolve(entries: &[Entry], selected: usize) -> Option<RpnRun> {
    let symbols = command_symbols(entries.get(selected)?.text())?;
    let k = symbols.len();
    if selected < k + 1 {
        return None;
    }
    Some(RpnRun {
        start: selected - k - 1,
        end: selected,
        outcome: fold(entries, selected, &symbols),
    })
}

/// Tokenizes entry text as a pure binary-operator sequence.
///
/// `None` unless the text lexes cleanly into one or more operator tokens
/// that all name binary operators (`~` and `!` are operators but have no
/// binary meaning, so they never open a run).
fn command_symbols(text: &str) -> Option<Vec<BinOp>> {
    let mut lexer = Lexer::new(text);
    let mut symbols = Vec::new();
    loop {
        let token = lexer.next_token().ok()?;
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Op(sym) => symbols.push(BinOp::from_symbol(sym)?),
            _ => return None,
        }
    }
    if symbols.is_empty() { None } else { Some(symbols) }
}

/// Folds the operands below `end` into one infix string, first symbol
/// deepest: the first operator combines the two entries nearest the symbol
/// entry, each later operator pulls in the next entry further back as its
/// left operand.
fn fold(entries: &[Entry], end: usize, symbols: &[BinOp]) -> Result<String> {
    let mut right = entries[end - 1].text().trim().to_string();
    // Only the top-level precedence of each side matters; a grouped
    // operand still reports its inner operator, which keeps ties wrapping.
    let mut right_prec = parse(&right)?.top_precedence();

    for (i, op) in symbols.iter().enumerate() {
        let candidate = op.precedence();
        let mut left = entries[end - 2 - i].text().trim().to_string();
        if let Some(prec) = parse(&left)?.top_precedence() {
            if prec <= candidate {
                left = format!("({left})");
            }
        }
        if let Some(prec) = right_prec {
            if candidate >= prec {
                right = format!("({right})");
            }
        }
        right = format!("{left}{}{right}", op.symbol());
        // The fold tracks the tree it is building, not the wrapped text.
        right_prec = Some(candidate);
    }
    Ok(right)
}
