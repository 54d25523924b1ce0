//! Token types for Reckon entry text.
//!
//! Tokens are the output of the lexer and input to the parser. The
//! stack-entry resolver also inspects raw tokens to detect operator runs.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns the operator symbol if this token is an operator.
    #[must_use]
    pub const fn as_op(&self) -> Option<&'static str> {
        match self.kind {
            TokenKind::Op(sym) => Some(sym),
            _ => None,
        }
    }
}

/// Token types for Reckon entry text.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Numeric literal like `42`, `2.5`, `0xff`, `0b1010`, or `0o17`.
    Num(f64),
    /// Identifier like `sum` or `ans`.
    Ident(String),
    /// String literal like `"hello"`.
    Str(String),
    /// Operator symbol like `+` or `<<` (canonical spelling).
    Op(&'static str),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `=` (assignment, distinct from the `==` operator)
    Assign,
    /// End of input.
    Eof,
}
