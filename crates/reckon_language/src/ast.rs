//! Expression tree for Reckon entry text.

use crate::op::{BinOp, UNARY_PRECEDENCE, UnOp};
use crate::span::Span;

/// A parsed expression.
///
/// Every node carries the span of the text it was parsed from, so
/// evaluation errors can be attributed to a source position.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Num(f64, Span),
    /// Boolean literal (`true` / `false`).
    Bool(bool, Span),
    /// String literal.
    Str(String, Span),
    /// Variable reference.
    Ident(String, Span),
    /// Array literal like `[1, 2, 3]`.
    Array(Vec<Expr>, Span),
    /// Unary operation like `-x`.
    Unary {
        /// The operator.
        op: UnOp,
        /// The operand.
        operand: Box<Expr>,
        /// Source location.
        span: Span,
    },
    /// Binary operation like `a + b`.
    Binary {
        /// The operator.
        op: BinOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
        /// Source location.
        span: Span,
    },
    /// Function call like `pow(2, 10)`.
    Call {
        /// The function name.
        name: String,
        /// Location of the name token (call-site position for errors).
        name_span: Span,
        /// Argument expressions.
        args: Vec<Expr>,
        /// Source location of the whole call.
        span: Span,
    },
    /// Variable assignment like `x = 2`.
    Assign {
        /// The variable name.
        name: String,
        /// The assigned expression.
        value: Box<Expr>,
        /// Source location.
        span: Span,
    },
}

impl Expr {
    /// Returns the source location of this expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Num(_, span)
            | Self::Bool(_, span)
            | Self::Str(_, span)
            | Self::Ident(_, span)
            | Self::Array(_, span)
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Call { span, .. }
            | Self::Assign { span, .. } => *span,
        }
    }

    /// Precedence of this expression's top-level operator, if the root node
    /// is an operator.
    ///
    /// The stack-entry resolver reads this to decide parenthesization.
    /// Literals and calls have no top-level operator and never need
    /// parentheses; a parenthesized group is transparent and reports the
    /// operator inside it.
    #[must_use]
    pub const fn top_precedence(&self) -> Option<u8> {
        match self {
            Self::Binary { op, .. } => Some(op.precedence()),
            Self::Unary { .. } => Some(UNARY_PRECEDENCE),
            _ => None,
        }
    }
}
