//! The operator table: symbols, precedence, and value semantics.
//!
//! Precedence is a small integer where a **higher** number binds tighter.
//! The stack-entry resolver's parenthesization rules compare these numbers
//! directly, so the table is part of the crate's observable behavior and is
//! pinned by tests.

use reckon_foundation::{Error, ErrorKind, Result, Value};

/// Precedence of all unary operators (tighter than any binary operator).
pub const UNARY_PRECEDENCE: u8 = 11;

/// Binary operators, in the order they appear in the precedence table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    /// `||`
    Or,
    /// `&&`
    And,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

/// Every binary operator, used for symbol lookup (longest spelling first).
const BIN_OPS: [BinOp; 18] = [
    BinOp::Or,
    BinOp::And,
    BinOp::Shl,
    BinOp::Shr,
    BinOp::Le,
    BinOp::Ge,
    BinOp::Eq,
    BinOp::Ne,
    BinOp::BitOr,
    BinOp::BitXor,
    BinOp::BitAnd,
    BinOp::Lt,
    BinOp::Gt,
    BinOp::Add,
    BinOp::Sub,
    BinOp::Mul,
    BinOp::Div,
    BinOp::Rem,
];

impl BinOp {
    /// Looks up a binary operator by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BIN_OPS.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns the canonical spelling of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }

    /// Returns this operator's precedence (higher binds tighter).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::BitOr => 3,
            Self::BitXor => 4,
            Self::BitAnd => 5,
            Self::Eq | Self::Ne => 6,
            Self::Lt | Self::Le | Self::Gt | Self::Ge => 7,
            Self::Shl | Self::Shr => 8,
            Self::Add | Self::Sub => 9,
            Self::Mul | Self::Div | Self::Rem => 10,
        }
    }

    /// Applies this operator to two evaluated operands.
    ///
    /// # Errors
    /// Returns a type mismatch for unsupported operand types and a
    /// division-by-zero error for `/` and `%` with a zero divisor.
    #[allow(clippy::float_cmp)]
    pub fn apply(self, lhs: &Value, rhs: &Value) -> Result<Value> {
        match self {
            Self::Or => Ok(Value::Bool(lhs.expect_bool()? || rhs.expect_bool()?)),
            Self::And => Ok(Value::Bool(lhs.expect_bool()? && rhs.expect_bool()?)),
            Self::Eq => Ok(Value::Bool(lhs == rhs)),
            Self::Ne => Ok(Value::Bool(lhs != rhs)),
            Self::Lt => Ok(Value::Bool(lhs.expect_num()? < rhs.expect_num()?)),
            Self::Le => Ok(Value::Bool(lhs.expect_num()? <= rhs.expect_num()?)),
            Self::Gt => Ok(Value::Bool(lhs.expect_num()? > rhs.expect_num()?)),
            Self::Ge => Ok(Value::Bool(lhs.expect_num()? >= rhs.expect_num()?)),
            Self::BitOr => bit_op(lhs, rhs, |a, b| a | b),
            Self::BitXor => bit_op(lhs, rhs, |a, b| a ^ b),
            Self::BitAnd => bit_op(lhs, rhs, |a, b| a & b),
            Self::Shl => shift_op(lhs, rhs, |a, b| a.wrapping_shl(b)),
            Self::Shr => shift_op(lhs, rhs, |a, b| a.wrapping_shr(b)),
            Self::Add => add(lhs, rhs),
            Self::Sub => Ok(Value::Num(lhs.expect_num()? - rhs.expect_num()?)),
            Self::Mul => Ok(Value::Num(lhs.expect_num()? * rhs.expect_num()?)),
            Self::Div => {
                let divisor = rhs.expect_num()?;
                if divisor == 0.0 {
                    return Err(Error::new(ErrorKind::DivisionByZero));
                }
                Ok(Value::Num(lhs.expect_num()? / divisor))
            }
            Self::Rem => {
                let divisor = rhs.expect_num()?;
                if divisor == 0.0 {
                    return Err(Error::new(ErrorKind::DivisionByZero));
                }
                Ok(Value::Num(lhs.expect_num()? % divisor))
            }
        }
    }
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    /// `-`
    Neg,
    /// `!`
    Not,
    /// `~`
    BitNot,
}

impl UnOp {
    /// Looks up a unary operator by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(Self::Neg),
            "!" => Some(Self::Not),
            "~" => Some(Self::BitNot),
            _ => None,
        }
    }

    /// Returns the canonical spelling of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }

    /// Applies this operator to an evaluated operand.
    ///
    /// # Errors
    /// Returns a type mismatch for unsupported operand types.
    #[allow(clippy::cast_sign_loss)]
    pub fn apply(self, operand: &Value) -> Result<Value> {
        match self {
            Self::Neg => Ok(Value::Num(-operand.expect_num()?)),
            Self::Not => Ok(Value::Bool(!operand.expect_bool()?)),
            Self::BitNot => {
                let bits = operand.expect_int()? as u64;
                Ok(num_from_bits(!bits))
            }
        }
    }
}

/// Precedence of the binary operator with the given symbol, if any.
///
/// This is the precedence lookup the stack-entry resolver consults for each
/// candidate symbol.
#[must_use]
pub fn precedence(symbol: &str) -> Option<u8> {
    BinOp::from_symbol(symbol).map(BinOp::precedence)
}

fn add(lhs: &Value, rhs: &Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::str(format!("{a}{b}"))),
        _ => Ok(Value::Num(lhs.expect_num()? + rhs.expect_num()?)),
    }
}

#[allow(clippy::cast_sign_loss)]
fn bit_op(lhs: &Value, rhs: &Value, f: fn(u64, u64) -> u64) -> Result<Value> {
    let a = lhs.expect_int()? as u64;
    let b = rhs.expect_int()? as u64;
    Ok(num_from_bits(f(a, b)))
}

#[allow(clippy::cast_sign_loss)]
fn shift_op(lhs: &Value, rhs: &Value, f: fn(u64, u32) -> u64) -> Result<Value> {
    let a = lhs.expect_int()? as u64;
    let b = rhs.expect_int()?;
    let b = u32::try_from(b)
        .map_err(|_| Error::domain(format!("shift amount out of range: {b}")))?;
    Ok(num_from_bits(f(a, b)))
}

/// Reinterprets 64-bit results as a signed numeric value.
///
/// Bitwise results wider than 53 bits lose precision in an f64; entries that
/// need exact wide masks should stay below that. Matches the all-numeric
/// value model.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub(crate) fn num_from_bits(bits: u64) -> Value {
    Value::Num(bits as i64 as f64)
}
