//! Core value type for all Reckon data.

use std::fmt;
use std::sync::Arc;

use im::Vector;

use crate::error::{Error, Result};
use crate::types::Type;

/// Array payload: a persistent vector with structural sharing.
///
/// Cloning is O(1), which matters because vectorized dispatch and the
/// variadic argument transforms clone argument slices freely.
pub type Array = Vector<Value>;

/// Core value type for all Reckon data.
///
/// Values are immutable and cheaply cloneable.
#[derive(Clone, Debug)]
pub enum Value {
    /// Numeric value (64-bit floating point).
    Num(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(Arc<str>),
    /// Array of values.
    Array(Array),
}

impl Value {
    /// Creates a string value.
    #[must_use]
    pub fn str(s: impl AsRef<str>) -> Self {
        Self::Str(Arc::from(s.as_ref()))
    }

    /// Creates an array value from the given elements.
    #[must_use]
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(elements.into_iter().collect())
    }

    /// Creates an empty array value.
    #[must_use]
    pub fn empty_array() -> Self {
        Self::Array(Vector::new())
    }

    /// Returns the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Num(_) => Type::Num,
            Self::Bool(_) => Type::Bool,
            Self::Str(_) => Type::Str,
            Self::Array(_) => Type::Array,
        }
    }

    /// Returns true if this value is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Attempts to extract a numeric value.
    #[must_use]
    pub const fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Extracts a numeric value or reports a type mismatch.
    ///
    /// # Errors
    /// Returns a `TypeMismatch` error if this value is not numeric.
    pub fn expect_num(&self) -> Result<f64> {
        self.as_num()
            .ok_or_else(|| Error::type_mismatch(Type::Num, self.value_type()))
    }

    /// Extracts an integer-valued number or reports an error.
    ///
    /// # Errors
    /// Returns a `TypeMismatch` error for non-numeric values and a domain
    /// error for numbers with a fractional part or outside the i64 range.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::float_cmp
    )]
    pub fn expect_int(&self) -> Result<i64> {
        let n = self.expect_num()?;
        if n.fract() != 0.0 || !n.is_finite() {
            return Err(Error::domain(format!("expected an integer, got {n}")));
        }
        if n < i64::MIN as f64 || n > i64::MAX as f64 {
            return Err(Error::domain(format!("integer out of range: {n}")));
        }
        Ok(n as i64)
    }

    /// Extracts a boolean value or reports a type mismatch.
    ///
    /// # Errors
    /// Returns a `TypeMismatch` error if this value is not a boolean.
    pub fn expect_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::type_mismatch(Type::Bool, self.value_type()))
    }

    /// Extracts a string reference or reports a type mismatch.
    ///
    /// # Errors
    /// Returns a `TypeMismatch` error if this value is not a string.
    pub fn expect_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::type_mismatch(Type::Str, self.value_type()))
    }

    /// Extracts an array reference or reports a type mismatch.
    ///
    /// # Errors
    /// Returns a `TypeMismatch` error if this value is not an array.
    pub fn expect_array(&self) -> Result<&Array> {
        self.as_array()
            .ok_or_else(|| Error::type_mismatch(Type::Array, self.value_type()))
    }
}

// Implement PartialEq manually to handle float comparison.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Num(a), Self::Num(b)) => a.to_bits() == b.to_bits(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", format_num(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Array(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Formats a number without a trailing `.0` for integral values.
#[allow(clippy::float_cmp)]
fn format_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}
