//! Type descriptors for diagnostics.

use std::fmt;

/// Type descriptor for a [`crate::Value`].
///
/// Used in type-mismatch diagnostics; there is no static type checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// Numeric type (64-bit floating point).
    Num,
    /// Boolean type.
    Bool,
    /// String type.
    Str,
    /// Array type.
    Array,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num => write!(f, "num"),
            Self::Bool => write!(f, "bool"),
            Self::Str => write!(f, "str"),
            Self::Array => write!(f, "array"),
        }
    }
}
