//! Error types for the Reckon system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

use crate::types::Type;

/// Convenience alias for results carrying a Reckon [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Reckon operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a definition error naming the offending prototype.
    #[must_use]
    pub fn invalid_prototype(prototype: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPrototype {
            prototype: prototype.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unresolved-call error.
    #[must_use]
    pub fn unknown_function(name: impl Into<String>, argc: usize) -> Self {
        Self::new(ErrorKind::UnknownFunction {
            name: name.into(),
            argc,
        })
    }

    /// Creates a too-few-arguments error.
    #[must_use]
    pub fn too_few_arguments(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooFewArguments { name: name.into() })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a parse error at the given byte offset.
    #[must_use]
    pub fn parse(message: impl Into<String>, position: usize) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            position,
        })
    }

    /// Creates an undefined variable error.
    #[must_use]
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedVariable(name.into()))
    }

    /// Creates a domain error for an argument outside a routine's domain.
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Domain(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed function prototype (catalog build time).
    #[error("invalid function prototype \"{prototype}\": {reason}")]
    InvalidPrototype {
        /// The offending prototype string.
        prototype: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No catalog descriptor matched a call's name and argument count.
    #[error("function {name}({argc}) was not found")]
    UnknownFunction {
        /// The call name.
        name: String,
        /// The number of arguments at the call site.
        argc: usize,
    },

    /// A matched variadic descriptor received fewer than its minimum arguments.
    #[error("too few arguments to {name}")]
    TooFewArguments {
        /// The function name.
        name: String,
    },

    /// Type mismatch during evaluation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Source text failed to parse.
    #[error("parse error at {position}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Byte offset in the source text.
        position: usize,
    },

    /// Variable was read before being defined.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Argument outside a routine's domain.
    #[error("{0}")]
    Domain(String),

    /// `assert(x)` received a false value.
    #[error("assertion failed")]
    AssertionFailed,

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Snapshot encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Context for attributing an error to a source position.
///
/// Positions are byte offsets into the entry text the error arose from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Byte offset where the offending text starts.
    pub start: usize,
    /// Byte offset where the offending text ends (exclusive).
    pub end: usize,
}

impl ErrorContext {
    /// Creates a context for the given byte range.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
