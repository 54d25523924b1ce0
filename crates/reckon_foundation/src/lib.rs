//! Core types, values, and errors for Reckon.
//!
//! This crate provides:
//! - [`Value`] - The tagged value type every expression evaluates to
//! - [`Type`] - Type descriptors for diagnostics
//! - [`Error`] - Rich error types with call-site context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod types;
mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use types::Type;
pub use value::{Array, Value};
