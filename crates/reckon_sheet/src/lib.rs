//! Entry list, recalculation, and the stack-entry resolver for Reckon.
//!
//! This crate provides:
//! - `Entry` / `RadixMode` - One line of the calculation list and its
//!   answer display radix
//! - `RpnRun` / `try_resolve` - The postfix-to-infix stack-entry resolver
//! - `Sheet` - The entry list with whole-list recalculation and run commit

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entry;
pub mod rpn;
pub mod sheet;

pub use entry::{Entry, RadixMode};
pub use rpn::{RpnRun, try_resolve};
pub use sheet::Sheet;
