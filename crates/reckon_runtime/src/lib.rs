//! REPL, CLI, and snapshot persistence for Reckon.
//!
//! This crate provides:
//! - `LineEditor` / `RustylineEditor` - Swappable line-editing seam
//! - `Repl` - The interactive calculation-list loop
//! - `serialize` / `Snapshot` - `MessagePack` persistence of a sheet

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod serialize;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use serialize::Snapshot;
