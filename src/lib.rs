//! Reckon - a list-style formula calculator.
//!
//! This crate re-exports all layers of the Reckon system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: reckon_runtime    - REPL, CLI, sheet snapshots
//! Layer 2: reckon_sheet      - Entry list, recalculation, stack-entry folding
//! Layer 1: reckon_language   - Lexer, parser, function catalog, evaluator
//! Layer 0: reckon_foundation - Core types (Value, Type, Error)
//! ```

pub use reckon_foundation as foundation;
pub use reckon_language as language;
pub use reckon_runtime as runtime;
pub use reckon_sheet as sheet;
