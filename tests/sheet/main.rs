//! Integration tests for Layer 2: Sheet
//!
//! Tests for stack-entry resolution and whole-sheet recalculation.

mod recalc;
mod resolver;
