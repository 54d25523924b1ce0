//! Lexer, parser, function catalog, and evaluator for Reckon expressions.
//!
//! This crate provides:
//! - `Lexer` - Tokenization of entry text
//! - `Parser` - Parsing tokens into an expression tree
//! - `Catalog` / `FuncDef` - Ordered function-signature catalog and the
//!   variadic/vectorizing dispatcher
//! - `EvalContext` - Per-pass evaluation state (variables, RNG)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod eval;
pub mod func;
pub mod lexer;
pub mod op;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::Expr;
pub use eval::{EvalContext, eval_entry};
pub use func::{Catalog, FuncDef, Routine, Variadic};
pub use lexer::Lexer;
pub use op::{BinOp, UNARY_PRECEDENCE, UnOp, precedence};
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
