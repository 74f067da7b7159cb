//! Source-language expression syntax for the tsluau lowering engine.
//!
//! Tokenizing and parsing happen upstream. This crate only defines the
//! arena-allocated tree the parser hands over, plus:
//! - [`AstBuilder`] for assembling trees without a parser
//! - [`skip_transparent`] for looking through `(x)`, `x!` and `x as T`

pub mod ast;
mod traversal;

pub use ast::{AstBuilder, BinaryExpr, BinaryOp, Expr, Ident, LiteralKind};
pub use traversal::skip_transparent;
