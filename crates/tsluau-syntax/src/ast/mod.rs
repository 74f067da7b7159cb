//! Abstract syntax tree of source expressions.

mod builder;
mod expr;
mod ops;

pub use builder::AstBuilder;
pub use expr::*;
pub use ops::BinaryOp;
