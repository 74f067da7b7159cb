//! Target-language syntax tree produced by the tsluau lowering engine.
//!
//! The target has a small, dynamically typed operator set, no bitwise
//! operators and no expression-valued assignment. Pretty-printing lives
//! elsewhere; nodes here are plain owned data.

mod expr;
mod ops;
mod stmt;

pub use expr::{
    BinaryExpression, CallExpression, ComputedIndexExpression, Expression, MethodCallExpression,
    PropertyAccessExpression, TemporaryId, format_number,
};
pub use ops::{AssignmentOperator, BinaryOperator};
pub use stmt::{Assignment, Statement, VariableDeclaration};
