//! tsluau - the expression-lowering core of a TypeScript-to-Luau compiler.
//!
//! This crate ties the workspace together:
//! - [`syntax`]: the arena-allocated source expression tree
//! - [`luau`]: the target expression and statement tree
//! - [`transformer`]: the lowering engine and its collaborator traits
//! - [`core`]: spans, errors, diagnostics and type information
//!
//! [`lower`] runs one expression through a fresh [`Transformer`] and returns
//! everything it produced.

mod unit;

pub use tsluau_core as core;
pub use tsluau_luau as luau;
pub use tsluau_syntax as syntax;
pub use tsluau_transformer as transformer;

pub use tsluau_core::{
    ConstantValue, Diagnostic, DiagnosticKind, Diagnostics, LoweringError, LoweringResult, Span,
    SymbolId, Type, TypeFlags,
};
pub use tsluau_transformer::{Lowered, MacroTable, Services, TransformOptions, Transformer};
pub use unit::{LoweringOutput, lower};

/// Commonly used items for embedding the engine.
pub mod prelude {
    pub use tsluau_core::{ConstantValue, DiagnosticKind, LoweringError, Span, SymbolId, Type};
    pub use tsluau_luau::{AssignmentOperator, BinaryOperator, Expression, Statement};
    pub use tsluau_syntax::{AstBuilder, BinaryOp, Expr};
    pub use tsluau_transformer::oracle::*;
    pub use tsluau_transformer::{Lowered, TransformOptions, Transformer};

    pub use crate::{LoweringOutput, lower};
}
