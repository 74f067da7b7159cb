//! The tsluau expression-lowering engine.
//!
//! Lowers source-language expressions into target expressions plus the
//! prerequisite statements that must run before them. The target has no
//! expression-valued assignment, no bitwise operators and stricter indexing
//! rules, so lowering is mostly about keeping side effects in source order
//! while moving them out of expressions.
//!
//! # Example
//!
//! ```ignore
//! let mut transformer = Transformer::new(services, TransformOptions::default());
//! let Lowered { prereqs, value } = transformer.capture_expression(expr)?;
//! let diagnostics = transformer.finish();
//! ```
//!
//! # Modules
//!
//! - [`operators`]: binary token classification
//! - [`oracle`]: traits for the type checker, macro catalog and the
//!   logical/optional-chain lowerings this crate delegates to
//! - [`writable`]: assignment target resolution
//! - [`indexable`]: parenthesizing non-indexable objects

mod expr;
pub mod indexable;
pub mod operators;
mod options;
mod order;
pub mod oracle;
mod transformer;
pub mod writable;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use expr::{escape_string, numeric_text, sanitize_template};
pub use indexable::convert_to_indexable;
pub use options::TransformOptions;
pub use oracle::{
    LogicalLowering, MacroRegistry, MacroTable, MethodClassificationOracle, OptionalChainLowering,
    PropertyCallMacro, Services, TypeOracle,
};
pub use transformer::{Lowered, SyntaxParent, Transformer};
pub use writable::{Accessor, WritableLocation, resolve_writable_location};
