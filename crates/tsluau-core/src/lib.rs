//! Shared types for the tsluau expression-lowering crates.
//!
//! - [`Span`]: source locations
//! - [`LoweringError`]: fatal errors that abort a compilation unit
//! - [`Diagnostic`] / [`Diagnostics`]: recoverable, accumulated problems
//! - [`SymbolId`]: hash-based symbol identity
//! - [`Type`] / [`ConstantValue`]: what the type oracle answers with

mod diagnostics;
mod error;
mod span;
mod symbol;
mod types;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{LoweringError, LoweringResult};
pub use span::Span;
pub use symbol::SymbolId;
pub use types::{ConstantValue, Type, TypeFlags};
