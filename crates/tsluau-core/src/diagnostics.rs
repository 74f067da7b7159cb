//! Recoverable diagnostics.
//!
//! Diagnostics are collected while lowering continues with a placeholder node,
//! so a single run surfaces every problem in a file instead of stopping at the
//! first one.

use std::fmt;

use thiserror::Error;

use crate::Span;

/// The kind of a recoverable diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DiagnosticKind {
    /// A member was accessed on a value of type `any`.
    #[error("using values of type `any` is not supported! Use `unknown` instead")]
    NoAny,
    /// A macro member was referenced without being called.
    #[error("macro methods must be called directly")]
    NoMacroWithoutCall,
    /// A method was referenced without being called.
    #[error("cannot index a method without calling it")]
    NoIndexWithoutCall,
    /// `.prototype` was accessed.
    #[error("`prototype` is not supported")]
    NoPrototype,
}

/// A single diagnostic pointing at a source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Span of the offending source node.
    pub span: Span,
}

impl Diagnostic {
    /// Create a diagnostic.
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: error: {}", self.span, self.kind)
    }
}

/// An append-only collection of diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any diagnostic has been reported.
    pub fn has_errors(&self) -> bool {
        !self.items.is_empty()
    }

    /// Count the diagnostics of one kind.
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    /// Iterate over diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.items {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}
