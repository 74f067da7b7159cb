//! Transformer - the mutable state threaded through every lowering call.
//!
//! A [`Transformer`] owns, for one compilation unit:
//! - a stack of prerequisite-statement frames
//! - the ancestor stack used to answer "what is my syntactic parent?"
//! - the diagnostics collected so far
//! - the temporary counter
//!
//! It is never shared between units. Frames are opened by
//! [`capture`](Transformer::capture) and always closed again, whether or not
//! the captured lowering succeeds.

use tsluau_core::{Diagnostic, DiagnosticKind, Diagnostics, LoweringResult, Span};
use tsluau_luau::{Expression, Statement, TemporaryId};

use crate::TransformOptions;
use crate::oracle::Services;

/// How the node currently being lowered relates to the node above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxParent {
    /// The node is the callee of a call.
    CallCallee,
    /// The node is the operand of `delete`.
    Delete,
    /// The parent is a parenthesis, non-null or type assertion wrapper.
    Transparent,
    /// Any other position.
    Other,
}

/// The result of lowering one expression in its own prerequisite frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Lowered {
    /// Statements that must run before `value` is evaluated, in order.
    pub prereqs: Vec<Statement>,
    /// The lowered value.
    pub value: Expression,
}

/// Per-unit lowering state.
pub struct Transformer<'s> {
    services: Services<'s>,
    options: TransformOptions,
    diagnostics: Diagnostics,
    prereqs: Vec<Vec<Statement>>,
    parents: Vec<SyntaxParent>,
    next_temporary: u32,
}

impl<'s> Transformer<'s> {
    /// Create a transformer for a fresh compilation unit.
    pub fn new(services: Services<'s>, options: TransformOptions) -> Self {
        Self {
            services,
            options,
            diagnostics: Diagnostics::new(),
            prereqs: vec![Vec::new()],
            parents: Vec::new(),
            next_temporary: 0,
        }
    }

    pub fn services(&self) -> Services<'s> {
        self.services
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Record a recoverable diagnostic against `span`.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) {
        tracing::debug!(%span, ?kind, "diagnostic reported");
        self.diagnostics.push(Diagnostic::new(kind, span));
    }

    /// Append a statement to the innermost prerequisite frame.
    pub fn prereq(&mut self, statement: Statement) {
        self.current_frame().push(statement);
    }

    /// Append statements, in order, to the innermost prerequisite frame.
    pub fn prereq_list(&mut self, statements: Vec<Statement>) {
        self.current_frame().extend(statements);
    }

    fn current_frame(&mut self) -> &mut Vec<Statement> {
        if self.prereqs.is_empty() {
            self.prereqs.push(Vec::new());
        }
        let last = self.prereqs.len() - 1;
        &mut self.prereqs[last]
    }

    /// Take everything emitted into the current frame.
    ///
    /// Statement-level callers flush here once per statement boundary.
    pub fn flush_prereqs(&mut self) -> Vec<Statement> {
        std::mem::take(self.current_frame())
    }

    /// Run `op` in a fresh prerequisite frame and return what it emitted
    /// alongside its value.
    pub fn capture<F>(&mut self, op: F) -> LoweringResult<Lowered>
    where
        F: FnOnce(&mut Self) -> LoweringResult<Expression>,
    {
        self.prereqs.push(Vec::new());
        let result = op(self);
        let prereqs = self.prereqs.pop().unwrap_or_default();
        result.map(|value| Lowered { prereqs, value })
    }

    /// Allocate a fresh temporary id.
    pub fn new_temporary(&mut self) -> TemporaryId {
        let id = TemporaryId(self.next_temporary);
        self.next_temporary += 1;
        id
    }

    /// Declare `local _N = value` in the current frame and return `_N`.
    pub fn push_to_temp(&mut self, value: Expression) -> Expression {
        let id = self.new_temporary();
        tracing::trace!(temporary = %id, "hoisting value into temporary");
        self.prereq(Statement::declare(id, value));
        Expression::Temporary(id)
    }

    /// Hoist `value` into a temporary unless it is already simple.
    pub fn push_to_temp_if_complex(&mut self, value: Expression) -> Expression {
        if value.is_simple() {
            value
        } else {
            self.push_to_temp(value)
        }
    }

    /// Run `op` with `parent` recorded as the relationship of the child being
    /// lowered to the current node.
    pub(crate) fn with_parent<T, F>(&mut self, parent: SyntaxParent, op: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        self.parents.push(parent);
        let result = op(self);
        self.parents.pop();
        result
    }

    /// The relationship of the current node to its nearest ancestor that is
    /// not a transparent wrapper. `None` at the root of a lowering.
    pub fn skip_transparent_parents(&self) -> Option<SyntaxParent> {
        self.parents
            .iter()
            .rev()
            .copied()
            .find(|parent| *parent != SyntaxParent::Transparent)
    }

    /// Finish the unit and hand back its diagnostics.
    pub fn finish(self) -> Diagnostics {
        self.diagnostics
    }
}
