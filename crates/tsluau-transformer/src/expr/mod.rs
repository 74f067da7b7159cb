//! Expression lowering.
//!
//! [`Transformer::lower_expression`] dispatches on the node kind:
//! - identifiers and literals lower directly
//! - binary operators go through classification ([`binary`])
//! - member accesses, calls and `delete` consult the oracles first
//! - transparent wrappers lower their inner expression in place
//!
//! Every child is lowered through [`Transformer::lower_child`] so that the
//! ancestor stack always records how the child relates to its parent.

mod assignment;
mod binary;
mod call;
mod delete;
mod element;
mod literals;
mod property;

use tsluau_core::LoweringResult;
use tsluau_luau::Expression;
use tsluau_syntax::{Expr, Ident};

use crate::{Lowered, SyntaxParent, Transformer};

pub use literals::{escape_string, numeric_text, sanitize_template};

impl<'s> Transformer<'s> {
    /// Lower an expression, emitting any prerequisites into the current frame.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn lower_expression(&mut self, expr: &Expr<'_>) -> LoweringResult<Expression> {
        self.lower_child(expr, SyntaxParent::Other)
    }

    /// Lower an expression in its own frame, returning its prerequisites
    /// separately from its value.
    pub fn capture_expression(&mut self, expr: &Expr<'_>) -> LoweringResult<Lowered> {
        self.capture(|t| t.lower_expression(expr))
    }

    /// Lower `expr` with `parent` recorded as its relationship to the node
    /// currently being lowered.
    pub fn lower_child(
        &mut self,
        expr: &Expr<'_>,
        parent: SyntaxParent,
    ) -> LoweringResult<Expression> {
        self.with_parent(parent, |t| t.dispatch(expr))
    }

    fn dispatch(&mut self, expr: &Expr<'_>) -> LoweringResult<Expression> {
        match expr {
            Expr::Ident(ident) => Ok(lower_identifier(ident)),
            Expr::Literal(literal) => literals::lower_literal(&literal.kind),
            Expr::Template(template) => literals::lower_template(self, template),
            Expr::Binary(binary) => binary::lower_binary(self, binary),

            Expr::PropertyAccess(access) if access.question_dot => self.lower_optional_chain(expr),
            Expr::ElementAccess(access) if access.question_dot => self.lower_optional_chain(expr),
            Expr::PropertyAccess(access) => property::lower_property_access(self, access),
            Expr::ElementAccess(access) => element::lower_element_access(self, access),

            Expr::Call(call) => call::lower_call(self, call),
            Expr::Delete(delete) => delete::lower_delete(self, delete),

            Expr::Paren(paren) => self.lower_child(paren.expr, SyntaxParent::Transparent),
            Expr::NonNull(non_null) => self.lower_child(non_null.expr, SyntaxParent::Transparent),
            Expr::TypeAssertion(assertion) => {
                self.lower_child(assertion.expr, SyntaxParent::Transparent)
            }
        }
    }

    fn lower_optional_chain(&mut self, expr: &Expr<'_>) -> LoweringResult<Expression> {
        let chain = self.services().optional_chain;
        chain.lower_optional_chain(self, expr)
    }
}

/// `undefined` is the target's `nil`; every other name passes through.
pub(crate) fn lower_identifier(ident: &Ident<'_>) -> Expression {
    if ident.name == "undefined" {
        Expression::nil()
    } else {
        Expression::id(ident.name)
    }
}
