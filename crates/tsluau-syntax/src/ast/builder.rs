//! Arena-backed construction of expression trees.
//!
//! Parsing is done upstream; this builder is how embedders, tests and
//! benchmarks assemble trees directly. Every node gets a distinct span on
//! line 1 so that span-keyed oracles can tell nodes apart.
//!
//! ```
//! use bumpalo::Bump;
//! use tsluau_syntax::{AstBuilder, BinaryOp};
//!
//! let arena = Bump::new();
//! let ast = AstBuilder::new(&arena);
//! // obj.count += 1
//! let target = ast.property(ast.ident("obj"), "count");
//! let expr = ast.binary(target, BinaryOp::AddAssign, ast.number("1"));
//! assert!(matches!(expr, tsluau_syntax::Expr::Binary(_)));
//! ```

use std::cell::Cell;

use bumpalo::Bump;
use tsluau_core::Span;

use crate::ast::{
    BinaryExpr, BinaryOp, CallExpr, DeleteExpr, ElementAccessExpr, Expr, Ident, LiteralExpr,
    LiteralKind, NonNullExpr, ParenExpr, PropertyAccessExpr, TemplateExpr, TemplateSpan,
    TypeAssertionExpr,
};

/// Builds expression nodes in an arena.
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    next_col: Cell<u32>,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder allocating into `arena`.
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            next_col: Cell::new(1),
        }
    }

    /// The arena nodes are allocated in.
    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    fn span(&self, len: usize) -> Span {
        let col = self.next_col.get();
        let len = len.max(1) as u32;
        self.next_col.set(col + len);
        Span::new(1, col, len)
    }

    fn alloc(&self, expr: Expr<'ast>) -> &'ast Expr<'ast> {
        self.arena.alloc(expr)
    }

    fn name(&self, name: &str) -> Ident<'ast> {
        Ident {
            name: self.arena.alloc_str(name),
            span: self.span(name.len()),
        }
    }

    /// `name`
    pub fn ident(&self, name: &str) -> &'ast Expr<'ast> {
        let ident = self.name(name);
        self.alloc(Expr::Ident(ident))
    }

    /// `object.name`
    pub fn property(&self, object: &'ast Expr<'ast>, name: &str) -> &'ast Expr<'ast> {
        self.property_access(object, name, false)
    }

    /// `object?.name`
    pub fn optional_property(&self, object: &'ast Expr<'ast>, name: &str) -> &'ast Expr<'ast> {
        self.property_access(object, name, true)
    }

    fn property_access(
        &self,
        object: &'ast Expr<'ast>,
        name: &str,
        question_dot: bool,
    ) -> &'ast Expr<'ast> {
        let name = self.name(name);
        let node = self.arena.alloc(PropertyAccessExpr {
            object,
            name,
            question_dot,
            span: self.span(name.span.len() as usize + 1),
        });
        self.alloc(Expr::PropertyAccess(node))
    }

    /// `object[index]`
    pub fn element(&self, object: &'ast Expr<'ast>, index: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(ElementAccessExpr {
            object,
            index,
            question_dot: false,
            span: self.span(2),
        });
        self.alloc(Expr::ElementAccess(node))
    }

    /// `left op right`
    pub fn binary(
        &self,
        left: &'ast Expr<'ast>,
        op: BinaryOp,
        right: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(BinaryExpr {
            left,
            op,
            right,
            span: self.span(op.as_str().len()),
        });
        self.alloc(Expr::Binary(node))
    }

    /// `callee(args...)`
    pub fn call(&self, callee: &'ast Expr<'ast>, args: &[&'ast Expr<'ast>]) -> &'ast Expr<'ast> {
        let args = self.arena.alloc_slice_fill_iter(args.iter().map(|arg| **arg));
        let node = self.arena.alloc(CallExpr {
            callee,
            args,
            span: self.span(2),
        });
        self.alloc(Expr::Call(node))
    }

    /// `delete operand`
    pub fn delete(&self, operand: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(DeleteExpr {
            operand,
            span: self.span("delete".len()),
        });
        self.alloc(Expr::Delete(node))
    }

    /// `(expr)`
    pub fn paren(&self, expr: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(ParenExpr {
            expr,
            span: self.span(2),
        });
        self.alloc(Expr::Paren(node))
    }

    /// `expr!`
    pub fn non_null(&self, expr: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(NonNullExpr {
            expr,
            span: self.span(1),
        });
        self.alloc(Expr::NonNull(node))
    }

    /// `expr as ty`
    pub fn type_assertion(&self, expr: &'ast Expr<'ast>, ty: &str) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(TypeAssertionExpr {
            expr,
            ty: self.arena.alloc_str(ty),
            span: self.span(ty.len() + 4),
        });
        self.alloc(Expr::TypeAssertion(node))
    }

    fn literal(&self, kind: LiteralKind<'ast>, len: usize) -> &'ast Expr<'ast> {
        self.alloc(Expr::Literal(LiteralExpr {
            kind,
            span: self.span(len),
        }))
    }

    /// `true` / `false`
    pub fn boolean(&self, value: bool) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Bool(value), if value { 4 } else { 5 })
    }

    /// A numeric literal with its raw text, e.g. `0xFF`.
    pub fn number(&self, raw: &str) -> &'ast Expr<'ast> {
        let raw: &'ast str = self.arena.alloc_str(raw);
        self.literal(LiteralKind::Numeric(raw), raw.len())
    }

    /// A string literal with its raw text including quotes, e.g. `"hi"`.
    pub fn string(&self, raw: &str) -> &'ast Expr<'ast> {
        let raw: &'ast str = self.arena.alloc_str(raw);
        self.literal(LiteralKind::String(raw), raw.len())
    }

    /// A template without substitutions, raw text including backticks.
    pub fn template_literal(&self, raw: &str) -> &'ast Expr<'ast> {
        let raw: &'ast str = self.arena.alloc_str(raw);
        self.literal(LiteralKind::NoSubstitutionTemplate(raw), raw.len())
    }

    /// A template with substitutions: `` `head${e0}lit0${e1}lit1` ``.
    pub fn template(&self, head: &str, spans: &[(&'ast Expr<'ast>, &str)]) -> &'ast Expr<'ast> {
        let head: &'ast str = self.arena.alloc_str(head);
        let spans = self
            .arena
            .alloc_slice_fill_iter(spans.iter().map(|(expr, literal)| TemplateSpan {
                expr: *expr,
                literal: self.arena.alloc_str(literal),
                span: self.span(literal.len() + 3),
            }));
        let node = self.arena.alloc(TemplateExpr {
            head,
            spans,
            span: self.span(head.len() + 2),
        });
        self.alloc(Expr::Template(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_distinct() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let a = ast.ident("a");
        let b = ast.ident("a");
        assert_ne!(a.span(), b.span());
    }

    #[test]
    fn property_keeps_name_and_object() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let expr = ast.property(ast.ident("obj"), "field");
        let Expr::PropertyAccess(access) = expr else {
            panic!("expected property access");
        };
        assert_eq!(access.name.name, "field");
        assert!(!access.question_dot);
        assert!(matches!(access.object, Expr::Ident(id) if id.name == "obj"));
    }

    #[test]
    fn template_spans_in_order() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let expr = ast.template("a", &[(ast.ident("x"), "b"), (ast.ident("y"), "")]);
        let Expr::Template(template) = expr else {
            panic!("expected template");
        };
        assert_eq!(template.head, "a");
        assert_eq!(template.spans.len(), 2);
        assert_eq!(template.spans[0].literal, "b");
        assert_eq!(template.spans[1].literal, "");
    }

    #[test]
    fn call_copies_arguments() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let expr = ast.call(ast.ident("f"), &[ast.number("1"), ast.string("\"s\"")]);
        let Expr::Call(call) = expr else {
            panic!("expected call");
        };
        assert_eq!(call.args.len(), 2);
    }
}
