//! Expression AST nodes of the source language.
//!
//! Nodes are allocated in a `bumpalo` arena owned by the upstream parser and
//! are never mutated by the lowering engine. Literal nodes keep their raw
//! source text; decoding is the engine's job.

use tsluau_core::Span;

use crate::ast::BinaryOp;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Identifier reference
    Ident(Ident<'ast>),
    /// `object.name` or `object?.name`
    PropertyAccess(&'ast PropertyAccessExpr<'ast>),
    /// `object[index]` or `object?.[index]`
    ElementAccess(&'ast ElementAccessExpr<'ast>),
    /// Binary operation, including assignments
    Binary(&'ast BinaryExpr<'ast>),
    /// Function or method call
    Call(&'ast CallExpr<'ast>),
    /// `delete operand`
    Delete(&'ast DeleteExpr<'ast>),
    /// `(expr)`
    Paren(&'ast ParenExpr<'ast>),
    /// `expr!`
    NonNull(&'ast NonNullExpr<'ast>),
    /// `expr as T`
    TypeAssertion(&'ast TypeAssertionExpr<'ast>),
    /// Boolean, numeric or string literal
    Literal(LiteralExpr<'ast>),
    /// Template with substitutions
    Template(&'ast TemplateExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Ident(e) => e.span,
            Self::PropertyAccess(e) => e.span,
            Self::ElementAccess(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Call(e) => e.span,
            Self::Delete(e) => e.span,
            Self::Paren(e) => e.span,
            Self::NonNull(e) => e.span,
            Self::TypeAssertion(e) => e.span,
            Self::Literal(e) => e.span,
            Self::Template(e) => e.span,
        }
    }

    /// Whether this node only wraps another expression without changing its value.
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Paren(_) | Self::NonNull(_) | Self::TypeAssertion(_))
    }
}

/// An identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'ast> {
    /// The identifier text
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

/// Property access through `.` or `?.`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAccessExpr<'ast> {
    /// The object being accessed
    pub object: &'ast Expr<'ast>,
    /// The member name
    pub name: Ident<'ast>,
    /// Whether the access was written `?.`
    pub question_dot: bool,
    /// Source location
    pub span: Span,
}

/// Element access through `[]` or `?.[]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementAccessExpr<'ast> {
    /// The object being indexed
    pub object: &'ast Expr<'ast>,
    /// The index expression
    pub index: &'ast Expr<'ast>,
    /// Whether the access was written `?.[`
    pub question_dot: bool,
    /// Source location
    pub span: Span,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator token
    pub op: BinaryOp,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// The expression being called
    pub callee: &'ast Expr<'ast>,
    /// Arguments in source order
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A `delete` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteExpr<'ast> {
    /// The deleted member reference
    pub operand: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A parenthesized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    /// The inner expression
    pub expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A non-null assertion (`expr!`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonNullExpr<'ast> {
    /// The asserted expression
    pub expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A type assertion (`expr as T`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeAssertionExpr<'ast> {
    /// The asserted expression
    pub expr: &'ast Expr<'ast>,
    /// Source text of the asserted type
    pub ty: &'ast str,
    /// Source location
    pub span: Span,
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    /// The literal kind
    pub kind: LiteralKind<'ast>,
    /// Source location
    pub span: Span,
}

/// The kind of literal, with raw source text where decoding is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    /// `true` / `false`
    Bool(bool),
    /// Numeric literal as written, e.g. `0xFF` or `1_000`
    Numeric(&'ast str),
    /// String literal as written, including its quotes
    String(&'ast str),
    /// Template literal without substitutions, including its backticks
    NoSubstitutionTemplate(&'ast str),
}

/// A template literal with at least one substitution.
///
/// `` `a${x}b${y}` `` has head `a` and spans `(x, "b")`, `(y, "")`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateExpr<'ast> {
    /// Raw text before the first substitution (no delimiters)
    pub head: &'ast str,
    /// Substitutions with the raw text that follows each one
    pub spans: &'ast [TemplateSpan<'ast>],
    /// Source location
    pub span: Span,
}

/// One substitution of a template and the literal text after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSpan<'ast> {
    /// The substituted expression
    pub expr: &'ast Expr<'ast>,
    /// Raw text up to the next substitution or the closing backtick
    pub literal: &'ast str,
    /// Source location
    pub span: Span,
}
