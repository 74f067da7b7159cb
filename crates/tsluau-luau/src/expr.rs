//! Expression nodes of the target grammar.

use std::fmt;

use crate::BinaryOperator;

/// Identifier of a compiler-generated local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemporaryId(pub u32);

impl fmt::Display for TemporaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}", self.0)
    }
}

/// A target expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `nil`
    Nil,
    /// `true`
    True,
    /// `false`
    False,
    /// Numeric literal text, always decimal.
    Number(String),
    /// String literal body, already escaped for double quotes.
    String(String),
    /// A named identifier. The empty name is the placeholder node.
    Identifier(String),
    /// A compiler-generated local.
    Temporary(TemporaryId),
    /// `left op right`
    Binary(Box<BinaryExpression>),
    /// `object.name`
    PropertyAccess(Box<PropertyAccessExpression>),
    /// `object[index]`
    ComputedIndex(Box<ComputedIndexExpression>),
    /// `callee(args)`
    Call(Box<CallExpression>),
    /// `object:name(args)`
    MethodCall(Box<MethodCallExpression>),
    /// `(expression)`
    Parenthesized(Box<Expression>),
}

/// `left op right`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
}

/// `object.name`
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAccessExpression {
    pub object: Expression,
    pub name: String,
}

/// `object[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedIndexExpression {
    pub object: Expression,
    pub index: Expression,
}

/// `callee(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Expression,
    pub args: Vec<Expression>,
}

/// `object:name(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallExpression {
    pub object: Expression,
    pub name: String,
    pub args: Vec<Expression>,
}

impl Expression {
    /// `nil`
    pub fn nil() -> Self {
        Expression::Nil
    }

    /// `true` or `false`
    pub fn boolean(value: bool) -> Self {
        if value {
            Expression::True
        } else {
            Expression::False
        }
    }

    /// A numeric literal from already-decimal text.
    pub fn number(text: impl Into<String>) -> Self {
        Expression::Number(text.into())
    }

    /// A numeric literal from a value.
    pub fn number_value(value: f64) -> Self {
        Expression::Number(format_number(value))
    }

    /// A string literal from an already-escaped body.
    pub fn string(body: impl Into<String>) -> Self {
        Expression::String(body.into())
    }

    /// A named identifier.
    pub fn id(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    /// The placeholder left where a node could not be lowered.
    pub fn empty_id() -> Self {
        Expression::Identifier(String::new())
    }

    /// Whether this is the placeholder node.
    pub fn is_empty_id(&self) -> bool {
        matches!(self, Expression::Identifier(name) if name.is_empty())
    }

    /// `left op right`
    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(Box::new(BinaryExpression {
            left,
            operator,
            right,
        }))
    }

    /// `object.name`
    pub fn property(object: Expression, name: impl Into<String>) -> Self {
        Expression::PropertyAccess(Box::new(PropertyAccessExpression {
            object,
            name: name.into(),
        }))
    }

    /// `object[index]`
    pub fn index(object: Expression, index: Expression) -> Self {
        Expression::ComputedIndex(Box::new(ComputedIndexExpression { object, index }))
    }

    /// `callee(args)`
    pub fn call(callee: Expression, args: Vec<Expression>) -> Self {
        Expression::Call(Box::new(CallExpression { callee, args }))
    }

    /// `object:name(args)`
    pub fn method_call(object: Expression, name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::MethodCall(Box::new(MethodCallExpression {
            object,
            name: name.into(),
            args,
        }))
    }

    /// `(expression)`
    pub fn parenthesized(expression: Expression) -> Self {
        Expression::Parenthesized(Box::new(expression))
    }

    /// Whether evaluating this expression can have no side effects and
    /// always yields the same value, so it may be duplicated freely.
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Expression::Nil
                | Expression::True
                | Expression::False
                | Expression::Number(_)
                | Expression::String(_)
                | Expression::Identifier(_)
                | Expression::Temporary(_)
        )
    }

    /// Whether this expression yields the same value no matter what runs
    /// between its creation and its use.
    ///
    /// Literals and temporaries qualify. Identifiers do not, since a later
    /// assignment can change what they read.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Expression::Nil
                | Expression::True
                | Expression::False
                | Expression::Number(_)
                | Expression::String(_)
                | Expression::Temporary(_)
        )
    }

    /// Whether the grammar accepts this expression as the object of `.`,
    /// `[]` or `:` without parentheses.
    pub fn is_indexable(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_)
                | Expression::Temporary(_)
                | Expression::PropertyAccess(_)
                | Expression::ComputedIndex(_)
                | Expression::Call(_)
                | Expression::MethodCall(_)
                | Expression::Parenthesized(_)
        )
    }

    /// Whether this expression may appear on the left of an assignment.
    pub fn is_writable(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_)
                | Expression::Temporary(_)
                | Expression::PropertyAccess(_)
                | Expression::ComputedIndex(_)
        )
    }
}

/// Format a number the way the source language prints it, in decimal.
///
/// Integral values print without a fractional part; non-finite values use
/// the target's spelling.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "0/0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "math.huge" } else { "-math.huge" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{:.0}", value);
    }
    format!("{}", value)
}
