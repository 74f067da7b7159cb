//! Operators of the target grammar.

use std::fmt;

/// Binary operators the target grammar supports natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^` (exponentiation)
    Caret,
    /// `..` (string concatenation)
    DotDot,
    /// `==`
    EqualsEquals,
    /// `~=`
    TildeEquals,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanEquals,
    /// `>=`
    GreaterThanEquals,
}

impl BinaryOperator {
    /// The target source text of this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Asterisk => "*",
            BinaryOperator::Slash => "/",
            BinaryOperator::Percent => "%",
            BinaryOperator::Caret => "^",
            BinaryOperator::DotDot => "..",
            BinaryOperator::EqualsEquals => "==",
            BinaryOperator::TildeEquals => "~=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanEquals => "<=",
            BinaryOperator::GreaterThanEquals => ">=",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignment operators of the target grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    /// `=`
    Equals,
    /// `+=`
    PlusEquals,
    /// `-=`
    MinusEquals,
    /// `*=`
    AsteriskEquals,
    /// `/=`
    SlashEquals,
    /// `%=`
    PercentEquals,
}

impl AssignmentOperator {
    /// The target source text of this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Equals => "=",
            AssignmentOperator::PlusEquals => "+=",
            AssignmentOperator::MinusEquals => "-=",
            AssignmentOperator::AsteriskEquals => "*=",
            AssignmentOperator::SlashEquals => "/=",
            AssignmentOperator::PercentEquals => "%=",
        }
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
