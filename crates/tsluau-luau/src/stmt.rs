//! Statement nodes of the target grammar.
//!
//! Only the statements expression lowering emits as prerequisites are
//! modelled: assignments and declarations of temporaries.

use crate::{AssignmentOperator, Expression, TemporaryId};

/// A target statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `left op right`
    Assignment(Assignment),
    /// `local left = right`
    VariableDeclaration(VariableDeclaration),
}

/// `left op right` where `left` is writable.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub left: Expression,
    pub operator: AssignmentOperator,
    pub right: Expression,
}

/// `local left = right`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub left: TemporaryId,
    pub right: Expression,
}

impl Statement {
    /// `left op right`
    pub fn assign(left: Expression, operator: AssignmentOperator, right: Expression) -> Self {
        debug_assert!(left.is_writable(), "assignment to non-writable expression");
        Statement::Assignment(Assignment {
            left,
            operator,
            right,
        })
    }

    /// `local left = right`
    pub fn declare(left: TemporaryId, right: Expression) -> Self {
        Statement::VariableDeclaration(VariableDeclaration { left, right })
    }

    /// The assignment, if this statement is one.
    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            Statement::Assignment(assignment) => Some(assignment),
            Statement::VariableDeclaration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let assign = Statement::assign(
            Expression::property(Expression::id("obj"), "x"),
            AssignmentOperator::Equals,
            Expression::nil(),
        );
        assert!(assign.as_assignment().is_some());

        let declare = Statement::declare(TemporaryId(0), Expression::id("y"));
        assert!(declare.as_assignment().is_none());
    }
}
