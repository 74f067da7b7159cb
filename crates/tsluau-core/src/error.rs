//! Fatal lowering errors.
//!
//! A [`LoweringError`] aborts the whole compilation unit. Recoverable problems
//! are reported as [`Diagnostic`](crate::Diagnostic)s instead and never reach
//! this type.
//!
//! ```text
//! LoweringError
//! ├── BannedOperator          - `==` / `!=` (loose equality)
//! ├── InvalidAssignmentTarget - left side is not an identifier or member access
//! ├── InvalidDeleteOperand    - `delete` of something that is not a member access
//! └── UnrecognizedOperator    - token with no lowering category (internal defect)
//! ```

use thiserror::Error;

use crate::Span;

/// Errors that abort lowering of the current compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoweringError {
    /// A loose equality operator was used; only strict forms are supported.
    #[error("at {span}: operator '{operator}' is not supported! Use '{replacement}' instead.")]
    BannedOperator {
        operator: &'static str,
        replacement: &'static str,
        span: Span,
    },

    /// An assignment target that cannot be written to.
    #[error("at {span}: invalid assignment target")]
    InvalidAssignmentTarget { span: Span },

    /// A `delete` operand that is not a property or element access.
    #[error("at {span}: the operand of a 'delete' operator must be a property reference")]
    InvalidDeleteOperand { span: Span },

    /// An operator token that no lowering category accepts.
    ///
    /// The parser is expected to reject these, so reaching this is a defect.
    #[error("at {span}: unrecognized operator token '{operator}'")]
    UnrecognizedOperator { operator: &'static str, span: Span },
}

impl LoweringError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            LoweringError::BannedOperator { span, .. } => *span,
            LoweringError::InvalidAssignmentTarget { span } => *span,
            LoweringError::InvalidDeleteOperand { span } => *span,
            LoweringError::UnrecognizedOperator { span, .. } => *span,
        }
    }

    /// Whether this error indicates a defect rather than disallowed user code.
    pub fn is_internal(&self) -> bool {
        matches!(self, LoweringError::UnrecognizedOperator { .. })
    }
}

/// Result alias used throughout the lowering crates.
pub type LoweringResult<T> = Result<T, LoweringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banned_operator_message() {
        let err = LoweringError::BannedOperator {
            operator: "==",
            replacement: "===",
            span: Span::new(4, 9, 2),
        };
        assert_eq!(
            err.to_string(),
            "at 4:9: operator '==' is not supported! Use '===' instead."
        );
        assert_eq!(err.span(), Span::new(4, 9, 2));
        assert!(!err.is_internal());
    }

    #[test]
    fn unrecognized_operator_is_internal() {
        let err = LoweringError::UnrecognizedOperator {
            operator: "in",
            span: Span::point(1, 1),
        };
        assert!(err.is_internal());
        assert!(err.to_string().contains("'in'"));
    }
}
