//! Binary expression lowering.

use tsluau_core::{LoweringError, LoweringResult};
use tsluau_luau::Expression;
use tsluau_syntax::BinaryExpr;

use super::assignment;
use crate::Transformer;
use crate::operators::{OperatorClass, classify};

/// Lower a binary expression according to its operator's category.
pub(crate) fn lower_binary(
    transformer: &mut Transformer<'_>,
    binary: &BinaryExpr<'_>,
) -> LoweringResult<Expression> {
    match classify(binary.op, binary.span)? {
        OperatorClass::Banned { replacement } => {
            tracing::debug!(operator = %binary.op, span = %binary.span, "banned operator");
            Err(LoweringError::BannedOperator {
                operator: binary.op.as_str(),
                replacement,
                span: binary.span,
            })
        }
        OperatorClass::Logical => {
            let logical = transformer.services().logical;
            logical.lower_logical(transformer, binary)
        }
        OperatorClass::Assignment(kind) => assignment::lower_assignment(transformer, binary, kind),
        OperatorClass::SimpleBinary(simple) => {
            let [left, right] = transformer.lower_in_order([binary.left, binary.right])?;
            Ok(simple.build(left, right))
        }
    }
}
