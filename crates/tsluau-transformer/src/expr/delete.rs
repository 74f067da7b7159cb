//! `delete` lowering.
//!
//! Only member references can be deleted. The member lowering itself emits
//! the `= nil` write once it sees a `delete` parent.

use tsluau_core::{LoweringError, LoweringResult};
use tsluau_luau::Expression;
use tsluau_syntax::ast::DeleteExpr;
use tsluau_syntax::{Expr, skip_transparent};

use crate::{SyntaxParent, Transformer};

pub(crate) fn lower_delete(
    transformer: &mut Transformer<'_>,
    delete: &DeleteExpr<'_>,
) -> LoweringResult<Expression> {
    match skip_transparent(delete.operand) {
        Expr::PropertyAccess(_) | Expr::ElementAccess(_) => {
            transformer.lower_child(delete.operand, SyntaxParent::Delete)
        }
        other => {
            tracing::debug!(span = %other.span(), "rejected delete operand");
            Err(LoweringError::InvalidDeleteOperand {
                span: delete.operand.span(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestOracle;
    use bumpalo::Bump;
    use tsluau_core::LoweringError;
    use tsluau_syntax::AstBuilder;

    #[test]
    fn deleting_identifier_is_fatal() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let operand = ast.ident("x");
        assert_eq!(
            t.lower_expression(ast.delete(operand)).unwrap_err(),
            LoweringError::InvalidDeleteOperand {
                span: operand.span()
            }
        );
    }
}
