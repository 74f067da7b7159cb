//! Assignment lowering.
//!
//! Assignments are statements in the target, so every assignment becomes a
//! prerequisite statement and the expression itself lowers to the assigned
//! value:
//!
//! ```text
//! y = (x = f())     =>   local _0 = f()
//!                        x = _0
//!                        y = _0
//! obj.n **= 2       =>   obj.n = obj.n ^ 2      (result: obj.n)
//! ```

use tsluau_core::LoweringResult;
use tsluau_luau::{AssignmentOperator, Expression, Statement};
use tsluau_syntax::{BinaryExpr, BinaryOp};

use crate::Transformer;
use crate::operators::{AssignmentKind, native_compound, simple_binary};
use crate::writable::resolve_writable_location;

/// Lower `left = right` or `left op= right`.
pub(crate) fn lower_assignment(
    transformer: &mut Transformer<'_>,
    binary: &BinaryExpr<'_>,
    kind: AssignmentKind,
) -> LoweringResult<Expression> {
    match kind {
        AssignmentKind::Simple => lower_simple_assignment(transformer, binary),
        AssignmentKind::Compound(operator) => {
            lower_compound_assignment(transformer, binary, operator)
        }
    }
}

fn lower_simple_assignment(
    transformer: &mut Transformer<'_>,
    binary: &BinaryExpr<'_>,
) -> LoweringResult<Expression> {
    let location = resolve_writable_location(transformer, binary.left)?;
    let value = transformer.lower_expression(binary.right)?;
    let value = transformer.push_to_temp_if_complex(value);

    transformer.prereq(Statement::assign(
        location.to_expression(),
        AssignmentOperator::Equals,
        value.clone(),
    ));
    Ok(value)
}

fn lower_compound_assignment(
    transformer: &mut Transformer<'_>,
    binary: &BinaryExpr<'_>,
    operator: BinaryOp,
) -> LoweringResult<Expression> {
    let location = resolve_writable_location(transformer, binary.left)?;
    let value = transformer.lower_expression(binary.right)?;
    let target = location.to_expression();

    let native = native_compound(operator)
        .filter(|_| transformer.options().native_compound_assignment);
    let statement = match native {
        Some(assignment_operator) => Statement::assign(target, assignment_operator, value),
        None => {
            let combined =
                simple_binary(operator, binary.span)?.build(location.to_expression(), value);
            Statement::assign(target, AssignmentOperator::Equals, combined)
        }
    };
    transformer.prereq(statement);

    Ok(location.to_expression())
}
