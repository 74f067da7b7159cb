//! Call lowering.
//!
//! `object.member(args)` is resolved in this order:
//! - `object` typed `any`: diagnostic, placeholder
//! - member bound to a property-call macro: the macro's expansion
//! - member is a method: `object:member(args)`
//! - anything else: a plain call of the lowered callee
//!
//! The object (or callee) and the arguments are lowered left to right
//! through the order-preserving sequencer.

use tsluau_core::{DiagnosticKind, LoweringResult};
use tsluau_luau::Expression;
use tsluau_syntax::ast::CallExpr;
use tsluau_syntax::{Expr, skip_transparent};

use crate::indexable::convert_to_indexable;
use crate::{SyntaxParent, Transformer};

pub(crate) fn lower_call(
    transformer: &mut Transformer<'_>,
    call: &CallExpr<'_>,
) -> LoweringResult<Expression> {
    let callee = skip_transparent(call.callee);

    if let Expr::PropertyAccess(access) = callee
        && !access.question_dot
    {
        let services = transformer.services();

        if services.types.resolve_type(access.object).is_any() {
            transformer.report(DiagnosticKind::NoAny, access.object.span());
            return Ok(Expression::empty_id());
        }

        let ty = services.types.resolve_type(callee);
        if let Some(symbol) = services.types.resolve_first_symbol(&ty)
            && let Some(expander) = services.macros.lookup_property_call_macro(symbol)
        {
            tracing::trace!(member = access.name.name, ?symbol, "expanding property call macro");
            let (object, args) =
                lower_head_and_args(transformer, access.object, SyntaxParent::Other, call.args)?;
            return expander.expand(transformer, object, args);
        }

        if services.methods.is_method_reference(callee) {
            let (object, args) =
                lower_head_and_args(transformer, access.object, SyntaxParent::Other, call.args)?;
            return Ok(Expression::method_call(
                convert_to_indexable(object),
                access.name.name,
                args,
            ));
        }
    }

    let (callee, args) =
        lower_head_and_args(transformer, call.callee, SyntaxParent::CallCallee, call.args)?;
    Ok(Expression::call(convert_to_indexable(callee), args))
}

/// Lower `head` followed by `args`, preserving source evaluation order.
fn lower_head_and_args(
    transformer: &mut Transformer<'_>,
    head: &Expr<'_>,
    head_parent: SyntaxParent,
    args: &[Expr<'_>],
) -> LoweringResult<(Expression, Vec<Expression>)> {
    let mut head = transformer.lower_child(head, head_parent)?;
    let mut values: Vec<Expression> = Vec::with_capacity(args.len());
    for arg in args {
        let earlier = std::iter::once(&mut head).chain(values.iter_mut());
        let value = transformer.sequence_step(earlier, |t| t.lower_expression(arg))?;
        values.push(value);
    }
    Ok((head, values))
}
