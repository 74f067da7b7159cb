//! Evaluation-order preservation across sibling lowerings.
//!
//! Lowering an operand can emit prerequisite statements, and prerequisites
//! run before the expression that holds the operand values. When a later
//! operand emits prerequisites, every earlier value that is not a literal or
//! a temporary is therefore copied into a temporary first, so it is still
//! read before the later operand's side effects happen. This includes plain
//! identifiers, which the later operand may assign to.
//!
//! ```text
//! a + (a = 5)    =>   local _0 = a
//!                     a = 5            (from the second operand)
//!                     _0 + 5
//! ```

use tsluau_core::LoweringResult;
use tsluau_luau::Expression;
use tsluau_syntax::Expr;

use crate::{Lowered, Transformer};

impl<'s> Transformer<'s> {
    /// Run each lowering operation in order and return their values,
    /// hoisting earlier values whenever a later operation emits
    /// prerequisites.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn ensure_transform_order<F>(
        &mut self,
        ops: impl IntoIterator<Item = F>,
    ) -> LoweringResult<Vec<Expression>>
    where
        F: FnOnce(&mut Self) -> LoweringResult<Expression>,
    {
        let mut values: Vec<Expression> = Vec::new();
        for op in ops {
            let value = self.sequence_step(values.iter_mut(), op)?;
            values.push(value);
        }
        Ok(values)
    }

    /// Lower a fixed number of sibling expressions left to right.
    pub fn lower_in_order<const N: usize>(
        &mut self,
        exprs: [&Expr<'_>; N],
    ) -> LoweringResult<[Expression; N]> {
        let mut values: [Expression; N] = std::array::from_fn(|_| Expression::Nil);
        for (index, expr) in exprs.into_iter().enumerate() {
            let (earlier, rest) = values.split_at_mut(index);
            let value = self.sequence_step(earlier.iter_mut(), |t| t.lower_expression(expr))?;
            if let Some(slot) = rest.first_mut() {
                *slot = value;
            }
        }
        Ok(values)
    }

    /// Lower a slice of sibling expressions left to right.
    pub fn lower_all_in_order(&mut self, exprs: &[Expr<'_>]) -> LoweringResult<Vec<Expression>> {
        self.ensure_transform_order(
            exprs
                .iter()
                .map(|expr| move |t: &mut Self| t.lower_expression(expr)),
        )
    }

    /// Capture one operation; if it emitted prerequisites, hoist every
    /// value in `earlier` that is not stable before splicing them in.
    pub(crate) fn sequence_step<'e, F>(
        &mut self,
        earlier: impl IntoIterator<Item = &'e mut Expression>,
        op: F,
    ) -> LoweringResult<Expression>
    where
        F: FnOnce(&mut Self) -> LoweringResult<Expression>,
    {
        let Lowered { prereqs, value } = self.capture(op)?;
        if !prereqs.is_empty() {
            for slot in earlier {
                if !slot.is_stable() {
                    let pending = std::mem::replace(slot, Expression::Nil);
                    *slot = self.push_to_temp(pending);
                }
            }
            self.prereq_list(prereqs);
        }
        Ok(value)
    }
}
