//! One-shot lowering of a single expression.

use tsluau_core::{Diagnostics, LoweringResult};
use tsluau_luau::{Expression, Statement};
use tsluau_syntax::Expr;
use tsluau_transformer::{Lowered, Services, TransformOptions, Transformer};

/// Everything produced by lowering one expression.
#[derive(Debug, Clone)]
pub struct LoweringOutput {
    /// Statements to emit before the value, in order.
    pub prereqs: Vec<Statement>,
    /// The lowered value.
    pub value: Expression,
    /// Recoverable problems found along the way.
    pub diagnostics: Diagnostics,
}

impl LoweringOutput {
    /// Whether any diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Lower `expr` as its own compilation unit.
///
/// A fatal error discards everything, including diagnostics collected before
/// it.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn lower(
    services: Services<'_>,
    options: TransformOptions,
    expr: &Expr<'_>,
) -> LoweringResult<LoweringOutput> {
    let mut transformer = Transformer::new(services, options);
    let Lowered { prereqs, value } = transformer.capture_expression(expr).inspect_err(|err| {
        tracing::debug!(span = %err.span(), error = %err, "lowering aborted");
    })?;
    let diagnostics = transformer.finish();
    tracing::debug!(
        prereqs = prereqs.len(),
        diagnostics = diagnostics.len(),
        "lowered expression"
    );
    Ok(LoweringOutput {
        prereqs,
        value,
        diagnostics,
    })
}
