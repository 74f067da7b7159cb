//! Test harness infrastructure for lowering integration tests.
//!
//! [`Fixture`] wraps the engine's span-keyed `TestOracle`, which plays every
//! external collaborator at once, and adds chained setup plus the
//! `tsluau::lower` entry point.

#![allow(dead_code)]

use tsluau::LoweringResult;
use tsluau::prelude::*;
use tsluau::transformer::test_support::TestOracle;

pub use tsluau::transformer::test_support::LengthMacro;

/// Oracle tables for one test.
#[derive(Default)]
pub struct Fixture {
    oracle: TestOracle,
}

impl Fixture {
    /// Create an empty fixture
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    /// Give `expr` a static type
    pub fn with_type(&mut self, expr: &Expr<'_>, ty: Type) -> &mut Self {
        self.oracle.set_type(expr, ty);
        self
    }

    /// Give `expr` a compile-time value
    pub fn with_constant(&mut self, expr: &Expr<'_>, value: ConstantValue) -> &mut Self {
        self.oracle.set_constant(expr, value);
        self
    }

    /// Classify `expr` as a method reference
    pub fn with_method(&mut self, expr: &Expr<'_>) -> &mut Self {
        self.oracle.mark_method(expr);
        self
    }

    /// Bind a property-call macro to `symbol`
    pub fn with_macro(
        &mut self,
        symbol: SymbolId,
        expander: Box<dyn PropertyCallMacro>,
    ) -> &mut Self {
        self.oracle.register_macro(symbol, expander);
        self
    }

    /// How many times logical lowering was delegated
    pub fn logical_calls(&self) -> usize {
        self.oracle.logical_calls()
    }

    /// How many times optional-chain lowering was delegated
    pub fn optional_chain_calls(&self) -> usize {
        self.oracle.optional_chain_calls()
    }

    /// Lower `expr` with default options
    pub fn lower(&self, expr: &Expr<'_>) -> LoweringResult<LoweringOutput> {
        lower(self.oracle.services(), TransformOptions::default(), expr)
    }

    /// Lower `expr` with the given options
    pub fn lower_with(
        &self,
        options: TransformOptions,
        expr: &Expr<'_>,
    ) -> LoweringResult<LoweringOutput> {
        lower(self.oracle.services(), options, expr)
    }
}

/// `object.push(v)` → `table.insert(object, v)`, hoisting the object first.
pub struct PushMacro;

impl PropertyCallMacro for PushMacro {
    fn expand(
        &self,
        transformer: &mut Transformer<'_>,
        object: Expression,
        args: Vec<Expression>,
    ) -> LoweringResult<Expression> {
        let object = transformer.push_to_temp_if_complex(object);
        let mut call_args = vec![object];
        call_args.extend(args);
        Ok(Expression::call(
            Expression::property(Expression::id("table"), "insert"),
            call_args,
        ))
    }
}

/// Route engine logs to the test writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// The targets of every assignment statement, in order.
pub fn assigned(prereqs: &[Statement]) -> Vec<Expression> {
    prereqs
        .iter()
        .filter_map(|statement| statement.as_assignment().map(|a| a.left.clone()))
        .collect()
}
