//! Span-keyed collaborators for tests.
//!
//! Enabled for this crate's own tests and, through the `test-support`
//! feature, for dependents' integration tests.

use std::cell::Cell;

use rustc_hash::{FxHashMap, FxHashSet};
use tsluau_core::{ConstantValue, LoweringResult, Span, SymbolId, Type, TypeFlags};
use tsluau_luau::Expression;
use tsluau_syntax::{BinaryExpr, Expr, skip_transparent};

use crate::oracle::{
    LogicalLowering, MacroRegistry, MacroTable, MethodClassificationOracle, OptionalChainLowering,
    PropertyCallMacro, Services, TypeOracle,
};
use crate::{TransformOptions, Transformer};

/// Answers oracle questions from tables keyed by node span.
///
/// Unregistered nodes are plain objects: not `any`, not strings, no symbol.
/// Logical operators lower to `logical(left, right)`; optional accesses hoist
/// a complex object and then use the regular member lowering.
#[derive(Default)]
pub struct TestOracle {
    types: FxHashMap<Span, Type>,
    constants: FxHashMap<Span, ConstantValue>,
    methods: FxHashSet<Span>,
    macros: MacroTable,
    logical_calls: Cell<usize>,
    optional_chain_calls: Cell<usize>,
}

impl TestOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_type(&mut self, expr: &Expr<'_>, ty: Type) {
        self.types.insert(expr.span(), ty);
    }

    pub fn set_constant(&mut self, expr: &Expr<'_>, value: ConstantValue) {
        self.constants.insert(expr.span(), value);
    }

    pub fn mark_method(&mut self, expr: &Expr<'_>) {
        self.methods.insert(expr.span());
    }

    pub fn register_macro(&mut self, symbol: SymbolId, expander: Box<dyn PropertyCallMacro>) {
        self.macros.register_property_call_macro(symbol, expander);
    }

    pub fn logical_calls(&self) -> usize {
        self.logical_calls.get()
    }

    pub fn optional_chain_calls(&self) -> usize {
        self.optional_chain_calls.get()
    }

    pub fn transformer(&self) -> Transformer<'_> {
        self.transformer_with(TransformOptions::default())
    }

    pub fn services(&self) -> Services<'_> {
        Services {
            types: self,
            macros: self,
            methods: self,
            logical: self,
            optional_chain: self,
        }
    }

    pub fn transformer_with(&self, options: TransformOptions) -> Transformer<'_> {
        Transformer::new(self.services(), options)
    }
}

impl TypeOracle for TestOracle {
    fn resolve_type(&self, expr: &Expr<'_>) -> Type {
        self.types
            .get(&skip_transparent(expr).span())
            .cloned()
            .unwrap_or_else(|| Type::new(TypeFlags::OBJECT))
    }

    fn resolve_constant_value(&self, expr: &Expr<'_>) -> Option<ConstantValue> {
        self.constants.get(&expr.span()).cloned()
    }
}

impl MacroRegistry for TestOracle {
    fn lookup_property_call_macro(&self, symbol: SymbolId) -> Option<&dyn PropertyCallMacro> {
        self.macros.lookup_property_call_macro(symbol)
    }
}

impl MethodClassificationOracle for TestOracle {
    fn is_method_reference(&self, expr: &Expr<'_>) -> bool {
        self.methods.contains(&expr.span())
    }
}

impl LogicalLowering for TestOracle {
    fn lower_logical(
        &self,
        transformer: &mut Transformer<'_>,
        expr: &BinaryExpr<'_>,
    ) -> LoweringResult<Expression> {
        self.logical_calls.set(self.logical_calls.get() + 1);
        let [left, right] = transformer.lower_in_order([expr.left, expr.right])?;
        Ok(Expression::call(Expression::id("logical"), vec![left, right]))
    }
}

impl OptionalChainLowering for TestOracle {
    fn lower_optional_chain(
        &self,
        transformer: &mut Transformer<'_>,
        expr: &Expr<'_>,
    ) -> LoweringResult<Expression> {
        self.optional_chain_calls
            .set(self.optional_chain_calls.get() + 1);
        match expr {
            Expr::PropertyAccess(access) => {
                let object = transformer.lower_expression(access.object)?;
                let object = transformer.push_to_temp_if_complex(object);
                transformer.lower_property_access_inner(access, object)
            }
            Expr::ElementAccess(access) => {
                let [object, index] = transformer.lower_in_order([access.object, access.index])?;
                transformer.lower_element_access_inner(access, object, index)
            }
            _ => transformer.lower_expression(expr),
        }
    }
}

/// Expands to `nil`.
pub struct UnitMacro;

impl PropertyCallMacro for UnitMacro {
    fn expand(
        &self,
        _transformer: &mut Transformer<'_>,
        _object: Expression,
        _args: Vec<Expression>,
    ) -> LoweringResult<Expression> {
        Ok(Expression::nil())
    }
}

/// Expands `object.size()` to `rawlen(object)`.
pub struct LengthMacro;

impl PropertyCallMacro for LengthMacro {
    fn expand(
        &self,
        _transformer: &mut Transformer<'_>,
        object: Expression,
        _args: Vec<Expression>,
    ) -> LoweringResult<Expression> {
        Ok(Expression::call(Expression::id("rawlen"), vec![object]))
    }
}
