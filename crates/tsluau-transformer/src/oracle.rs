//! Capability interfaces of the engine's external collaborators.
//!
//! The engine depends only on these traits. Type checking, the macro catalog,
//! short-circuit logical lowering and optional-chain lowering all live outside
//! this crate and are handed in through [`Services`].

use rustc_hash::FxHashMap;
use tsluau_core::{ConstantValue, LoweringResult, SymbolId, Type};
use tsluau_luau::Expression;
use tsluau_syntax::{BinaryExpr, Expr};

use crate::Transformer;

/// Static type and constant resolution.
pub trait TypeOracle {
    /// The static type of `expr`.
    fn resolve_type(&self, expr: &Expr<'_>) -> Type;

    /// The compile-time value of `expr`, if it has one (enum members, const
    /// declarations).
    fn resolve_constant_value(&self, expr: &Expr<'_>) -> Option<ConstantValue>;

    /// The first symbol that declares `ty` or one of its union members.
    fn resolve_first_symbol(&self, ty: &Type) -> Option<SymbolId> {
        ty.first_defined_symbol()
    }
}

/// A macro bound to a member symbol, expanded at its call sites.
pub trait PropertyCallMacro {
    /// Expand `object.member(args)`. `object` and `args` are already lowered,
    /// in source order.
    fn expand(
        &self,
        transformer: &mut Transformer<'_>,
        object: Expression,
        args: Vec<Expression>,
    ) -> LoweringResult<Expression>;
}

/// Lookup side of the macro catalog.
pub trait MacroRegistry {
    /// The property-call macro registered for `symbol`, if any.
    fn lookup_property_call_macro(&self, symbol: SymbolId) -> Option<&dyn PropertyCallMacro>;
}

/// Decides whether a member access names a method.
pub trait MethodClassificationOracle {
    /// Whether `expr` refers to a method (as opposed to a field holding a
    /// function or any other value).
    fn is_method_reference(&self, expr: &Expr<'_>) -> bool;
}

/// Lowering of `&&`, `||` and `??`.
pub trait LogicalLowering {
    /// Lower a short-circuit binary expression.
    fn lower_logical(
        &self,
        transformer: &mut Transformer<'_>,
        expr: &BinaryExpr<'_>,
    ) -> LoweringResult<Expression>;
}

/// Lowering of `?.` chains.
///
/// Implementations call back into
/// [`Transformer::lower_property_access_inner`] and
/// [`Transformer::lower_element_access_inner`] once they have a base value.
pub trait OptionalChainLowering {
    /// Lower a property or element access written with `?.`.
    fn lower_optional_chain(
        &self,
        transformer: &mut Transformer<'_>,
        expr: &Expr<'_>,
    ) -> LoweringResult<Expression>;
}

/// The collaborators a [`Transformer`] consults.
#[derive(Clone, Copy)]
pub struct Services<'s> {
    /// Type and constant resolution
    pub types: &'s dyn TypeOracle,
    /// Macro catalog
    pub macros: &'s dyn MacroRegistry,
    /// Method classification
    pub methods: &'s dyn MethodClassificationOracle,
    /// Short-circuit operators
    pub logical: &'s dyn LogicalLowering,
    /// Optional chains
    pub optional_chain: &'s dyn OptionalChainLowering,
}

/// An in-memory macro catalog keyed by symbol.
#[derive(Default)]
pub struct MacroTable {
    property_call_macros: FxHashMap<SymbolId, Box<dyn PropertyCallMacro>>,
}

impl MacroTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a property-call macro to `symbol`, replacing any previous one.
    pub fn register_property_call_macro(
        &mut self,
        symbol: SymbolId,
        expander: Box<dyn PropertyCallMacro>,
    ) {
        self.property_call_macros.insert(symbol, expander);
    }

    /// Number of registered macros.
    pub fn len(&self) -> usize {
        self.property_call_macros.len()
    }

    /// Whether no macro is registered.
    pub fn is_empty(&self) -> bool {
        self.property_call_macros.is_empty()
    }
}

impl MacroRegistry for MacroTable {
    fn lookup_property_call_macro(&self, symbol: SymbolId) -> Option<&dyn PropertyCallMacro> {
        self.property_call_macros.get(&symbol).map(|m| m.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nil;

    impl PropertyCallMacro for Nil {
        fn expand(
            &self,
            _transformer: &mut Transformer<'_>,
            _object: Expression,
            _args: Vec<Expression>,
        ) -> LoweringResult<Expression> {
            Ok(Expression::nil())
        }
    }

    #[test]
    fn macro_table_lookup() {
        let mut table = MacroTable::new();
        assert!(table.is_empty());

        let size = SymbolId::from_member("Array", "size");
        table.register_property_call_macro(size, Box::new(Nil));

        assert_eq!(table.len(), 1);
        assert!(table.lookup_property_call_macro(size).is_some());
        assert!(
            table
                .lookup_property_call_macro(SymbolId::from_member("Array", "push"))
                .is_none()
        );
    }
}
