//! Property access lowering (`object.name`).
//!
//! Checks run in a fixed order, and the first one that applies wins:
//! 1. `any`-typed object: diagnostic, placeholder
//! 2. macro member outside a call: diagnostic, placeholder
//! 3. method outside a call: diagnostic, placeholder
//! 4. `prototype`: diagnostic, lowering continues
//! 5. compile-time constant: the literal value
//! 6. `delete` operand: `object.name = nil` prerequisite, value `nil`
//! 7. otherwise: `object.name` over an indexable object

use tsluau_core::{ConstantValue, DiagnosticKind, LoweringResult};
use tsluau_luau::{AssignmentOperator, Expression, Statement};
use tsluau_syntax::Expr;
use tsluau_syntax::ast::PropertyAccessExpr;

use super::literals::escape_string;
use crate::indexable::convert_to_indexable;
use crate::{SyntaxParent, Transformer};

pub(crate) fn lower_property_access(
    transformer: &mut Transformer<'_>,
    access: &PropertyAccessExpr<'_>,
) -> LoweringResult<Expression> {
    let object = transformer.lower_expression(access.object)?;
    transformer.lower_property_access_inner(access, object)
}

impl<'s> Transformer<'s> {
    /// Lower `access` given its already-lowered object.
    ///
    /// This is the entry point for optional-chain lowering, which computes
    /// the object itself.
    pub fn lower_property_access_inner(
        &mut self,
        access: &PropertyAccessExpr<'_>,
        object: Expression,
    ) -> LoweringResult<Expression> {
        let services = self.services();
        let node = Expr::PropertyAccess(access);

        if services.types.resolve_type(access.object).is_any() {
            self.report(DiagnosticKind::NoAny, access.object.span());
            return Ok(Expression::empty_id());
        }

        let ty = services.types.resolve_type(&node);
        if let Some(symbol) = services.types.resolve_first_symbol(&ty)
            && services.macros.lookup_property_call_macro(symbol).is_some()
        {
            self.report(DiagnosticKind::NoMacroWithoutCall, access.span);
            return Ok(Expression::empty_id());
        }

        if services.methods.is_method_reference(&node)
            && self.skip_transparent_parents() != Some(SyntaxParent::CallCallee)
        {
            self.report(DiagnosticKind::NoIndexWithoutCall, access.span);
            return Ok(Expression::empty_id());
        }

        let name = access.name.name;
        if name == "prototype" {
            self.report(DiagnosticKind::NoPrototype, access.name.span);
        }

        if self.options().fold_constants
            && let Some(value) = services.types.resolve_constant_value(&node)
        {
            return Ok(constant_expression(value));
        }

        let object = convert_to_indexable(object);
        if self.skip_transparent_parents() == Some(SyntaxParent::Delete) {
            self.prereq(Statement::assign(
                Expression::property(object, name),
                AssignmentOperator::Equals,
                Expression::nil(),
            ));
            return Ok(Expression::nil());
        }

        Ok(Expression::property(object, name))
    }
}

pub(crate) fn constant_expression(value: ConstantValue) -> Expression {
    match value {
        ConstantValue::String(text) => Expression::string(escape_string(&text)),
        ConstantValue::Number(number) => Expression::number_value(number),
    }
}

#[cfg(test)]
mod tests {
    use crate::TransformOptions;
    use crate::test_support::{TestOracle, UnitMacro};
    use bumpalo::Bump;
    use tsluau_core::{ConstantValue, DiagnosticKind, SymbolId, Type};
    use tsluau_luau::{AssignmentOperator, Expression, Statement};
    use tsluau_syntax::AstBuilder;

    #[test]
    fn plain_access() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let expr = ast.property(ast.ident("obj"), "field");
        assert_eq!(
            t.lower_expression(expr).unwrap(),
            Expression::property(Expression::id("obj"), "field")
        );
        assert!(t.diagnostics().is_empty());
    }

    #[test]
    fn literal_object_is_parenthesized() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let expr = ast.property(ast.string("\"abc\""), "len");
        assert_eq!(
            t.lower_expression(expr).unwrap(),
            Expression::property(Expression::parenthesized(Expression::string("abc")), "len")
        );
    }

    #[test]
    fn any_object_reports_and_yields_placeholder() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let mut oracle = TestOracle::new();
        let object = ast.ident("value");
        oracle.set_type(object, Type::any());
        let mut t = oracle.transformer();

        let value = t.lower_expression(ast.property(object, "x")).unwrap();
        assert!(value.is_empty_id());
        let diagnostics = t.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.count_of(DiagnosticKind::NoAny), 1);
    }

    #[test]
    fn macro_without_call() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let mut oracle = TestOracle::new();
        let symbol = SymbolId::from_member("Array", "size");
        let expr = ast.property(ast.ident("arr"), "size");
        oracle.set_type(expr, Type::object(symbol));
        oracle.register_macro(symbol, Box::new(UnitMacro));
        let mut t = oracle.transformer();

        assert!(t.lower_expression(expr).unwrap().is_empty_id());
        assert_eq!(t.finish().count_of(DiagnosticKind::NoMacroWithoutCall), 1);
    }

    #[test]
    fn method_without_call() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let mut oracle = TestOracle::new();
        let expr = ast.property(ast.ident("obj"), "method");
        oracle.mark_method(expr);
        let mut t = oracle.transformer();

        assert!(t.lower_expression(expr).unwrap().is_empty_id());
        assert_eq!(t.finish().count_of(DiagnosticKind::NoIndexWithoutCall), 1);
    }

    #[test]
    fn prototype_reports_but_continues() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let value = t
            .lower_expression(ast.property(ast.ident("Foo"), "prototype"))
            .unwrap();
        assert_eq!(value, Expression::property(Expression::id("Foo"), "prototype"));
        assert_eq!(t.finish().count_of(DiagnosticKind::NoPrototype), 1);
    }

    #[test]
    fn constants_are_folded() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let mut oracle = TestOracle::new();
        let number = ast.property(ast.ident("Color"), "Red");
        let text = ast.property(ast.ident("Names"), "First");
        oracle.set_constant(number, ConstantValue::Number(3.0));
        oracle.set_constant(text, ConstantValue::String("say \"hi\"".to_string()));
        let mut t = oracle.transformer();

        assert_eq!(t.lower_expression(number).unwrap(), Expression::number("3"));
        assert_eq!(
            t.lower_expression(text).unwrap(),
            Expression::string("say \\\"hi\\\"")
        );
    }

    #[test]
    fn folding_can_be_disabled() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let mut oracle = TestOracle::new();
        let expr = ast.property(ast.ident("Color"), "Red");
        oracle.set_constant(expr, ConstantValue::Number(3.0));
        let mut t = oracle.transformer_with(TransformOptions::new().with_fold_constants(false));

        assert_eq!(
            t.lower_expression(expr).unwrap(),
            Expression::property(Expression::id("Color"), "Red")
        );
    }

    #[test]
    fn delete_through_transparent_wrappers() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let expr = ast.delete(ast.paren(ast.non_null(ast.property(ast.ident("obj"), "x"))));
        assert_eq!(t.lower_expression(expr).unwrap(), Expression::nil());
        assert_eq!(
            t.flush_prereqs(),
            vec![Statement::assign(
                Expression::property(Expression::id("obj"), "x"),
                AssignmentOperator::Equals,
                Expression::nil()
            )]
        );
    }

    #[test]
    fn inner_access_of_deleted_chain_is_read() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        // delete a.b.c only clears `c`
        let expr = ast.delete(ast.property(ast.property(ast.ident("a"), "b"), "c"));
        t.lower_expression(expr).unwrap();
        assert_eq!(
            t.flush_prereqs(),
            vec![Statement::assign(
                Expression::property(Expression::property(Expression::id("a"), "b"), "c"),
                AssignmentOperator::Equals,
                Expression::nil()
            )]
        );
    }
}
