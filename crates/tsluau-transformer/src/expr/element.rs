//! Element access lowering (`object[index]`).

use tsluau_core::{DiagnosticKind, LoweringResult};
use tsluau_luau::{AssignmentOperator, Expression, Statement};
use tsluau_syntax::ast::ElementAccessExpr;

use crate::indexable::convert_to_indexable;
use crate::{SyntaxParent, Transformer};

pub(crate) fn lower_element_access(
    transformer: &mut Transformer<'_>,
    access: &ElementAccessExpr<'_>,
) -> LoweringResult<Expression> {
    let [object, index] = transformer.lower_in_order([access.object, access.index])?;
    transformer.lower_element_access_inner(access, object, index)
}

impl<'s> Transformer<'s> {
    /// Lower `access` given its already-lowered object and index.
    pub fn lower_element_access_inner(
        &mut self,
        access: &ElementAccessExpr<'_>,
        object: Expression,
        index: Expression,
    ) -> LoweringResult<Expression> {
        if self.services().types.resolve_type(access.object).is_any() {
            self.report(DiagnosticKind::NoAny, access.object.span());
            return Ok(Expression::empty_id());
        }

        let object = convert_to_indexable(object);
        if self.skip_transparent_parents() == Some(SyntaxParent::Delete) {
            self.prereq(Statement::assign(
                Expression::index(object, index),
                AssignmentOperator::Equals,
                Expression::nil(),
            ));
            return Ok(Expression::nil());
        }

        Ok(Expression::index(object, index))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestOracle;
    use bumpalo::Bump;
    use tsluau_core::{DiagnosticKind, Type};
    use tsluau_luau::{AssignmentOperator, Expression, Statement, TemporaryId};
    use tsluau_syntax::{AstBuilder, BinaryOp};

    #[test]
    fn plain_index() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let expr = ast.element(ast.ident("map"), ast.string("\"key\""));
        assert_eq!(
            t.lower_expression(expr).unwrap(),
            Expression::index(Expression::id("map"), Expression::string("key"))
        );
    }

    #[test]
    fn index_side_effects_follow_object() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        // getMap()[i = 2]
        let index = ast.binary(ast.ident("i"), BinaryOp::Assign, ast.number("2"));
        let expr = ast.element(ast.call(ast.ident("getMap"), &[]), index);
        let value = t.lower_expression(expr).unwrap();

        assert_eq!(
            value,
            Expression::index(Expression::Temporary(TemporaryId(0)), Expression::number("2"))
        );
        assert_eq!(
            t.flush_prereqs(),
            vec![
                Statement::declare(
                    TemporaryId(0),
                    Expression::call(Expression::id("getMap"), vec![])
                ),
                Statement::assign(
                    Expression::id("i"),
                    AssignmentOperator::Equals,
                    Expression::number("2")
                ),
            ]
        );
    }

    #[test]
    fn any_object() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let mut oracle = TestOracle::new();
        let object = ast.ident("untyped");
        oracle.set_type(object, Type::any());
        let mut t = oracle.transformer();

        let value = t.lower_expression(ast.element(object, ast.number("0"))).unwrap();
        assert!(value.is_empty_id());
        assert_eq!(t.finish().count_of(DiagnosticKind::NoAny), 1);
    }

    #[test]
    fn delete_element() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let expr = ast.delete(ast.element(ast.ident("map"), ast.ident("key")));
        assert_eq!(t.lower_expression(expr).unwrap(), Expression::nil());
        assert_eq!(
            t.flush_prereqs(),
            vec![Statement::assign(
                Expression::index(Expression::id("map"), Expression::id("key")),
                AssignmentOperator::Equals,
                Expression::nil()
            )]
        );
    }
}
