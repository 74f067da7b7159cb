//! Resolution of assignment targets into stable writable locations.
//!
//! A location's base and key are evaluated exactly once. Anything that is
//! not already a plain identifier, literal or temporary is hoisted, so the
//! location can be read and written repeatedly (compound assignment reads
//! it, writes it and then yields it) without re-running side effects.

use tsluau_core::{LoweringError, LoweringResult};
use tsluau_luau::Expression;
use tsluau_syntax::{Expr, skip_transparent};

use crate::Transformer;
use crate::expr::lower_identifier;
use crate::indexable::convert_to_indexable;

/// How a location is reached from its base.
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    /// `base.name`
    Name(String),
    /// `base[index]`
    Index(Expression),
}

/// A place that can be read and written.
#[derive(Debug, Clone, PartialEq)]
pub struct WritableLocation {
    /// The identifier itself, or the indexable object of a member access.
    pub base: Expression,
    /// `None` when `base` is the location.
    pub accessor: Option<Accessor>,
}

impl WritableLocation {
    /// The location as an expression, usable on either side of `=`.
    pub fn to_expression(&self) -> Expression {
        match &self.accessor {
            None => self.base.clone(),
            Some(Accessor::Name(name)) => Expression::property(self.base.clone(), name.clone()),
            Some(Accessor::Index(index)) => Expression::index(self.base.clone(), index.clone()),
        }
    }
}

/// Resolve the left-hand side of an assignment.
///
/// Identifiers and member accesses are accepted, looking through transparent
/// wrappers. Anything else is a fatal [`LoweringError::InvalidAssignmentTarget`].
pub fn resolve_writable_location(
    transformer: &mut Transformer<'_>,
    target: &Expr<'_>,
) -> LoweringResult<WritableLocation> {
    match skip_transparent(target) {
        Expr::Ident(ident) => Ok(WritableLocation {
            base: lower_identifier(ident),
            accessor: None,
        }),
        Expr::PropertyAccess(access) if !access.question_dot => {
            let object = transformer.lower_expression(access.object)?;
            let base = transformer.push_to_temp_if_complex(object);
            Ok(WritableLocation {
                base: convert_to_indexable(base),
                accessor: Some(Accessor::Name(access.name.name.to_string())),
            })
        }
        Expr::ElementAccess(access) if !access.question_dot => {
            let [object, index] = transformer.lower_in_order([access.object, access.index])?;
            let base = transformer.push_to_temp_if_complex(object);
            let index = transformer.push_to_temp_if_complex(index);
            Ok(WritableLocation {
                base: convert_to_indexable(base),
                accessor: Some(Accessor::Index(index)),
            })
        }
        other => {
            tracing::debug!(span = %other.span(), "rejected assignment target");
            Err(LoweringError::InvalidAssignmentTarget { span: target.span() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestOracle;
    use bumpalo::Bump;
    use tsluau_luau::{Statement, TemporaryId};
    use tsluau_syntax::AstBuilder;

    #[test]
    fn identifier_target() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let location = resolve_writable_location(&mut t, ast.ident("x")).unwrap();
        assert_eq!(location.base, Expression::id("x"));
        assert_eq!(location.accessor, None);
        assert_eq!(location.to_expression(), Expression::id("x"));
    }

    #[test]
    fn parenthesized_identifier_target() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let target = ast.paren(ast.non_null(ast.ident("x")));
        let location = resolve_writable_location(&mut t, target).unwrap();
        assert_eq!(location.to_expression(), Expression::id("x"));
    }

    #[test]
    fn property_on_identifier_is_not_hoisted() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let target = ast.property(ast.ident("obj"), "x");
        let location = resolve_writable_location(&mut t, target).unwrap();
        assert_eq!(
            location.to_expression(),
            Expression::property(Expression::id("obj"), "x")
        );
        assert!(t.flush_prereqs().is_empty());
    }

    #[test]
    fn impure_base_is_hoisted_once() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let target = ast.property(ast.call(ast.ident("getObj"), &[]), "x");
        let location = resolve_writable_location(&mut t, target).unwrap();

        assert_eq!(location.base, Expression::Temporary(TemporaryId(0)));
        let prereqs = t.flush_prereqs();
        assert_eq!(
            prereqs,
            vec![Statement::declare(
                TemporaryId(0),
                Expression::call(Expression::id("getObj"), vec![])
            )]
        );
    }

    #[test]
    fn impure_index_is_hoisted() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let target = ast.element(ast.ident("arr"), ast.call(ast.ident("key"), &[]));
        let location = resolve_writable_location(&mut t, target).unwrap();

        assert_eq!(location.base, Expression::id("arr"));
        assert_eq!(
            location.accessor,
            Some(Accessor::Index(Expression::Temporary(TemporaryId(0))))
        );
    }

    #[test]
    fn literal_target_is_rejected() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let oracle = TestOracle::new();
        let mut t = oracle.transformer();

        let target = ast.number("1");
        let err = resolve_writable_location(&mut t, target).unwrap_err();
        assert_eq!(
            err,
            LoweringError::InvalidAssignmentTarget {
                span: target.span()
            }
        );
    }
}
