//! Coercion of lowered values into forms the target can index.

use tsluau_luau::Expression;

/// Wrap `expression` in parentheses unless the target grammar already
/// accepts it in front of `.`, `[]` or `:`.
///
/// Literals, binary expressions and other non-prefix forms get wrapped;
/// identifiers, temporaries, accesses and calls pass through unchanged.
pub fn convert_to_indexable(expression: Expression) -> Expression {
    if expression.is_indexable() {
        expression
    } else {
        Expression::parenthesized(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsluau_luau::BinaryOperator;

    #[test]
    fn identifiers_pass_through() {
        assert_eq!(convert_to_indexable(Expression::id("obj")), Expression::id("obj"));
    }

    #[test]
    fn literals_are_wrapped() {
        assert_eq!(
            convert_to_indexable(Expression::string("abc")),
            Expression::parenthesized(Expression::string("abc"))
        );
    }

    #[test]
    fn binary_is_wrapped_once() {
        let sum = Expression::binary(
            Expression::id("a"),
            BinaryOperator::DotDot,
            Expression::id("b"),
        );
        let wrapped = convert_to_indexable(sum);
        assert!(matches!(wrapped, Expression::Parenthesized(_)));
        assert_eq!(convert_to_indexable(wrapped.clone()), wrapped);
    }
}
