//! Walking through syntactically transparent wrappers.
//!
//! Parentheses, non-null assertions and type assertions do not change the
//! value of the expression they wrap. Lowering decisions that depend on the
//! shape of a node (is it an assignable reference, is it a member access being
//! deleted) look through them.

use crate::ast::Expr;

/// Skip downwards through transparent wrappers to the expression they wrap.
pub fn skip_transparent<'a, 'ast>(mut expr: &'a Expr<'ast>) -> &'a Expr<'ast> {
    loop {
        expr = match expr {
            Expr::Paren(paren) => paren.expr,
            Expr::NonNull(non_null) => non_null.expr,
            Expr::TypeAssertion(assertion) => assertion.expr,
            _ => return expr,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AstBuilder;
    use bumpalo::Bump;

    #[test]
    fn skips_nested_wrappers() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let access = ast.property(ast.ident("a"), "b");
        let wrapped = ast.paren(ast.non_null(ast.type_assertion(access, "Foo")));

        assert_eq!(skip_transparent(wrapped).span(), access.span());
    }

    #[test]
    fn leaves_plain_expressions_alone() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let id = ast.ident("x");
        assert_eq!(skip_transparent(id).span(), id.span());
    }
}
