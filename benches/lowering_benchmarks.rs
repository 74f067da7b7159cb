//! Performance benchmarks for expression lowering.
//!
//! Workloads:
//! - Operator chains: long left-nested `+` chains (pure and side-effecting)
//! - Assignments: compound assignments through impure bases
//! - Templates: many substitutions
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin
//! ```

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tsluau::prelude::*;
use tsluau::syntax::ast::BinaryExpr;
use tsluau::{LoweringResult, TypeFlags};

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

/// Every node is a plain object; nothing is a method, macro or constant.
struct PlainOracle;

impl TypeOracle for PlainOracle {
    fn resolve_type(&self, _expr: &Expr<'_>) -> Type {
        Type::new(TypeFlags::OBJECT)
    }

    fn resolve_constant_value(&self, _expr: &Expr<'_>) -> Option<ConstantValue> {
        None
    }
}

impl MacroRegistry for PlainOracle {
    fn lookup_property_call_macro(&self, _symbol: SymbolId) -> Option<&dyn PropertyCallMacro> {
        None
    }
}

impl MethodClassificationOracle for PlainOracle {
    fn is_method_reference(&self, _expr: &Expr<'_>) -> bool {
        false
    }
}

impl LogicalLowering for PlainOracle {
    fn lower_logical(
        &self,
        transformer: &mut Transformer<'_>,
        expr: &BinaryExpr<'_>,
    ) -> LoweringResult<Expression> {
        let [left, right] = transformer.lower_in_order([expr.left, expr.right])?;
        Ok(Expression::call(Expression::id("logical"), vec![left, right]))
    }
}

impl OptionalChainLowering for PlainOracle {
    fn lower_optional_chain(
        &self,
        transformer: &mut Transformer<'_>,
        expr: &Expr<'_>,
    ) -> LoweringResult<Expression> {
        match expr {
            Expr::PropertyAccess(access) => {
                let object = transformer.lower_expression(access.object)?;
                transformer.lower_property_access_inner(access, object)
            }
            Expr::ElementAccess(access) => {
                let [object, index] = transformer.lower_in_order([access.object, access.index])?;
                transformer.lower_element_access_inner(access, object, index)
            }
            _ => Ok(Expression::nil()),
        }
    }
}

fn services(oracle: &PlainOracle) -> Services<'_> {
    Services {
        types: oracle,
        macros: oracle,
        methods: oracle,
        logical: oracle,
        optional_chain: oracle,
    }
}

/// `v0 + v1 + ... + vN`, where every `every`-th operand is `(xK += 1)`.
fn addition_chain<'ast>(ast: &AstBuilder<'ast>, len: usize, every: usize) -> &'ast Expr<'ast> {
    let mut expr = ast.call(ast.ident("start"), &[]);
    for i in 0..len {
        let operand = if every > 0 && i % every == 0 {
            ast.paren(ast.binary(ast.ident(&format!("x{i}")), BinaryOp::AddAssign, ast.number("1")))
        } else {
            ast.ident(&format!("v{i}"))
        };
        expr = ast.binary(expr, BinaryOp::Add, operand);
    }
    expr
}

fn operator_chain_benchmarks(c: &mut Criterion) {
    setup_profiler();
    let oracle = PlainOracle;
    let mut group = c.benchmark_group("lowering/operator_chains");

    for len in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(len as u64));

        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let pure = addition_chain(&ast, len, 0);
        group.bench_with_input(BenchmarkId::new("pure", len), &pure, |b, expr| {
            b.iter(|| {
                let output = lower(services(&oracle), TransformOptions::default(), expr);
                end_profiling_frame();
                black_box(output)
            })
        });

        let effects = addition_chain(&ast, len, 4);
        group.bench_with_input(BenchmarkId::new("side_effects", len), &effects, |b, expr| {
            b.iter(|| {
                let output = lower(services(&oracle), TransformOptions::default(), expr);
                end_profiling_frame();
                black_box(output)
            })
        });
    }
    group.finish();
}

fn assignment_benchmarks(c: &mut Criterion) {
    setup_profiler();
    let oracle = PlainOracle;
    let mut group = c.benchmark_group("lowering/assignments");

    let arena = Bump::new();
    let ast = AstBuilder::new(&arena);
    // getObj()[key()] **= (a = b = c = 2)
    let target = ast.element(ast.call(ast.ident("getObj"), &[]), ast.call(ast.ident("key"), &[]));
    let mut value = ast.number("2");
    for name in ["c", "b", "a"] {
        value = ast.paren(ast.binary(ast.ident(name), BinaryOp::Assign, value));
    }
    let expr = ast.binary(target, BinaryOp::PowAssign, value);

    group.bench_function("compound_impure_target", |b| {
        b.iter(|| {
            let output = lower(services(&oracle), TransformOptions::default(), black_box(expr));
            end_profiling_frame();
            black_box(output)
        })
    });
    group.finish();
}

fn template_benchmarks(c: &mut Criterion) {
    setup_profiler();
    let oracle = PlainOracle;
    let mut group = c.benchmark_group("lowering/templates");

    let arena = Bump::new();
    let ast = AstBuilder::new(&arena);
    let names: Vec<String> = (0..50).map(|i| format!("field{i}")).collect();
    let spans: Vec<_> = names
        .iter()
        .map(|name| (ast.property(ast.ident("record"), name), ", "))
        .collect();
    let expr = ast.template("record: ", &spans);

    group.throughput(Throughput::Elements(spans.len() as u64));
    group.bench_function("fifty_substitutions", |b| {
        b.iter(|| {
            let output = lower(services(&oracle), TransformOptions::default(), black_box(expr));
            end_profiling_frame();
            black_box(output)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    operator_chain_benchmarks,
    assignment_benchmarks,
    template_benchmarks
);
criterion_main!(benches);
