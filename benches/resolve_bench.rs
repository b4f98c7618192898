//! Resolution benchmarks.
//!
//! Measures binding cost for expression shapes that stress different parts
//! of the resolver: operator chains, owner member lookup, overload selection
//! and indexer dispatch.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use xbind::solver::{FieldInfo, MethodSignature, TypeDatabase, select_overload};
use xbind::syntax::{Literal, OperatorToken};
use xbind::{HostEnvironment, HostTypeInfo, ResolutionContext, SyntaxNode, TypeId, resolve};

fn int(value: i32) -> SyntaxNode {
    SyntaxNode::constant(Literal::Int32(value))
}

/// `((((x + 1) + 2) + ...) + n)`
fn sum_chain(length: i32) -> SyntaxNode {
    (1..=length).fold(SyntaxNode::ident("x"), |acc, i| {
        SyntaxNode::binary(OperatorToken::Plus, acc, int(i))
    })
}

fn host() -> (HostEnvironment, TypeId, TypeId) {
    let env = HostEnvironment::new();
    let page_ty = env.interner().host("Bench.Page");
    let mut page = HostTypeInfo::new("Bench.Page")
        .with_method(MethodSignature::getter("Items", page_ty))
        .with_default_member("Item")
        .with_method(MethodSignature::new("get_Item", &[TypeId::INT32], TypeId::STRING));
    for i in 0..64 {
        page = page
            .with_method(MethodSignature::getter(&format!("Prop{i}"), TypeId::INT32))
            .with_field(FieldInfo::new(format!("field{i}"), TypeId::DOUBLE));
    }
    let page = env.register_type(page);

    let mut math = HostTypeInfo::new("Bench.Math");
    for ty in [
        TypeId::STRING,
        TypeId::DECIMAL,
        TypeId::DOUBLE,
        TypeId::SINGLE,
        TypeId::INT64,
        TypeId::INT32,
    ] {
        math = math.with_method(MethodSignature::new("Max", &[ty, ty], ty).into_static());
    }
    let math = env.register_type(math);
    (env, page, math)
}

fn bench_resolve(c: &mut Criterion) {
    let (env, page, math) = host();
    let ctx = ResolutionContext::builder()
        .with_owner(page)
        .declare("x", TypeId::INT32)
        .declare("s", TypeId::INT16)
        .import_type(math)
        .build();

    let cases = [
        ("sum_chain_16", sum_chain(16)),
        ("sum_chain_256", sum_chain(256)),
        ("owner_property", SyntaxNode::ident("Prop63")),
        ("owner_field", SyntaxNode::ident("field63")),
        (
            "overload_widening",
            SyntaxNode::call(
                SyntaxNode::ident("Max"),
                vec![SyntaxNode::ident("s"), SyntaxNode::ident("s")],
            ),
        ),
        (
            "indexer",
            SyntaxNode::index(SyntaxNode::ident("Items"), vec![int(0)]),
        ),
    ];

    let mut group = c.benchmark_group("resolve");
    for (name, ast) in &cases {
        group.bench_with_input(BenchmarkId::new("resolve", name), ast, |b, ast| {
            b.iter(|| black_box(resolve(ast, &env, &ctx)))
        });
    }
    group.finish();
}

fn bench_select_overload(c: &mut Criterion) {
    let env = HostEnvironment::new();
    let candidates: Vec<MethodSignature> = [
        TypeId::STRING,
        TypeId::DECIMAL,
        TypeId::DOUBLE,
        TypeId::SINGLE,
        TypeId::INT64,
        TypeId::INT32,
    ]
    .into_iter()
    .map(|ty| MethodSignature::new("f", &[ty, ty, ty], ty))
    .collect();

    let mut group = c.benchmark_group("select_overload");
    for (name, args) in [
        ("exact", [TypeId::INT32; 3]),
        ("widening", [TypeId::BYTE; 3]),
        ("no_match", [TypeId::BOOLEAN; 3]),
    ] {
        group.bench_with_input(BenchmarkId::new("select", name), &args, |b, args| {
            b.iter(|| black_box(select_overload(env.catalog(), &candidates, args)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_select_overload);
criterion_main!(benches);
