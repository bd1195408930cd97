use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use partyline::{create_context, Accessor, ContextBuilder, Provider};

#[derive(Clone)]
struct AppState {
    counter: usize,
    name: String,
}

fn builder_setup_benchmark(c: &mut Criterion) {
    c.bench_function("builder_setup", |b| {
        b.iter(|| {
            let mut builder = ContextBuilder::new("bench", |n: &usize| AppState {
                counter: *n,
                name: "bench".to_string(),
            });
            let counter = builder.select("counter", |state: &AppState| state.counter);
            let name = builder.select("name", |state: &AppState| state.name.clone());
            (builder.finish(), counter, name)
        });
    });
}

fn provide_read_benchmark(c: &mut Criterion) {
    let mut builder = ContextBuilder::new("bench", |n: &usize| AppState {
        counter: *n,
        name: "bench".to_string(),
    });
    let counter = builder.select("counter", |state: &AppState| state.counter);
    let provider = builder.finish();

    c.bench_function("provide_read", |b| {
        let mut i = 0;
        b.iter(|| {
            let seen = provider.provide(&black_box(i), || counter.get());
            i += 1;
            seen
        });
    });
}

fn accessor_miss_benchmark(c: &mut Criterion) {
    let (_provider, accessor) = create_context("bench", |n: &usize| *n);

    c.bench_function("accessor_miss", |b| {
        b.iter(|| {
            black_box(accessor.get());
        });
    });
}

fn provide_value_benchmark(c: &mut Criterion) {
    let (provider, accessor) = create_context("bench", |n: &usize| *n);

    c.bench_function("provide_value_read", |b| {
        let mut i = 0;
        b.iter(|| {
            let seen = provider.provide_value(black_box(i), || accessor.get());
            i += 1;
            seen
        });
    });
}

fn provide_nested(
    provider: &Provider<usize, usize>,
    accessor: Accessor<usize>,
    depth: usize,
) -> Option<usize> {
    if depth == 0 {
        accessor.get()
    } else {
        provider.provide(&depth, || provide_nested(provider, accessor, depth - 1))
    }
}

fn nested_scopes_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_scopes");

    for depth in [1, 4, 16].iter() {
        let (provider, accessor) = create_context("bench", |n: &usize| *n);

        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| black_box(provide_nested(&provider, accessor, depth)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    builder_setup_benchmark,
    provide_read_benchmark,
    accessor_miss_benchmark,
    provide_value_benchmark,
    nested_scopes_benchmark,
);
criterion_main!(benches);
