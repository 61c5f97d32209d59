use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sp_core::{
    prelude::*,
    util::test_graphs::{generate_random_graph, generate_reference_graph},
};

criterion_group!(benches, reference_graph, random_graphs);
criterion_main!(benches);

pub fn reference_graph(c: &mut Criterion) {
    let engine = ShortestPathEngine::new(generate_reference_graph());

    c.bench_with_input(
        BenchmarkId::new("compute", "reference"),
        &engine,
        |b, engine| {
            b.iter(|| engine.compute(black_box(node_index(0))).unwrap());
        },
    );
}

fn random_graphs(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("compute_random");
    for size in [16, 64, 256, 1024].iter() {
        let engine = ShortestPathEngine::new(generate_random_graph(*size, 0.1, 100, &mut rng));
        group.throughput(criterion::Throughput::Elements((*size * *size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter(|| engine.compute(black_box(node_index(0))).unwrap());
        });
    }
    group.finish();
}
