use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use floyd_apsp::graph::generators::random_graph;
use floyd_apsp::FloydWarshall;

fn bench_floyd(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");
    group.sample_size(10);

    for &n in &[64usize, 128, 256] {
        let graph = random_graph(n, 0.2, 100, 42).expect("graph generation");

        group.bench_with_input(BenchmarkId::new("sequential", n), &graph, |b, g| {
            let solver = FloydWarshall::new();
            b.iter(|| solver.solve(black_box(g)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &graph, |b, g| {
            let solver = FloydWarshall::new().with_parallel(true);
            b.iter(|| solver.solve(black_box(g)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_floyd);
criterion_main!(benches);
