use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selkie::graph::{Graph, GraphOptions};
use selkie::shortest_paths::{
    bellman_ford, bellman_ford_optimized, dijkstra, floyd_warshall_optimized,
};
use std::hint::black_box;
use std::time::Duration;

fn random_graph(vertex_count: usize, edges_per_vertex: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new(GraphOptions::directed());
    for id in 0..vertex_count {
        let _ = g.add_vertex(id);
    }

    // A spine keeps every vertex reachable from 0.
    for id in 1..vertex_count {
        let _ = g.add_weighted_edge(id - 1, id, rng.gen_range(1.0..10.0));
    }
    for tail in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let head = rng.gen_range(0..vertex_count);
            let _ = g.add_weighted_edge(tail, head, rng.gen_range(1.0..10.0));
        }
    }
    g
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");
    group.measurement_time(Duration::from_secs(5));

    for &n in &[50usize, 200] {
        let g = random_graph(n, 4, 42);
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &g, |b, g| {
            b.iter(|| black_box(bellman_ford(g, 0)))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford_optimized", n), &g, |b, g| {
            b.iter(|| black_box(bellman_ford_optimized(g, 0)))
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &g, |b, g| {
            b.iter(|| black_box(dijkstra(g, 0)))
        });
    }
    group.finish();
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(20);
    let g = random_graph(80, 3, 7);
    group.bench_function("floyd_warshall_optimized", |b| {
        b.iter_batched(
            || g.clone(),
            |g| black_box(floyd_warshall_optimized(&g)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_single_source, bench_all_pairs);
criterion_main!(benches);
