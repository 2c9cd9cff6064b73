use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use selkie::graph::Graph;
use selkie::min_cut::{MinCutOptions, compute_minimum_cut};
use std::hint::black_box;

/// Two cliques of `half` vertices joined by `bridges` edges.
fn barbell(half: usize, bridges: usize) -> Graph {
    let mut g = Graph::undirected();
    for id in 0..2 * half {
        let _ = g.add_vertex(id);
    }
    for side in [0, half] {
        for a in side..side + half {
            for b in a + 1..side + half {
                let _ = g.add_edge(a, b);
            }
        }
    }
    for i in 0..bridges {
        let _ = g.add_edge(i % half, half + i % half);
    }
    g
}

fn bench_min_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_cut");
    group.sample_size(10);
    for &half in &[5usize, 10] {
        let g = barbell(half, 2);
        let options = MinCutOptions {
            trials: Some(50),
            seed: Some(1),
        };
        group.bench_with_input(BenchmarkId::from_parameter(half), &g, |b, g| {
            b.iter(|| black_box(compute_minimum_cut(g, &options)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_min_cut);
criterion_main!(benches);
