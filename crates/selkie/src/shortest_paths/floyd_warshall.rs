//! Floyd-Warshall all-pairs shortest paths.
//!
//! Layer `k` allows the first `k` vertices (in insertion order) as intermediate stops:
//! `dist_k[s][d] = min(dist_{k-1}[s][d], dist_{k-1}[s][k] + dist_{k-1}[k][d])`.

use super::DistanceMatrix;
use crate::adjacency::Adjacency;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use selkie_graph::Graph;

/// Keeps every layer, O(n³) space.
pub fn floyd_warshall(g: &Graph) -> Result<DistanceMatrix> {
    let adj = Adjacency::new(g);
    let n = adj.len();
    let mut layers: Vec<Vec<Vec<f64>>> = Vec::with_capacity(n + 1);
    layers.push(base_layer(&adj));

    for k in 0..n {
        let prev = &layers[k];
        let next: Vec<Vec<f64>> = (0..n)
            .map(|s| (0..n).map(|d| relax(prev, s, k, d)).collect())
            .collect();
        layers.push(next);
    }

    let dist = layers.pop().unwrap_or_default();
    finish(&adj, dist)
}

/// Keeps only the previous layer, O(n²) space.
pub fn floyd_warshall_optimized(g: &Graph) -> Result<DistanceMatrix> {
    let adj = Adjacency::new(g);
    let n = adj.len();
    let mut prev = base_layer(&adj);
    let mut cur = prev.clone();

    for k in 0..n {
        for s in 0..n {
            for d in 0..n {
                cur[s][d] = relax(&prev, s, k, d);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
        tracing::trace!(k, "floyd-warshall layer done");
    }

    finish(&adj, prev)
}

fn relax(prev: &[Vec<f64>], s: usize, k: usize, d: usize) -> f64 {
    let through = prev[s][k] + prev[k][d];
    if through < prev[s][d] {
        through
    } else {
        prev[s][d]
    }
}

/// Layer 0: zero on the diagonal, the cheapest parallel edge between adjacent pairs, infinity
/// elsewhere.
fn base_layer(adj: &Adjacency) -> Vec<Vec<f64>> {
    let n = adj.len();
    let mut dist: Vec<Vec<f64>> = vec![vec![f64::INFINITY; n]; n];
    for s in 0..n {
        dist[s][s] = 0.0;
        for arc in &adj.out[s] {
            if arc.weight < dist[s][arc.to] {
                dist[s][arc.to] = arc.weight;
            }
        }
    }
    dist
}

fn finish(adj: &Adjacency, dist: Vec<Vec<f64>>) -> Result<DistanceMatrix> {
    if (0..dist.len()).any(|v| dist[v][v] < 0.0) {
        return Err(Error::NegativeCycleDetected);
    }
    tracing::debug!(vertices = dist.len(), "floyd-warshall finished");
    Ok(DistanceMatrix {
        ids: adj.ids.iter().copied().collect::<IndexSet<_>>(),
        dist,
    })
}
