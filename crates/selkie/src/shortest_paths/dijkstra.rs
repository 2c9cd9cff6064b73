use super::{Direction, DistanceTable};
use crate::adjacency::{Adjacency, position};
use crate::error::{Error, Result};
use crate::heap::MinScored;
use selkie_graph::{Graph, VertexId};
use std::collections::BinaryHeap;

/// Shortest distances from `source` with a binary heap, O((m + n) log n).
///
/// Every edge length must be non-negative; a negative one is rejected up front.
pub fn dijkstra(g: &Graph, source: VertexId) -> Result<DistanceTable> {
    let s = position(g, source)?;
    if let Some(edge) = g.edges().find(|e| e.weight() < 0.0) {
        return Err(Error::NegativeWeight {
            tail: edge.tail(),
            head: edge.head(),
            weight: edge.weight(),
        });
    }

    let adj = Adjacency::new(g);
    let n = adj.len();
    let mut dist: Vec<f64> = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut settled: Vec<bool> = vec![false; n];
    let mut heap: BinaryHeap<MinScored<usize>> = BinaryHeap::new();
    dist[s] = 0.0;
    heap.push(MinScored(0.0, s));

    while let Some(MinScored(d, v)) = heap.pop() {
        if settled[v] {
            continue;
        }
        settled[v] = true;
        for arc in &adj.out[v] {
            let candidate = d + arc.weight;
            if candidate < dist[arc.to] {
                dist[arc.to] = candidate;
                pred[arc.to] = Some(v);
                heap.push(MinScored(candidate, arc.to));
            }
        }
    }

    Ok(DistanceTable::build(
        &adj.ids,
        s,
        Direction::FromSource,
        &dist,
        &pred,
    ))
}
