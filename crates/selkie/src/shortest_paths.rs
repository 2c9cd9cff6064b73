//! Single-source, single-destination and all-pairs shortest paths.
//!
//! Distances are `f64`; unreachable pairs report `f64::INFINITY`. Undirected graphs are
//! treated as having both orientations of every edge, so a negative undirected edge is itself a
//! negative cycle.

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

pub use bellman_ford::{
    bellman_ford, bellman_ford_optimized, bellman_ford_push, bellman_ford_to,
    bellman_ford_to_optimized,
};
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, floyd_warshall_optimized};

use indexmap::{IndexMap, IndexSet};
use selkie_graph::VertexId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Distances and paths start at the origin.
    FromSource,
    /// Distances and paths end at the origin.
    ToDestination,
}

/// Result of a single-source or single-destination run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceTable {
    pub origin: VertexId,
    pub direction: Direction,
    /// One entry per vertex, in graph insertion order.
    pub distances: IndexMap<VertexId, f64>,
    /// Vertex sequences for every reachable vertex. Source-driven paths run origin -> vertex,
    /// destination-driven paths run vertex -> origin.
    pub paths: IndexMap<VertexId, Vec<VertexId>>,
}

impl DistanceTable {
    pub(crate) fn build(
        ids: &[VertexId],
        origin: usize,
        direction: Direction,
        dist: &[f64],
        hop: &[Option<usize>],
    ) -> Self {
        let n = ids.len();
        let mut distances: IndexMap<VertexId, f64> = IndexMap::with_capacity(n);
        let mut paths: IndexMap<VertexId, Vec<VertexId>> = IndexMap::with_capacity(n);
        for v in 0..n {
            distances.insert(ids[v], dist[v]);
            if !dist[v].is_finite() {
                continue;
            }
            let mut chain: Vec<VertexId> = vec![ids[v]];
            let mut cur = v;
            // A well-formed pointer chain reaches the origin in fewer than n hops.
            while cur != origin && chain.len() <= n {
                let Some(next) = hop[cur] else {
                    break;
                };
                chain.push(ids[next]);
                cur = next;
            }
            if cur != origin {
                continue;
            }
            if direction == Direction::FromSource {
                chain.reverse();
            }
            paths.insert(ids[v], chain);
        }
        Self {
            origin: ids[origin],
            direction,
            distances,
            paths,
        }
    }

    /// Distance for `v`, `None` if `v` is not a vertex of the graph.
    pub fn distance(&self, v: VertexId) -> Option<f64> {
        self.distances.get(&v).copied()
    }

    pub fn path(&self, v: VertexId) -> Option<&[VertexId]> {
        self.paths.get(&v).map(Vec::as_slice)
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }
}

/// All-pairs distances from Floyd-Warshall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    pub ids: IndexSet<VertexId>,
    /// `dist[s][d]`, indexed by positions in `ids`.
    pub dist: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub fn get(&self, source: VertexId, dest: VertexId) -> Option<f64> {
        let s = self.ids.get_index_of(&source)?;
        let d = self.ids.get_index_of(&dest)?;
        Some(self.dist[s][d])
    }

    pub fn row(&self, source: VertexId) -> Option<&[f64]> {
        let s = self.ids.get_index_of(&source)?;
        Some(&self.dist[s])
    }
}
