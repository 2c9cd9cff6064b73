//! Minimum spanning trees and single-link clustering on undirected graphs.
//!
//! All variants return the same total cost for a connected graph; they differ in how they
//! detect whether an edge closes a cycle. A disconnected graph has no spanning tree and is
//! reported as [`Error::Disconnected`](crate::Error::Disconnected).

mod clustering;
mod kruskal;
mod prim;

pub use clustering::max_spacing_clustering;
pub use kruskal::{kruskal_mst, kruskal_mst_lazy, kruskal_mst_straightforward};
pub use prim::{prim_mst, prim_mst_improved};

use selkie_graph::{Graph, VertexId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeEdge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningTree {
    /// Tree edges in the order the algorithm accepted them.
    pub edges: Vec<TreeEdge>,
    pub cost: f64,
}

impl SpanningTree {
    pub(crate) fn push(&mut self, a: VertexId, b: VertexId, weight: f64) {
        self.edges.push(TreeEdge { a, b, weight });
        self.cost += weight;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clustering {
    /// Smallest distance between two points in different clusters; infinite when no edge
    /// crosses between clusters.
    pub spacing: f64,
    pub clusters: Vec<Vec<VertexId>>,
}

/// Edges sorted by weight; equal weights keep graph order.
pub(crate) fn sorted_edges(g: &Graph) -> Vec<(f64, VertexId, VertexId)> {
    let mut edges: Vec<(f64, VertexId, VertexId)> = g
        .edges()
        .map(|e| (e.weight(), e.tail(), e.head()))
        .collect();
    edges.sort_by(|x, y| x.0.total_cmp(&y.0));
    edges
}
