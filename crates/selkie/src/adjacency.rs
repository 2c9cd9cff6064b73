//! Dense adjacency snapshot of a [`Graph`].
//!
//! Algorithms index their scratch arrays by the graph's dense vertex positions. The snapshot
//! resolves every edge to those positions once, keeping each vertex's insertion order.

use crate::error::Result;
use selkie_graph::{EdgeId, Graph, GraphError, VertexId};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Arc {
    pub(crate) to: usize,
    pub(crate) weight: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct Adjacency {
    pub(crate) ids: Vec<VertexId>,
    /// Emissive arcs; for undirected graphs every incident edge, seen from this vertex.
    pub(crate) out: Vec<Vec<Arc>>,
    /// Incident arcs pointing back at their tails; equal to `out` for undirected graphs.
    pub(crate) inc: Vec<Vec<Arc>>,
}

impl Adjacency {
    pub(crate) fn new(g: &Graph) -> Self {
        let ids: Vec<VertexId> = g.vertex_ids().collect();
        let resolve = |v: VertexId, edges: &[EdgeId]| -> Vec<Arc> {
            edges
                .iter()
                .filter_map(|&e| {
                    let edge = g.edge(e)?;
                    let to = g.index_of(edge.other_end(v)?)?;
                    Some(Arc {
                        to,
                        weight: edge.weight(),
                    })
                })
                .collect()
        };

        let out: Vec<Vec<Arc>> = ids.iter().map(|&v| resolve(v, g.out_edges(v))).collect();
        let inc: Vec<Vec<Arc>> = if g.is_directed() {
            ids.iter().map(|&v| resolve(v, g.in_edges(v))).collect()
        } else {
            out.clone()
        };
        Self { ids, out, inc }
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn id(&self, index: usize) -> VertexId {
        self.ids[index]
    }
}

/// Dense position of `id`, or [`GraphError::VertexNotFound`].
pub(crate) fn position(g: &Graph, id: VertexId) -> Result<usize> {
    g.index_of(id)
        .ok_or_else(|| GraphError::VertexNotFound { id }.into())
}
