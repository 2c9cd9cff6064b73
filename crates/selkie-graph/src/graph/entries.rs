//! Vertex and edge records stored by [`Graph`](super::Graph).

use super::{HashMap, VertexId};
use std::fmt;

/// Stable handle of one edge instance. Parallel edges get distinct ids, and ids survive
/// endpoint rewrites during contraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(in crate::graph) u64);

impl EdgeId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(in crate::graph) id: EdgeId,
    pub(in crate::graph) tail: VertexId,
    pub(in crate::graph) head: VertexId,
    pub(in crate::graph) weight: f64,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source vertex for directed graphs, `end1` for undirected ones.
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    /// Target vertex for directed graphs, `end2` for undirected ones.
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.tail, self.head)
    }

    pub fn touches(&self, v: VertexId) -> bool {
        self.tail == v || self.head == v
    }

    /// The endpoint opposite to `v`, or `None` if `v` is not an endpoint.
    pub fn other_end(&self, v: VertexId) -> Option<VertexId> {
        if self.tail == v {
            Some(self.head)
        } else if self.head == v {
            Some(self.tail)
        } else {
            None
        }
    }

    /// Whether the edge joins `a` and `b`, in either orientation.
    pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
        (self.tail == a && self.head == b) || (self.tail == b && self.head == a)
    }
}

/// A vertex and its incidence bookkeeping.
///
/// For directed graphs `out_edges` holds the emissive edges and `in_edges` the incident ones.
/// Undirected graphs list every touching edge in `out_edges` and leave `in_edges` empty.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub(in crate::graph) id: VertexId,
    pub(in crate::graph) out_edges: Vec<EdgeId>,
    pub(in crate::graph) in_edges: Vec<EdgeId>,
    pub(in crate::graph) out_freq: HashMap<VertexId, usize>,
    pub(in crate::graph) in_freq: HashMap<VertexId, usize>,
}

impl Vertex {
    pub(in crate::graph) fn new(id: VertexId) -> Self {
        Self {
            id,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            out_freq: HashMap::default(),
            in_freq: HashMap::default(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    /// Number of edges leaving this vertex towards `other` (all touching edges when undirected).
    pub fn edges_to(&self, other: VertexId) -> usize {
        self.out_freq.get(&other).copied().unwrap_or(0)
    }

    /// Number of edges entering this vertex from `other`. Always zero for undirected graphs.
    pub fn edges_from(&self, other: VertexId) -> usize {
        self.in_freq.get(&other).copied().unwrap_or(0)
    }

    pub(in crate::graph) fn link_out(&mut self, edge: EdgeId, neighbor: VertexId) {
        self.out_edges.push(edge);
        *self.out_freq.entry(neighbor).or_insert(0) += 1;
    }

    pub(in crate::graph) fn link_in(&mut self, edge: EdgeId, neighbor: VertexId) {
        self.in_edges.push(edge);
        *self.in_freq.entry(neighbor).or_insert(0) += 1;
    }

    pub(in crate::graph) fn unlink_out(&mut self, edge: EdgeId, neighbor: VertexId) {
        unlink(&mut self.out_edges, &mut self.out_freq, edge, neighbor);
    }

    pub(in crate::graph) fn unlink_in(&mut self, edge: EdgeId, neighbor: VertexId) {
        unlink(&mut self.in_edges, &mut self.in_freq, edge, neighbor);
    }
}

fn unlink(
    list: &mut Vec<EdgeId>,
    freq: &mut HashMap<VertexId, usize>,
    edge: EdgeId,
    neighbor: VertexId,
) {
    // `Vec::remove` keeps the remaining edges in insertion order.
    if let Some(pos) = list.iter().position(|&e| e == edge) {
        list.remove(pos);
    }
    if let Some(count) = freq.get_mut(&neighbor) {
        *count -= 1;
        if *count == 0 {
            freq.remove(&neighbor);
        }
    }
}
