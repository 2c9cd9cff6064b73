//! Graph container.
//!
//! Vertices are kept in insertion order with an id -> slot index. Edges live in a flat list
//! with an id -> slot index and are removed with `swap_remove`, so the global edge order is
//! not stable across removals; the per-vertex incidence lists do keep insertion order.
//!
//! Every mutating operation validates its inputs before touching any storage, so a returned
//! error always leaves the graph unchanged.

mod entries;
mod options;

pub use entries::{Edge, EdgeId, Vertex};
pub use options::GraphOptions;

use crate::error::{GraphError, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

pub type VertexId = usize;

#[derive(Debug, Clone)]
pub struct Graph {
    options: GraphOptions,

    vertices: Vec<Vertex>,
    vertex_index: HashMap<VertexId, usize>,

    edges: Vec<Edge>,
    edge_index: HashMap<EdgeId, usize>,
    next_edge: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            next_edge: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions::directed())
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions::undirected())
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertex_index.contains_key(&id)
    }

    pub fn find_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_index.get(&id).map(|&slot| &self.vertices[slot])
    }

    /// Dense position of `id` in insertion order, suitable for indexing scratch arrays.
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.vertex_index.get(&id).copied()
    }

    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    /// One past the largest vertex id, or `0` for an empty graph.
    pub fn next_vertex_id(&self) -> VertexId {
        self.vertices
            .iter()
            .map(|v| v.id)
            .max()
            .map_or(0, |max| max + 1)
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&id).map(|&slot| &self.edges[slot])
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edge_count_between(a, b) > 0
    }

    /// Number of parallel edges from `a` to `b` (between `a` and `b` when undirected).
    /// Answered from the per-vertex frequency maps in O(1).
    pub fn edge_count_between(&self, a: VertexId, b: VertexId) -> usize {
        self.find_vertex(a).map_or(0, |v| v.edges_to(b))
    }

    /// Emissive edges of `v`; every touching edge for undirected graphs.
    pub fn out_edges(&self, v: VertexId) -> &[EdgeId] {
        self.find_vertex(v)
            .map(|v| v.out_edges())
            .unwrap_or_default()
    }

    /// Incident (incoming) edges of `v`; every touching edge for undirected graphs.
    pub fn in_edges(&self, v: VertexId) -> &[EdgeId] {
        match self.find_vertex(v) {
            Some(vertex) if self.options.directed => vertex.in_edges(),
            Some(vertex) => vertex.out_edges(),
            None => &[][..],
        }
    }

    /// Every edge touching `v`, each listed once.
    pub fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let (out, inc) = self
            .find_vertex(v)
            .map_or((&[][..], &[][..]), |v| (v.out_edges(), v.in_edges()));
        out.iter().chain(inc.iter()).copied()
    }

    /// Heads of the emissive edges of `v`, one entry per parallel edge.
    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(v)
            .iter()
            .filter_map(move |&e| self.edge(e).and_then(|edge| edge.other_end(v)))
    }

    /// Tails of the incident edges of `v`, one entry per parallel edge.
    pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.in_edges(v)
            .iter()
            .filter_map(move |&e| self.edge(e).and_then(|edge| edge.other_end(v)))
    }

    pub fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        if self.vertex_index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex { id });
        }
        self.vertex_index.insert(id, self.vertices.len());
        self.vertices.push(Vertex::new(id));
        Ok(())
    }

    /// Removes `id` together with every edge touching it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        let Some(&slot) = self.vertex_index.get(&id) else {
            return Err(GraphError::VertexNotFound { id });
        };

        let touching: Vec<EdgeId> = self.incident_edges(id).collect();
        for &e in &touching {
            self.detach(e);
        }

        self.vertices.remove(slot);
        self.vertex_index.remove(&id);
        for (i, v) in self.vertices.iter().enumerate().skip(slot) {
            self.vertex_index.insert(v.id, i);
        }

        tracing::trace!(vertex = id, removed_edges = touching.len(), "removed vertex");
        Ok(())
    }

    pub fn add_edge(&mut self, tail: VertexId, head: VertexId) -> Result<EdgeId> {
        self.add_weighted_edge(tail, head, 1.0)
    }

    /// Adds one edge instance. Both endpoints must already exist and differ; parallel edges are
    /// allowed and tracked separately.
    pub fn add_weighted_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: f64,
    ) -> Result<EdgeId> {
        for missing in [tail, head] {
            if !self.has_vertex(missing) {
                return Err(GraphError::EdgeEndpointMissing {
                    tail,
                    head,
                    missing,
                });
            }
        }
        if tail == head {
            return Err(GraphError::SelfLoopRejected { id: tail });
        }

        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.attach(Edge {
            id,
            tail,
            head,
            weight,
        });
        Ok(id)
    }

    /// Removes one edge from `a` to `b` (between `a` and `b` when undirected): the earliest
    /// inserted instance still present in `a`'s list.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId> {
        let found = self
            .first_edge_between(a, b)?
            .ok_or(GraphError::EdgeNotFound { a, b })?;
        self.detach(found);
        Ok(found)
    }

    /// Repeats [`Graph::remove_edge`] until no edge from `a` to `b` is left and returns how many
    /// were removed. For directed graphs only the `a -> b` direction is affected.
    pub fn remove_all_edges_between(&mut self, a: VertexId, b: VertexId) -> Result<usize> {
        let mut removed = 0;
        loop {
            match self.remove_edge(a, b) {
                Ok(_) => removed += 1,
                Err(GraphError::EdgeNotFound { .. }) => return Ok(removed),
                Err(err) => return Err(err),
            }
        }
    }

    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Result<Edge> {
        self.detach(id).ok_or(GraphError::UnknownEdge { id })
    }

    /// Merges `a` and `b` into a fresh vertex with id [`Graph::next_vertex_id`].
    ///
    /// Edges joining `a` and `b` are deleted; every other edge touching either of them is
    /// redirected to the merged vertex and keeps its id and weight. Both originals are removed.
    pub fn contract(&mut self, a: VertexId, b: VertexId) -> Result<VertexId> {
        for id in [a, b] {
            if !self.has_vertex(id) {
                return Err(GraphError::VertexNotFound { id });
            }
        }
        if a == b {
            return Err(GraphError::SelfLoopRejected { id: a });
        }

        let merged = self.next_vertex_id();
        let mut touching: Vec<EdgeId> = self
            .incident_edges(a)
            .chain(self.incident_edges(b))
            .collect();
        touching.sort_unstable();
        touching.dedup();

        let mut dropped = 0usize;
        let mut rewired: Vec<Edge> = Vec::with_capacity(touching.len());
        for e in touching {
            let Some(mut edge) = self.detach(e) else {
                continue;
            };
            if edge.joins(a, b) {
                dropped += 1;
                continue;
            }
            if edge.tail == a || edge.tail == b {
                edge.tail = merged;
            }
            if edge.head == a || edge.head == b {
                edge.head = merged;
            }
            rewired.push(edge);
        }

        self.remove_vertex(a)?;
        self.remove_vertex(b)?;
        self.add_vertex(merged)?;
        for edge in rewired {
            self.attach(edge);
        }

        tracing::trace!(a, b, merged, dropped, "contracted vertices");
        Ok(merged)
    }

    fn first_edge_between(&self, a: VertexId, b: VertexId) -> Result<Option<EdgeId>> {
        let Some(va) = self.find_vertex(a) else {
            return Err(GraphError::VertexNotFound { id: a });
        };
        if !self.has_vertex(b) {
            return Err(GraphError::VertexNotFound { id: b });
        }
        if va.edges_to(b) == 0 {
            return Ok(None);
        }
        Ok(va.out_edges().iter().copied().find(|&e| {
            self.edge(e)
                .is_some_and(|edge| edge.other_end(a) == Some(b))
        }))
    }

    fn attach(&mut self, edge: Edge) {
        debug_assert!(self.has_vertex(edge.tail) && self.has_vertex(edge.head));
        let (Some(&t), Some(&h)) = (
            self.vertex_index.get(&edge.tail),
            self.vertex_index.get(&edge.head),
        ) else {
            return;
        };

        self.vertices[t].link_out(edge.id, edge.head);
        if self.options.directed {
            self.vertices[h].link_in(edge.id, edge.tail);
        } else {
            self.vertices[h].link_out(edge.id, edge.tail);
        }
        self.edge_index.insert(edge.id, self.edges.len());
        self.edges.push(edge);
    }

    fn detach(&mut self, id: EdgeId) -> Option<Edge> {
        let slot = self.edge_index.remove(&id)?;
        let edge = self.edges.swap_remove(slot);
        if let Some(moved) = self.edges.get(slot) {
            self.edge_index.insert(moved.id, slot);
        }

        if let Some(&t) = self.vertex_index.get(&edge.tail) {
            self.vertices[t].unlink_out(id, edge.head);
        }
        if let Some(&h) = self.vertex_index.get(&edge.head) {
            if self.options.directed {
                self.vertices[h].unlink_in(id, edge.tail);
            } else {
                self.vertices[h].unlink_out(id, edge.tail);
            }
        }
        Some(edge)
    }
}
