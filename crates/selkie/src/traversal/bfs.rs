use super::Explored;
use crate::adjacency::{Adjacency, position};
use crate::error::Result;
use selkie_graph::{Graph, VertexId};
use std::collections::VecDeque;

/// Vertices reachable from `source`, in order of non-decreasing hop distance; ties follow FIFO
/// discovery order.
pub fn bfs(g: &Graph, source: VertexId) -> Result<Vec<VertexId>> {
    let mut explored = Explored::new(g);
    bfs_from(g, source, &mut explored)
}

/// Like [`bfs`], but skips vertices already marked in `explored` and marks what it reaches.
/// Returns an empty list when `source` itself was already explored.
pub fn bfs_from(g: &Graph, source: VertexId, explored: &mut Explored) -> Result<Vec<VertexId>> {
    let s = position(g, source)?;
    let adj = Adjacency::new(g);
    explored.fit(adj.len());
    Ok(bfs_order(&adj, s, explored)
        .into_iter()
        .map(|v| adj.id(v))
        .collect())
}

pub(crate) fn bfs_order(adj: &Adjacency, s: usize, explored: &mut Explored) -> Vec<usize> {
    let mut order: Vec<usize> = Vec::new();
    if !explored.mark(s) {
        return order;
    }
    let mut queue: VecDeque<usize> = VecDeque::from([s]);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for arc in &adj.out[v] {
            if explored.mark(arc.to) {
                queue.push_back(arc.to);
            }
        }
    }
    order
}

/// Fewest edges on a path from `source` to `dest`, or `None` when `dest` is unreachable.
///
/// The search stops as soon as `dest` is discovered.
pub fn shortest_path_length(g: &Graph, source: VertexId, dest: VertexId) -> Result<Option<usize>> {
    let s = position(g, source)?;
    let d = position(g, dest)?;
    if s == d {
        return Ok(Some(0));
    }

    let adj = Adjacency::new(g);
    let mut explored = Explored::with_len(adj.len());
    let mut layer: Vec<usize> = vec![0; adj.len()];
    explored.mark(s);
    let mut queue: VecDeque<usize> = VecDeque::from([s]);
    while let Some(v) = queue.pop_front() {
        for arc in &adj.out[v] {
            if !explored.mark(arc.to) {
                continue;
            }
            layer[arc.to] = layer[v] + 1;
            if arc.to == d {
                return Ok(Some(layer[d]));
            }
            queue.push_back(arc.to);
        }
    }
    Ok(None)
}
