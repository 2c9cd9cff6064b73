use super::SpanningTree;
use crate::adjacency::Adjacency;
use crate::error::{Error, Result, require_undirected};
use crate::heap::MinScored;
use std::collections::BinaryHeap;

/// Prim's algorithm with a heap of crossing edges, O((m + n) log m).
///
/// Grows the tree from the first inserted vertex. Edges whose far end got spanned after they
/// were pushed are discarded when popped.
pub fn prim_mst(g: &selkie_graph::Graph) -> Result<SpanningTree> {
    require_undirected(g, "prim_mst")?;
    let adj = Adjacency::new(g);
    let n = adj.len();
    let mut tree = SpanningTree::default();
    if n == 0 {
        return Ok(tree);
    }

    let mut spanned: Vec<bool> = vec![false; n];
    let mut heap: BinaryHeap<MinScored<(usize, usize)>> = BinaryHeap::new();
    let mut spanned_count = 1;
    spanned[0] = true;
    for arc in &adj.out[0] {
        heap.push(MinScored(arc.weight, (arc.to, 0)));
    }

    while spanned_count < n {
        let Some(MinScored(weight, (to, from))) = heap.pop() else {
            return Err(Error::Disconnected);
        };
        if spanned[to] {
            continue;
        }
        spanned[to] = true;
        spanned_count += 1;
        tree.push(adj.id(from), adj.id(to), weight);
        for arc in &adj.out[to] {
            if !spanned[arc.to] {
                heap.push(MinScored(arc.weight, (arc.to, to)));
            }
        }
    }

    tracing::debug!(cost = tree.cost, edges = tree.edges.len(), "prim finished");
    Ok(tree)
}

/// Prim's algorithm with a heap of vertices keyed by their cheapest edge into the tree.
///
/// A key decrease pushes a fresh entry; outdated entries are skipped when popped.
pub fn prim_mst_improved(g: &selkie_graph::Graph) -> Result<SpanningTree> {
    require_undirected(g, "prim_mst_improved")?;
    let adj = Adjacency::new(g);
    let n = adj.len();
    let mut tree = SpanningTree::default();
    if n == 0 {
        return Ok(tree);
    }

    let mut min_incident_cost: Vec<f64> = vec![f64::INFINITY; n];
    let mut min_cost_neighbor: Vec<Option<usize>> = vec![None; n];
    let mut in_tree: Vec<bool> = vec![false; n];
    let mut heap: BinaryHeap<MinScored<usize>> = BinaryHeap::new();
    min_incident_cost[0] = 0.0;
    heap.push(MinScored(0.0, 0));

    let mut spanned_count = 0;
    while let Some(MinScored(key, v)) = heap.pop() {
        if in_tree[v] || key > min_incident_cost[v] {
            continue;
        }
        in_tree[v] = true;
        spanned_count += 1;
        if let Some(from) = min_cost_neighbor[v] {
            tree.push(adj.id(from), adj.id(v), key);
        }
        for arc in &adj.out[v] {
            if !in_tree[arc.to] && arc.weight < min_incident_cost[arc.to] {
                min_incident_cost[arc.to] = arc.weight;
                min_cost_neighbor[arc.to] = Some(v);
                heap.push(MinScored(arc.weight, arc.to));
            }
        }
    }

    if spanned_count < n {
        return Err(Error::Disconnected);
    }
    tracing::debug!(cost = tree.cost, edges = tree.edges.len(), "prim (vertex heap) finished");
    Ok(tree)
}
