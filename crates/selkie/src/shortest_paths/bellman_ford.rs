//! Bellman-Ford in its budget-table, early-stopping and push-based forms.
//!
//! `dist[v][i]` is the length of the shortest walk between `v` and the origin using at most
//! `i` edges. Source-driven runs relax over each vertex's incident edges, destination-driven
//! runs over its emissive edges; both are the same recurrence over a different arc list.

use super::{Direction, DistanceTable};
use crate::adjacency::{Adjacency, Arc, position};
use crate::budget::Budget;
use crate::error::{Error, Result};
use selkie_graph::{Graph, VertexId};

/// Shortest distances from `source`, keeping the whole `n x n` table of budget layers.
///
/// A distance that still improves in the extra `n`-th layer means a negative cycle is
/// reachable from `source`.
pub fn bellman_ford(g: &Graph, source: VertexId) -> Result<DistanceTable> {
    let s = position(g, source)?;
    let adj = Adjacency::new(g);
    let (dist, pred) = budget_table(&adj.inc, s)?;
    Ok(DistanceTable::build(
        &adj.ids,
        s,
        Direction::FromSource,
        &dist,
        &pred,
    ))
}

/// Shortest distances from `source` with O(n) space: only the previous layer is kept, plus a
/// penultimate-vertex pointer per vertex. Stops as soon as a layer changes nothing.
pub fn bellman_ford_optimized(g: &Graph, source: VertexId) -> Result<DistanceTable> {
    let s = position(g, source)?;
    let adj = Adjacency::new(g);
    let (dist, pred) = early_stopping(&adj.inc, s)?;
    Ok(DistanceTable::build(
        &adj.ids,
        s,
        Direction::FromSource,
        &dist,
        &pred,
    ))
}

/// Shortest distances from every vertex to `dest`, keeping the whole budget table.
pub fn bellman_ford_to(g: &Graph, dest: VertexId) -> Result<DistanceTable> {
    let d = position(g, dest)?;
    let adj = Adjacency::new(g);
    let (dist, next) = budget_table(&adj.out, d)?;
    Ok(DistanceTable::build(
        &adj.ids,
        d,
        Direction::ToDestination,
        &dist,
        &next,
    ))
}

/// Destination-driven counterpart of [`bellman_ford_optimized`], with next-hop pointers.
pub fn bellman_ford_to_optimized(g: &Graph, dest: VertexId) -> Result<DistanceTable> {
    let d = position(g, dest)?;
    let adj = Adjacency::new(g);
    let (dist, next) = early_stopping(&adj.out, d)?;
    Ok(DistanceTable::build(
        &adj.ids,
        d,
        Direction::ToDestination,
        &dist,
        &next,
    ))
}

/// Destination-driven shortest paths by change notification.
///
/// Whenever a vertex's distance drops it notifies the tails of its incident edges, which
/// relax and notify in turn, depth first. The number of notifications is exponential in the
/// worst case, so every relaxation is charged against `budget`. A walk that grows to `n`
/// edges while still improving proves a negative cycle.
pub fn bellman_ford_push(g: &Graph, dest: VertexId, budget: &mut Budget) -> Result<DistanceTable> {
    let d = position(g, dest)?;
    let adj = Adjacency::new(g);
    let n = adj.len();
    let mut dist: Vec<f64> = vec![f64::INFINITY; n];
    let mut hops: Vec<usize> = vec![0; n];
    let mut next: Vec<Option<usize>> = vec![None; n];
    dist[d] = 0.0;

    let mut stack: Vec<(usize, usize)> = vec![(d, 0)];
    while let Some((v, pos)) = stack.last_mut() {
        let v = *v;
        let Some(arc) = adj.inc[v].get(*pos) else {
            stack.pop();
            continue;
        };
        *pos += 1;
        budget.tick()?;

        let tail = arc.to;
        let candidate = dist[v] + arc.weight;
        if candidate < dist[tail] {
            dist[tail] = candidate;
            next[tail] = Some(v);
            hops[tail] = hops[v] + 1;
            if hops[tail] >= n {
                return Err(Error::NegativeCycleDetected);
            }
            stack.push((tail, 0));
        }
    }

    tracing::debug!(dest, steps = budget.used(), "push-based relaxation finished");
    Ok(DistanceTable::build(
        &adj.ids,
        d,
        Direction::ToDestination,
        &dist,
        &next,
    ))
}

fn budget_table(arcs: &[Vec<Arc>], origin: usize) -> Result<(Vec<f64>, Vec<Option<usize>>)> {
    let n = arcs.len();
    let mut table: Vec<Vec<f64>> = vec![vec![f64::INFINITY; n]; n];
    let mut hop: Vec<Option<usize>> = vec![None; n];
    table[0][origin] = 0.0;

    for i in 1..n {
        let (done, rest) = table.split_at_mut(i);
        let prev = &done[i - 1];
        let cur = &mut rest[0];
        for v in 0..n {
            let mut best = prev[v];
            for arc in &arcs[v] {
                let candidate = prev[arc.to] + arc.weight;
                if candidate < best {
                    best = candidate;
                    hop[v] = Some(arc.to);
                }
            }
            cur[v] = best;
        }
        tracing::trace!(layer = i, "bellman-ford layer relaxed");
    }

    let last = &table[n - 1];
    let improves = (0..n).any(|v| arcs[v].iter().any(|arc| last[arc.to] + arc.weight < last[v]));
    if improves {
        return Err(Error::NegativeCycleDetected);
    }
    let dist = table.swap_remove(n - 1);
    Ok((dist, hop))
}

fn early_stopping(arcs: &[Vec<Arc>], origin: usize) -> Result<(Vec<f64>, Vec<Option<usize>>)> {
    let n = arcs.len();
    let mut prev: Vec<f64> = vec![f64::INFINITY; n];
    let mut hop: Vec<Option<usize>> = vec![None; n];
    prev[origin] = 0.0;

    for i in 1..=n {
        let mut cur = prev.clone();
        let mut changed = false;
        for v in 0..n {
            for arc in &arcs[v] {
                let candidate = prev[arc.to] + arc.weight;
                if candidate < cur[v] {
                    cur[v] = candidate;
                    hop[v] = Some(arc.to);
                    changed = true;
                }
            }
        }
        if !changed {
            tracing::debug!(layers = i - 1, "bellman-ford converged early");
            return Ok((prev, hop));
        }
        if i == n {
            break;
        }
        prev = cur;
    }
    Err(Error::NegativeCycleDetected)
}
