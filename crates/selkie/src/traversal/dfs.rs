use super::Explored;
use crate::adjacency::{Adjacency, Arc, position};
use crate::error::Result;
use selkie_graph::{Graph, VertexId};

/// Vertices reachable from `source` in depth-first discovery (pre-)order, following emissive
/// edges in insertion order exactly as a recursive search would.
pub fn dfs(g: &Graph, source: VertexId) -> Result<Vec<VertexId>> {
    let mut explored = Explored::new(g);
    dfs_from(g, source, &mut explored)
}

/// Like [`dfs`], but skips vertices already marked in `explored` and marks what it reaches.
pub fn dfs_from(g: &Graph, source: VertexId, explored: &mut Explored) -> Result<Vec<VertexId>> {
    let s = position(g, source)?;
    let adj = Adjacency::new(g);
    explored.fit(adj.len());
    let mut order: Vec<VertexId> = Vec::new();
    walk(&adj.out, s, explored, |step| {
        if let Step::Discover(v) = step {
            order.push(adj.id(v));
        }
    });
    Ok(order)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Discover(usize),
    Finish(usize),
}

/// Iterative depth-first walk over `arcs` reporting discovery and finishing events.
///
/// A frame keeps the position of the next arc to try, which reproduces the visiting order of
/// the recursive formulation without growing the call stack.
pub(crate) fn walk(
    arcs: &[Vec<Arc>],
    start: usize,
    explored: &mut Explored,
    mut visit: impl FnMut(Step),
) {
    if !explored.mark(start) {
        return;
    }
    visit(Step::Discover(start));
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    while let Some((v, next)) = stack.last_mut() {
        let v = *v;
        match arcs[v].get(*next) {
            Some(arc) => {
                *next += 1;
                if explored.mark(arc.to) {
                    visit(Step::Discover(arc.to));
                    stack.push((arc.to, 0));
                }
            }
            None => {
                stack.pop();
                visit(Step::Finish(v));
            }
        }
    }
}
