use crate::adjacency::Adjacency;
use crate::error::{Error, Result, require_directed};
use selkie_graph::{Graph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unseen,
    OnStack,
    Done,
}

/// Topological order as the reverse of DFS finishing order.
///
/// An edge back to a vertex still on the DFS stack means the graph has a cycle, reported as
/// [`Error::GraphHasCycle`].
pub fn topological_sort(g: &Graph) -> Result<Vec<VertexId>> {
    require_directed(g, "topological_sort")?;
    let adj = Adjacency::new(g);
    let n = adj.len();
    let mut marks: Vec<Mark> = vec![Mark::Unseen; n];
    let mut finished: Vec<usize> = Vec::with_capacity(n);

    for start in 0..n {
        if marks[start] != Mark::Unseen {
            continue;
        }
        marks[start] = Mark::OnStack;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some((v, next)) = stack.last_mut() {
            let v = *v;
            let Some(arc) = adj.out[v].get(*next) else {
                marks[v] = Mark::Done;
                finished.push(v);
                stack.pop();
                continue;
            };
            *next += 1;
            match marks[arc.to] {
                Mark::Unseen => {
                    marks[arc.to] = Mark::OnStack;
                    stack.push((arc.to, 0));
                }
                Mark::OnStack => return Err(Error::GraphHasCycle),
                Mark::Done => {}
            }
        }
    }

    Ok(finished.into_iter().rev().map(|v| adj.id(v)).collect())
}

/// Topological order by repeatedly deleting a sink and filling the result from the back.
///
/// Consumes the graph since every vertex gets removed. O(n² + m).
pub fn topological_sort_straightforward(mut g: Graph) -> Result<Vec<VertexId>> {
    require_directed(&g, "topological_sort_straightforward")?;
    let mut order: Vec<VertexId> = vec![0; g.vertex_count()];
    let mut slot = order.len();
    while slot > 0 {
        let Some(sink) = g.vertices().find(|v| v.out_degree() == 0).map(|v| v.id()) else {
            return Err(Error::GraphHasCycle);
        };
        slot -= 1;
        order[slot] = sink;
        g.remove_vertex(sink)?;
    }
    Ok(order)
}
