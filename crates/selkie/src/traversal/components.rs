use super::Explored;
use super::bfs::bfs_order;
use super::dfs::{Step, walk};
use crate::adjacency::Adjacency;
use crate::error::{Result, require_directed, require_undirected};
use selkie_graph::{Graph, VertexId};

/// Connected components of an undirected graph, each listed in BFS order from its first
/// vertex. Components appear in the order their first vertex was inserted.
pub fn connected_components(g: &Graph) -> Result<Vec<Vec<VertexId>>> {
    require_undirected(g, "connected_components")?;
    let adj = Adjacency::new(g);
    let mut explored = Explored::with_len(adj.len());
    let mut components: Vec<Vec<VertexId>> = Vec::new();
    for start in 0..adj.len() {
        if explored.is_explored(start) {
            continue;
        }
        let members = bfs_order(&adj, start, &mut explored);
        components.push(members.into_iter().map(|v| adj.id(v)).collect());
    }
    Ok(components)
}

/// Number of BFS launches needed to explore an undirected graph.
pub fn num_connected_components(g: &Graph) -> Result<usize> {
    Ok(connected_components(g)?.len())
}

/// Component count via depth-first search.
///
/// Undirected graphs count DFS launches. Directed graphs count strongly connected components.
pub fn num_connected_components_dfs(g: &Graph) -> usize {
    let adj = Adjacency::new(g);
    if g.is_directed() {
        return kosaraju(&adj).len();
    }
    let mut explored = Explored::with_len(adj.len());
    let mut launches = 0;
    for start in 0..adj.len() {
        if explored.is_explored(start) {
            continue;
        }
        walk(&adj.out, start, &mut explored, |_| {});
        launches += 1;
    }
    launches
}

/// Strongly connected components (Kosaraju).
///
/// The first pass records DFS finishing order on the graph itself. The second pass walks the
/// reversed edges, launching from unexplored vertices in decreasing finishing time; each launch
/// discovers exactly one component.
pub fn strongly_connected_components(g: &Graph) -> Result<Vec<Vec<VertexId>>> {
    require_directed(g, "strongly_connected_components")?;
    let adj = Adjacency::new(g);
    let components: Vec<Vec<VertexId>> = kosaraju(&adj)
        .into_iter()
        .map(|scc| scc.into_iter().map(|v| adj.id(v)).collect())
        .collect();
    tracing::debug!(components = components.len(), "computed strongly connected components");
    Ok(components)
}

pub fn num_strongly_connected_components(g: &Graph) -> Result<usize> {
    Ok(strongly_connected_components(g)?.len())
}

fn kosaraju(adj: &Adjacency) -> Vec<Vec<usize>> {
    let n = adj.len();
    let mut finished: Vec<usize> = Vec::with_capacity(n);
    let mut explored = Explored::with_len(n);
    for start in 0..n {
        walk(&adj.out, start, &mut explored, |step| {
            if let Step::Finish(v) = step {
                finished.push(v);
            }
        });
    }

    explored.clear();
    let mut components: Vec<Vec<usize>> = Vec::new();
    for &start in finished.iter().rev() {
        if explored.is_explored(start) {
            continue;
        }
        let mut members: Vec<usize> = Vec::new();
        walk(&adj.inc, start, &mut explored, |step| {
            if let Step::Discover(v) = step {
                members.push(v);
            }
        });
        components.push(members);
    }
    components
}
