use super::{SpanningTree, sorted_edges};
use crate::error::{Error, Result, require_undirected};
use selkie_graph::{Graph, LazyUnionFind, UnionFind};

/// Kruskal's algorithm with the eager [`UnionFind`], O(m log n).
pub fn kruskal_mst(g: &Graph) -> Result<SpanningTree> {
    require_undirected(g, "kruskal_mst")?;
    let n = g.vertex_count();
    let mut groups = UnionFind::new(g.vertex_ids());
    let mut tree = SpanningTree::default();
    for (weight, a, b) in sorted_edges(g) {
        if tree.edges.len() + 1 >= n {
            break;
        }
        if groups.union_members(&a, &b)? {
            tree.push(a, b, weight);
        }
    }
    finish(tree, n, "kruskal")
}

/// Kruskal's algorithm with [`LazyUnionFind`] (union by rank, path compression).
pub fn kruskal_mst_lazy(g: &Graph) -> Result<SpanningTree> {
    require_undirected(g, "kruskal_mst_lazy")?;
    let n = g.vertex_count();
    let mut groups = LazyUnionFind::new(n);
    let mut tree = SpanningTree::default();
    for (weight, a, b) in sorted_edges(g) {
        if tree.edges.len() + 1 >= n {
            break;
        }
        let (Some(ia), Some(ib)) = (g.index_of(a), g.index_of(b)) else {
            continue;
        };
        if groups.union(ia, ib) {
            tree.push(a, b, weight);
        }
    }
    finish(tree, n, "kruskal (lazy union)")
}

/// Kruskal's algorithm that rejects an edge when a depth-first search already finds a path
/// between its endpoints in the partial forest, O(mn).
pub fn kruskal_mst_straightforward(g: &Graph) -> Result<SpanningTree> {
    require_undirected(g, "kruskal_mst_straightforward")?;
    let n = g.vertex_count();
    let mut forest: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut tree = SpanningTree::default();
    for (weight, a, b) in sorted_edges(g) {
        if tree.edges.len() + 1 >= n {
            break;
        }
        let (Some(ia), Some(ib)) = (g.index_of(a), g.index_of(b)) else {
            continue;
        };
        if connected(&forest, ia, ib) {
            continue;
        }
        forest[ia].push(ib);
        forest[ib].push(ia);
        tree.push(a, b, weight);
    }
    finish(tree, n, "kruskal (dfs reachability)")
}

fn connected(forest: &[Vec<usize>], from: usize, to: usize) -> bool {
    let mut seen: Vec<bool> = vec![false; forest.len()];
    let mut stack: Vec<usize> = vec![from];
    seen[from] = true;
    while let Some(v) = stack.pop() {
        if v == to {
            return true;
        }
        for &w in &forest[v] {
            if !seen[w] {
                seen[w] = true;
                stack.push(w);
            }
        }
    }
    false
}

fn finish(tree: SpanningTree, n: usize, algorithm: &str) -> Result<SpanningTree> {
    if n > 0 && tree.edges.len() + 1 != n {
        return Err(Error::Disconnected);
    }
    tracing::debug!(cost = tree.cost, edges = tree.edges.len(), algorithm, "spanning tree built");
    Ok(tree)
}
