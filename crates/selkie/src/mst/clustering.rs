use super::{Clustering, sorted_edges};
use crate::error::{Error, Result, require_undirected};
use indexmap::IndexMap;
use selkie_graph::{Graph, UnionFind, VertexId};

/// Single-link clustering into `k` clusters with maximum spacing.
///
/// Runs Kruskal's union loop until exactly `k` groups remain; the weight of the next edge
/// joining two different groups is the achieved spacing. When the graph has at least `k`
/// connected components no edge crosses clusters and the spacing is infinite.
pub fn max_spacing_clustering(g: &Graph, k: usize) -> Result<Clustering> {
    require_undirected(g, "max_spacing_clustering")?;
    let n = g.vertex_count();
    if k < 2 || k > n {
        return Err(Error::InvalidClusterCount { k, vertices: n });
    }

    let mut groups = UnionFind::new(g.vertex_ids());
    let mut spacing = f64::INFINITY;
    for (weight, a, b) in sorted_edges(g) {
        if groups.same_group(&a, &b) {
            continue;
        }
        if groups.num_groups() == k {
            spacing = weight;
            break;
        }
        groups.union_members(&a, &b)?;
    }

    // Fewer edges than needed: merge whole components until `k` groups remain.
    while groups.num_groups() > k {
        let mut leaders: Vec<VertexId> = Vec::with_capacity(2);
        for v in g.vertex_ids() {
            let Some(&leader) = groups.find(&v) else {
                continue;
            };
            if !leaders.contains(&leader) {
                leaders.push(leader);
                if leaders.len() == 2 {
                    break;
                }
            }
        }
        let [first, second] = leaders.as_slice() else {
            break;
        };
        groups.union(first, second)?;
    }

    let mut clusters: IndexMap<VertexId, Vec<VertexId>> = IndexMap::new();
    for v in g.vertex_ids() {
        if let Some(&leader) = groups.find(&v) {
            clusters.entry(leader).or_default().push(v);
        }
    }

    tracing::debug!(k, spacing, "single-link clustering finished");
    Ok(Clustering {
        spacing,
        clusters: clusters.into_values().collect(),
    })
}
