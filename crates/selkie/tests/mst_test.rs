use selkie::Error;
use selkie::graph::{Graph, GraphOptions, VertexId};
use selkie::mst::{
    SpanningTree, kruskal_mst, kruskal_mst_lazy, kruskal_mst_straightforward,
    max_spacing_clustering, prim_mst, prim_mst_improved,
};

fn build(n: VertexId, edges: &[(VertexId, VertexId, f64)]) -> Graph {
    let mut g = Graph::undirected();
    for id in 1..=n {
        g.add_vertex(id).unwrap();
    }
    for &(a, b, w) in edges {
        g.add_weighted_edge(a, b, w).unwrap();
    }
    g
}

fn all_variants(g: &Graph) -> Vec<(&'static str, Result<SpanningTree, Error>)> {
    vec![
        ("prim", prim_mst(g)),
        ("prim_improved", prim_mst_improved(g)),
        ("kruskal", kruskal_mst(g)),
        ("kruskal_lazy", kruskal_mst_lazy(g)),
        ("kruskal_straightforward", kruskal_mst_straightforward(g)),
    ]
}

#[test]
fn every_variant_finds_the_four_vertex_tree() {
    let g = build(
        4,
        &[
            (1, 2, 1.0),
            (2, 3, 2.0),
            (3, 4, 1.0),
            (1, 4, 3.0),
            (1, 3, 2.5),
        ],
    );
    for (name, tree) in all_variants(&g) {
        let tree = tree.unwrap();
        assert_eq!(tree.cost, 4.0, "{name}");
        assert_eq!(tree.edges.len(), 3, "{name}");
    }
}

#[test]
fn variants_agree_on_a_larger_graph_with_parallel_edges() {
    let g = build(
        7,
        &[
            (1, 2, 7.0),
            (1, 4, 5.0),
            (2, 3, 8.0),
            (2, 4, 9.0),
            (2, 5, 7.0),
            (3, 5, 5.0),
            (4, 5, 15.0),
            (4, 6, 6.0),
            (5, 6, 8.0),
            (5, 7, 9.0),
            (6, 7, 11.0),
            (6, 7, 1.5),
        ],
    );
    for (name, tree) in all_variants(&g) {
        assert_eq!(tree.unwrap().cost, 31.5, "{name}");
    }
}

#[test]
fn prim_grows_from_the_first_vertex() {
    let g = build(3, &[(2, 3, 1.0), (1, 2, 4.0)]);
    let tree = prim_mst(&g).unwrap();
    assert_eq!(tree.edges[0].a, 1);
    assert_eq!(tree.edges[0].b, 2);
    assert_eq!(tree.edges[1].a, 2);
    assert_eq!(tree.edges[1].b, 3);
}

#[test]
fn disconnected_graphs_have_no_spanning_tree() {
    let g = build(4, &[(1, 2, 1.0), (3, 4, 1.0)]);
    for (name, tree) in all_variants(&g) {
        assert_eq!(tree, Err(Error::Disconnected), "{name}");
    }
}

#[test]
fn trivial_graphs_have_empty_trees() {
    for g in [Graph::undirected(), build(1, &[])] {
        for (name, tree) in all_variants(&g) {
            let tree = tree.unwrap();
            assert_eq!(tree.cost, 0.0, "{name}");
            assert!(tree.edges.is_empty(), "{name}");
        }
    }
}

#[test]
fn spanning_trees_require_undirected_graphs() {
    let mut g = Graph::directed();
    g.add_vertex(1).unwrap();
    assert!(matches!(
        prim_mst(&g),
        Err(Error::UnsupportedGraphKind { .. })
    ));
    assert!(matches!(
        kruskal_mst(&g),
        Err(Error::UnsupportedGraphKind { .. })
    ));
}

fn points_on_a_line() -> Graph {
    // Complete graph over 1, 2, 3, 10, 11, 20 where the weight is the distance on a line.
    let xs: [(VertexId, f64); 6] = [(1, 1.0), (2, 2.0), (3, 3.0), (4, 10.0), (5, 11.0), (6, 20.0)];
    let mut g = Graph::new(GraphOptions::undirected());
    for &(id, _) in &xs {
        g.add_vertex(id).unwrap();
    }
    for (i, &(a, xa)) in xs.iter().enumerate() {
        for &(b, xb) in &xs[i + 1..] {
            g.add_weighted_edge(a, b, (xa - xb).abs()).unwrap();
        }
    }
    g
}

#[test]
fn max_spacing_clustering_returns_the_next_crossing_edge() {
    let g = points_on_a_line();

    let three = max_spacing_clustering(&g, 3).unwrap();
    assert_eq!(three.spacing, 7.0);
    assert_eq!(three.clusters, vec![vec![1, 2, 3], vec![4, 5], vec![6]]);

    let two = max_spacing_clustering(&g, 2).unwrap();
    assert_eq!(two.spacing, 9.0);
    assert_eq!(two.clusters.len(), 2);

    let all = max_spacing_clustering(&g, 6).unwrap();
    assert_eq!(all.spacing, 1.0);
    assert_eq!(all.clusters.len(), 6);
}

#[test]
fn max_spacing_clustering_validates_k() {
    let g = points_on_a_line();
    assert_eq!(
        max_spacing_clustering(&g, 1),
        Err(Error::InvalidClusterCount { k: 1, vertices: 6 })
    );
    assert_eq!(
        max_spacing_clustering(&g, 7),
        Err(Error::InvalidClusterCount { k: 7, vertices: 6 })
    );
}

#[test]
fn max_spacing_clustering_is_infinite_across_components() {
    let g = build(5, &[(1, 2, 1.0), (3, 4, 2.0)]);
    let clustering = max_spacing_clustering(&g, 2).unwrap();
    assert_eq!(clustering.spacing, f64::INFINITY);
    assert_eq!(clustering.clusters.len(), 2);
    let members: usize = clustering.clusters.iter().map(Vec::len).sum();
    assert_eq!(members, 5);
}
