use selkie::Error;
use selkie::graph::{Graph, GraphError, GraphOptions, VertexId};
use selkie::traversal::{
    Explored, bfs, bfs_from, connected_components, dfs, num_connected_components,
    num_connected_components_dfs, num_strongly_connected_components, shortest_path_length,
    strongly_connected_components, topological_sort, topological_sort_straightforward,
};

fn build(options: GraphOptions, n: VertexId, edges: &[(VertexId, VertexId)]) -> Graph {
    let mut g = Graph::new(options);
    for id in 1..=n {
        g.add_vertex(id).unwrap();
    }
    for &(a, b) in edges {
        g.add_edge(a, b).unwrap();
    }
    g
}

fn cycle_with_chord() -> Graph {
    build(
        GraphOptions::undirected(),
        6,
        &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1), (1, 4)],
    )
}

fn sorted(mut v: Vec<VertexId>) -> Vec<VertexId> {
    v.sort();
    v
}

#[test]
fn bfs_reaches_every_vertex_in_layer_order() {
    let g = cycle_with_chord();
    let order = bfs(&g, 1).unwrap();
    assert_eq!(order, vec![1, 2, 6, 4, 3, 5]);
    assert_eq!(sorted(order), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn shortest_path_length_counts_hops() {
    let g = cycle_with_chord();
    assert_eq!(shortest_path_length(&g, 1, 6).unwrap(), Some(1));
    assert_eq!(shortest_path_length(&g, 1, 5).unwrap(), Some(2));
    assert_eq!(shortest_path_length(&g, 2, 5).unwrap(), Some(3));
    assert_eq!(shortest_path_length(&g, 3, 3).unwrap(), Some(0));
}

#[test]
fn shortest_path_length_is_none_when_unreachable() {
    let g = build(GraphOptions::directed(), 3, &[(1, 2), (3, 2)]);
    assert_eq!(shortest_path_length(&g, 1, 3).unwrap(), None);
    assert_eq!(shortest_path_length(&g, 2, 1).unwrap(), None);
    assert_eq!(
        shortest_path_length(&g, 1, 8),
        Err(Error::Graph(GraphError::VertexNotFound { id: 8 }))
    );
}

#[test]
fn bfs_follows_edge_direction() {
    let g = build(GraphOptions::directed(), 4, &[(1, 2), (2, 3), (4, 1)]);
    assert_eq!(bfs(&g, 1).unwrap(), vec![1, 2, 3]);
    assert_eq!(bfs(&g, 4).unwrap(), vec![4, 1, 2, 3]);
}

#[test]
fn dfs_visits_in_recursive_order() {
    let g = build(
        GraphOptions::directed(),
        6,
        &[(1, 2), (1, 5), (2, 3), (2, 4), (5, 6), (4, 1)],
    );
    assert_eq!(dfs(&g, 1).unwrap(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn shared_explored_marks_skip_reached_vertices_until_cleared() {
    let g = build(GraphOptions::undirected(), 5, &[(1, 2), (2, 3), (4, 5)]);
    let mut explored = Explored::new(&g);

    assert_eq!(bfs_from(&g, 1, &mut explored).unwrap(), vec![1, 2, 3]);
    assert_eq!(bfs_from(&g, 3, &mut explored).unwrap(), Vec::<VertexId>::new());
    assert_eq!(bfs_from(&g, 4, &mut explored).unwrap(), vec![4, 5]);
    assert_eq!(explored.count(), 5);

    explored.clear();
    assert_eq!(explored.count(), 0);
    assert_eq!(sorted(bfs_from(&g, 3, &mut explored).unwrap()), vec![1, 2, 3]);
}

#[test]
fn connected_components_count_bfs_and_dfs_launches() {
    let g = build(
        GraphOptions::undirected(),
        7,
        &[(1, 2), (2, 3), (4, 5), (6, 7), (7, 6)],
    );
    assert_eq!(num_connected_components(&g).unwrap(), 3);
    assert_eq!(num_connected_components_dfs(&g), 3);
    assert_eq!(
        connected_components(&g).unwrap(),
        vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]
    );
}

#[test]
fn connected_components_rejects_directed_graphs() {
    let g = build(GraphOptions::directed(), 2, &[(1, 2)]);
    assert!(matches!(
        num_connected_components(&g),
        Err(Error::UnsupportedGraphKind { .. })
    ));
}

#[test]
fn strongly_connected_components_use_both_passes() {
    // Two cycles {1,2,3} and {4,5,6} joined one way, plus a lone sink 7.
    let g = build(
        GraphOptions::directed(),
        7,
        &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4), (6, 7)],
    );
    let mut sccs: Vec<Vec<VertexId>> = strongly_connected_components(&g)
        .unwrap()
        .into_iter()
        .map(sorted)
        .collect();
    sccs.sort();
    assert_eq!(sccs, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    assert_eq!(num_strongly_connected_components(&g).unwrap(), 3);
    assert_eq!(num_connected_components_dfs(&g), 3);
}

#[test]
fn strongly_connected_components_of_a_dag_are_singletons() {
    let g = build(GraphOptions::directed(), 4, &[(1, 2), (2, 3), (1, 3), (3, 4)]);
    assert_eq!(num_strongly_connected_components(&g).unwrap(), 4);
}

fn assert_topological(g: &Graph, order: &[VertexId]) {
    assert_eq!(sorted(order.to_vec()), sorted(g.vertex_ids().collect()));
    let pos = |v: VertexId| order.iter().position(|&x| x == v).unwrap();
    for edge in g.edges() {
        assert!(pos(edge.tail()) < pos(edge.head()), "edge {edge:?} out of order");
    }
}

#[test]
fn topological_sort_orders_every_edge_forward() {
    let g = build(
        GraphOptions::directed(),
        6,
        &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (6, 3)],
    );
    let order = topological_sort(&g).unwrap();
    assert_topological(&g, &order);
    let order = topological_sort_straightforward(g.clone()).unwrap();
    assert_topological(&g, &order);
}

#[test]
fn topological_sort_reports_cycles() {
    let g = build(GraphOptions::directed(), 4, &[(1, 2), (2, 3), (3, 1), (3, 4)]);
    assert_eq!(topological_sort(&g), Err(Error::GraphHasCycle));
    assert_eq!(topological_sort_straightforward(g), Err(Error::GraphHasCycle));
}

#[test]
fn topological_sort_of_empty_graph_is_empty() {
    let g = Graph::directed();
    assert_eq!(topological_sort(&g).unwrap(), Vec::<VertexId>::new());
    assert_eq!(topological_sort_straightforward(g).unwrap(), Vec::<VertexId>::new());
}
