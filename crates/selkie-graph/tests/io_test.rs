use selkie_graph::{GraphError, GraphOptions, LoadError, parse_graph, read_graph};
use std::io::Write;

#[test]
fn parse_graph_creates_numbered_vertices_and_unit_edges() {
    let g = parse_graph(GraphOptions::undirected(), "4\n1 2\n2 3\n3 4\n4 1\n").unwrap();
    assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(g.edge_count(), 4);
    assert!(g.edges().all(|e| e.weight() == 1.0));
    assert_eq!(g.edge_count_between(1, 4), 1);
}

#[test]
fn parse_graph_reads_weights_and_skips_blank_lines() {
    let g = parse_graph(GraphOptions::directed(), "3\n\n1 2 -4.5\n  2 3 7\n\n").unwrap();
    let weights: Vec<f64> = g.edges().map(|e| e.weight()).collect();
    assert_eq!(weights, vec![-4.5, 7.0]);
    assert!(!g.has_edge(2, 1));
}

#[test]
fn parse_graph_rejects_empty_input_and_bad_header() {
    assert!(matches!(
        parse_graph(GraphOptions::directed(), "\n  \n"),
        Err(LoadError::MissingHeader)
    ));
    assert!(matches!(
        parse_graph(GraphOptions::directed(), "three\n"),
        Err(LoadError::InvalidHeader { .. })
    ));
}

#[test]
fn parse_graph_reports_the_offending_line() {
    let err = parse_graph(GraphOptions::directed(), "2\n1 2\n1 x\n").unwrap_err();
    match err {
        LoadError::InvalidLine { line, content } => {
            assert_eq!(line, 3);
            assert_eq!(content, "1 x");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = parse_graph(GraphOptions::directed(), "2\n1 2 3 4\n").unwrap_err();
    assert!(matches!(err, LoadError::InvalidLine { line: 2, .. }));
}

#[test]
fn parse_graph_surfaces_structural_errors() {
    let err = parse_graph(GraphOptions::directed(), "2\n1 3\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Graph {
            line: 2,
            source: GraphError::EdgeEndpointMissing { missing: 3, .. }
        }
    ));

    let err = parse_graph(GraphOptions::undirected(), "2\n2 2\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Graph {
            source: GraphError::SelfLoopRejected { id: 2 },
            ..
        }
    ));
}

#[test]
fn read_graph_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "3").unwrap();
    writeln!(file, "1 2 2.5").unwrap();
    writeln!(file, "2 3 1").unwrap();

    let g = read_graph(GraphOptions::undirected(), file.path()).unwrap();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn read_graph_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_graph(GraphOptions::directed(), dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
