//! Tests for the fiber network store, its file format and the algorithms

use network_graph::{
    build_mst, check_connectivity, Connectivity, Edge, Graph, GraphError, VertexId,
};
use tempfile::TempDir;

fn id(n: u64) -> VertexId {
    VertexId::new(n)
}

fn create_test_network() -> Graph {
    let mut graph = Graph::new();
    for label in ["Centro", "Vila Nova", "Porto", "Jardim America"] {
        graph.insert_vertex(label);
    }
    graph.insert_edge(id(0), id(1), 4.5).unwrap();
    graph.insert_edge(id(1), id(2), 2.0).unwrap();
    graph.insert_edge(id(2), id(3), 7.25).unwrap();
    graph.insert_edge(id(0), id(3), 3.0).unwrap();
    graph.insert_edge(id(0), id(1), 4.5).unwrap();
    graph
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grafo.txt");

    let graph = create_test_network();
    graph.save_to_path(&path).unwrap();

    let mut loaded = Graph::new();
    loaded.load_from_path(&path).unwrap();
    assert_eq!(loaded, graph);
    assert_eq!(loaded.edges(), graph.edges());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut graph = create_test_network();
    let before = graph.clone();

    let err = graph.load_from_path(temp_dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
    assert_eq!(graph, before);
}

#[test]
fn test_malformed_file_leaves_graph_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grafo.txt");
    std::fs::write(&path, "2\n2\n0 \"A\" 0\n1 \"B\" 0\n1\n0 1\n").unwrap();

    let mut graph = create_test_network();
    let before = graph.clone();
    let err = graph.load_from_path(&path).unwrap_err();
    assert!(matches!(err, GraphError::Format { line: 6, .. }));
    assert_eq!(graph, before);
}

#[test]
fn test_kind_marker_is_preserved() {
    let graph = Graph::parse("7\n1\n0 \"A\" 0\n0\n").unwrap();
    assert_eq!(graph.kind(), 7);
    assert!(graph.to_text().starts_with("7\n"));
}

#[test]
fn test_labels_with_spaces_survive() {
    let mut graph = Graph::new();
    graph.insert_vertex("Rua das Flores 120");
    let reparsed = Graph::parse(&graph.to_text()).unwrap();
    assert_eq!(reparsed.label(id(0)), Some("Rua das Flores 120"));
}

#[test]
fn test_insert_then_remove_restores_vertices() {
    let mut graph = create_test_network();
    let original = graph.clone();

    let new_id = graph.insert_vertex("Temporary");
    graph.insert_edge(new_id, id(0), 1.0).unwrap();
    graph.insert_edge(id(2), new_id, 1.5).unwrap();
    graph.remove_vertex(new_id).unwrap();

    assert_eq!(graph, original);
}

#[test]
fn test_concrete_triangle_scenario() {
    let mut graph = Graph::new();
    graph.insert_vertex("A");
    graph.insert_vertex("B");
    graph.insert_vertex("C");
    graph.insert_edge(id(0), id(1), 10.0).unwrap();
    graph.insert_edge(id(1), id(2), 5.0).unwrap();
    graph.insert_edge(id(0), id(2), 8.0).unwrap();

    assert_eq!(check_connectivity(&graph), Connectivity::Connected);
    let tree = build_mst(&graph).unwrap();
    assert_eq!(
        tree.edges,
        vec![Edge::new(id(1), id(2), 5.0), Edge::new(id(0), id(2), 8.0)]
    );
    assert_eq!(tree.total_weight(), 13.0);
}

#[test]
fn test_disconnected_network_detected() {
    let mut graph = Graph::new();
    for label in ["A", "B", "C", "D"] {
        graph.insert_vertex(label);
    }
    graph.insert_edge(id(0), id(1), 5.0).unwrap();
    graph.insert_edge(id(2), id(3), 5.0).unwrap();

    assert!(!check_connectivity(&graph).is_connected());
}

#[test]
fn test_remove_edge_scenario() {
    let mut graph = Graph::new();
    for label in ["A", "B", "C"] {
        graph.insert_vertex(label);
    }
    graph.insert_edge(id(0), id(1), 3.0).unwrap();
    graph.insert_edge(id(1), id(0), 3.0).unwrap();
    graph.insert_edge(id(0), id(2), 4.0).unwrap();

    assert_eq!(graph.remove_edge(id(0), id(1)), 2);
    assert_eq!(graph.edges(), &[Edge::new(id(0), id(2), 4.0)]);
}

#[test]
fn test_mst_of_test_network() {
    let graph = create_test_network();
    let tree = build_mst(&graph).unwrap();
    assert_eq!(tree.len(), graph.vertex_count() - 1);
    assert_eq!(tree.total_weight(), 2.0 + 3.0 + 4.5);
}
