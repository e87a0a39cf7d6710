//! Incidence queries: edge listings, neighbourhoods, sources and sinks.

use multigraph::{Graph, GraphBuilder, GraphError};

// ==================== Helper ====================

/// Two nodes with parallel edges, self-loops and a back edge:
/// A,B: 1->2  C: 1->1  D: 2->1  E: 2->2
fn looped_pair() -> Graph {
    GraphBuilder::new()
        .nodes([1, 2])
        .edge("A", 1, 2)
        .edge("B", 1, 2)
        .edge("C", 1, 1)
        .edge("D", 2, 1)
        .edge("E", 2, 2)
        .build()
        .unwrap()
}

fn abc() -> Graph {
    GraphBuilder::new().nodes(["a", "b", "c"]).build().unwrap()
}

// ==================== Edge Listings ====================

#[test]
fn test_edges_returns_all_edges() {
    let g: Graph = GraphBuilder::new()
        .nodes([1, 2])
        .edge("A", 1, 2)
        .edge("B", 1, 2)
        .edge("C", 2, 1)
        .build()
        .unwrap();

    assert_eq!(g.edges(), ["A", "B", "C"]);
}

#[test]
fn test_node_edges_returns_incident_edges() {
    let g = looped_pair();
    assert_eq!(g.node_edges(1).unwrap(), ["A", "B", "C", "D"]);
    assert_eq!(g.node_edges(2).unwrap(), ["A", "B", "D", "E"]);
}

#[test]
fn test_edges_between() {
    let g: Graph = GraphBuilder::new()
        .nodes([1, 2, 3])
        .edge("A", 1, 2)
        .edge("B", 1, 2)
        .edge("C", 2, 1)
        .edge("D", 2, 3)
        .build()
        .unwrap();

    assert_eq!(g.edges_between(1, 2), ["A", "B"]);
    assert_eq!(g.edges_between(2, 1), ["C"]);
    assert_eq!(g.edges_between(2, 3), ["D"]);
    assert!(g.edges_between(3, 1).is_empty());
}

#[test]
fn test_edges_between_missing_nodes_is_empty() {
    let g = looped_pair();
    assert!(g.edges_between(1, 99).is_empty());
    assert!(g.edges_between(99, 1).is_empty());
    assert!(g.edges_between("x", "y").is_empty());
}

#[test]
fn test_edges_between_self_loop() {
    let g = looped_pair();
    assert_eq!(g.edges_between(1, 1), ["C"]);
    assert_eq!(g.edges_between(2, 2), ["E"]);
}

#[test]
fn test_out_edges() {
    let g = looped_pair();
    assert_eq!(g.out_edges(1).unwrap(), ["A", "B", "C"]);
    assert_eq!(g.out_edges(2).unwrap(), ["D", "E"]);
}

#[test]
fn test_in_edges() {
    let g = looped_pair();
    assert_eq!(g.in_edges(1).unwrap(), ["C", "D"]);
    assert_eq!(g.in_edges(2).unwrap(), ["A", "B", "E"]);
}

#[test]
fn test_node_keyed_queries_on_missing_node() {
    let g = looped_pair();
    assert!(matches!(g.out_edges(9), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.in_edges(9), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.node_edges(9), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.successors(9), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.predecessors(9), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.neighbors(9), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.in_degree(9), Err(GraphError::NodeNotFound(_))));
}

// ==================== Neighbourhoods ====================

#[test]
fn test_successors_deduplicate_parallel_edges() {
    let g = looped_pair();
    assert_eq!(g.successors(1).unwrap(), [1, 2]);
    assert_eq!(g.successors(2).unwrap(), [1, 2]);
}

#[test]
fn test_predecessors_deduplicate_parallel_edges() {
    let g: Graph = GraphBuilder::new()
        .nodes([1, 2, 3])
        .edge("A", 1, 3)
        .edge("B", 1, 3)
        .edge("C", 2, 3)
        .build()
        .unwrap();
    assert_eq!(g.predecessors(3).unwrap(), [1, 2]);
    assert!(g.predecessors(1).unwrap().is_empty());
}

#[test]
fn test_neighbors_count_each_node_once() {
    let g: Graph = GraphBuilder::new()
        .nodes([1, 2, 3])
        .edge("A", 1, 2)
        .edge("B", 2, 1)
        .edge("C", 3, 1)
        .edge("D", 1, 1)
        .build()
        .unwrap();
    assert_eq!(g.neighbors(1).unwrap(), [1, 2, 3]);
    assert_eq!(g.neighbors(2).unwrap(), [1]);
    assert_eq!(g.neighbors(3).unwrap(), [1]);
}

#[test]
fn test_degrees() {
    let g = looped_pair();
    assert_eq!(g.out_degree(1).unwrap(), 3);
    assert_eq!(g.in_degree(1).unwrap(), 2);
    assert_eq!(g.out_degree(2).unwrap(), 2);
    assert_eq!(g.in_degree(2).unwrap(), 3);
}

// ==================== Sources and Sinks ====================

#[test]
fn test_sources_without_edges() {
    let g = abc();
    assert_eq!(g.sources(), ["a", "b", "c"]);
}

#[test]
fn test_sources_exclude_nodes_with_in_edges() {
    let mut g = abc();
    g.connect("a", "b").unwrap();
    assert_eq!(g.sources(), ["a", "c"]);
}

#[test]
fn test_sinks_without_edges() {
    let g = abc();
    assert_eq!(g.sinks(), ["a", "b", "c"]);
}

#[test]
fn test_sinks_exclude_nodes_with_out_edges() {
    let mut g = abc();
    g.connect("a", "b").unwrap();
    assert_eq!(g.sinks(), ["b", "c"]);
}

#[test]
fn test_self_loop_is_neither_source_nor_sink() {
    let mut g = abc();
    g.connect("a", "a").unwrap();
    assert_eq!(g.sources(), ["b", "c"]);
    assert_eq!(g.sinks(), ["b", "c"]);
}

#[test]
fn test_source_restored_after_edge_removal() {
    let mut g = abc();
    let id = g.connect("a", "b").unwrap();
    g.del_edge(id).unwrap();
    assert_eq!(g.sources(), ["a", "b", "c"]);
    assert_eq!(g.sinks(), ["a", "b", "c"]);
}

// ==================== Builder ====================

#[test]
fn test_builder_stops_at_first_error() {
    let result: Result<Graph, _> = GraphBuilder::new()
        .node(1)
        .edge("a", 1, 2)
        .node(2)
        .build();
    assert!(matches!(result, Err(GraphError::InvalidEndpoint { .. })));
}

#[test]
fn test_builder_values() {
    let g: Graph<&str, u32> = GraphBuilder::new()
        .node_with("x", "ex")
        .node("y")
        .edge_with("xy", "x", "y", 7)
        .connect_with("y", "x", 9)
        .connect("y", "y")
        .build()
        .unwrap();

    assert_eq!(g.node("x").unwrap(), Some(&"ex"));
    assert_eq!(g.node("y").unwrap(), None);
    assert_eq!(g.edge("xy").unwrap(), Some(&7));
    assert_eq!(g.size(), 3);
    assert_eq!(g.successors("y").unwrap(), ["x", "y"]);
}
