//! Subgraph extraction and structural equality.

use std::sync::Arc;

use multigraph::{Graph, GraphBuilder, Key};
use serde_json::json;

// ==================== Helper ====================

/// Nodes 1,2,3 with a: 1->2 and b: 2->3.
fn chain() -> Graph {
    let mut g: Graph = Graph::new();
    for u in [1, 2, 3] {
        g.add_node_with(u, json!(format!("V{}", u))).unwrap();
    }
    g.add_edge_with("a", 1, 2, json!("VA")).unwrap();
    g.add_edge("b", 2, 3).unwrap();
    g
}

fn two_nodes() -> Graph {
    let mut g: Graph = Graph::new();
    g.add_node("A").unwrap();
    g.add_node("B").unwrap();
    g
}

// ==================== Subgraph ====================

#[test]
fn test_subgraph_contains_subset_of_nodes() {
    let g = chain();
    let sub = g.subgraph([1, 2]);
    assert_eq!(sub.nodes(), [1, 2]);
    assert_eq!(sub.edges(), ["a"]);
}

#[test]
fn test_subgraph_keeps_node_values() {
    let g = chain();
    let sub = g.subgraph([1, 2]);
    assert_eq!(sub.node(1).unwrap(), Some(&json!("V1")));
    assert_eq!(sub.node(2).unwrap(), Some(&json!("V2")));
}

#[test]
fn test_subgraph_keeps_edge_values() {
    let g = chain();
    let sub = g.subgraph([1, 2]);
    assert_eq!(sub.edge("a").unwrap(), Some(&json!("VA")));
    assert_eq!(sub.source("a").unwrap(), &Key::Int(1));
    assert_eq!(sub.target("a").unwrap(), &Key::Int(2));
}

#[test]
fn test_subgraph_shares_value_allocations() {
    let g = chain();
    let sub = g.subgraph([1, 2]);
    let parent = g.node_shared(1).unwrap().unwrap();
    let child = sub.node_shared(1).unwrap().unwrap();
    assert!(Arc::ptr_eq(&parent, &child));
    assert!(Arc::ptr_eq(
        &g.edge_shared("a").unwrap().unwrap(),
        &sub.edge_shared("a").unwrap().unwrap()
    ));
}

#[test]
fn test_subgraph_ignores_missing_ids() {
    let g = chain();
    let sub = g.subgraph([Key::Int(1), Key::Int(42), Key::from("zzz")]);
    assert_eq!(sub.nodes(), [1]);
    assert!(sub.edges().is_empty());
}

#[test]
fn test_subgraph_keeps_self_loops_and_parallel_edges() {
    let g: Graph = GraphBuilder::new()
        .nodes([1, 2, 3])
        .edge("A", 1, 2)
        .edge("B", 1, 2)
        .edge("C", 1, 1)
        .edge("D", 2, 3)
        .build()
        .unwrap();
    let sub = g.subgraph([1, 2]);
    assert_eq!(sub.edges(), ["A", "B", "C"]);
    assert_eq!(sub.successors(1).unwrap(), [1, 2]);
    assert_eq!(sub.sinks(), [2]);
}

#[test]
fn test_subgraph_is_structurally_independent() {
    let mut g = chain();
    let mut sub = g.subgraph([1, 2]);

    sub.del_edge("a").unwrap();
    sub.add_node(9).unwrap();
    assert!(g.has_edge("a"));
    assert!(!g.has_node(9));
    assert_eq!(g.successors(1).unwrap(), [2]);

    g.del_node(2).unwrap();
    assert!(sub.has_node(2));
}

#[test]
fn test_subgraph_generated_ids_do_not_collide() {
    let mut g: Graph = Graph::new();
    g.add_node(1).unwrap();
    g.add_node(2).unwrap();
    let copied = g.connect(1, 2).unwrap();

    let mut sub = g.subgraph([1, 2]);
    let fresh = sub.connect(1, 2).unwrap();
    assert_ne!(copied, fresh);
    assert_eq!(sub.size(), 2);
}

#[test]
fn test_subgraph_of_nothing_is_empty() {
    let g = chain();
    let sub = g.subgraph(Vec::<Key>::new());
    assert!(sub.is_empty());
    assert_eq!(sub.size(), 0);
}

#[test]
fn test_clone_equals_original() {
    let g = chain();
    let copy = g.clone();
    assert!(g.equals(&copy));
    assert_eq!(g, copy);
}

// ==================== Equality ====================

#[test]
fn test_empty_graphs_are_equal() {
    assert!(Graph::<i32>::new().equals(&Graph::new()));
}

#[test]
fn test_equal_with_same_nodes() {
    let mut g1: Graph = Graph::new();
    g1.add_node_with("A", json!(123)).unwrap();
    g1.add_node_with("B", json!(456)).unwrap();
    let g2 = g1.subgraph(["A", "B"]);
    assert!(g1.equals(&g2));
}

#[test]
fn test_not_equal_with_different_nodes() {
    let mut g1: Graph = Graph::new();
    g1.add_node_with("A", json!(123)).unwrap();
    let mut g2: Graph = Graph::new();
    g2.add_node_with("B", json!(456)).unwrap();
    assert!(!g1.equals(&g2));
}

#[test]
fn test_not_equal_with_strict_superset_of_nodes() {
    let mut g1: Graph = Graph::new();
    g1.add_node_with("A", json!(123)).unwrap();
    let mut g2 = g1.subgraph(["A"]);
    g2.add_node_with("B", json!("456")).unwrap();
    assert!(!g1.equals(&g2));
    assert!(!g2.equals(&g1));
}

#[test]
fn test_not_equal_with_different_node_values() {
    let mut g1: Graph = Graph::new();
    g1.add_node_with("A", json!(123)).unwrap();
    let mut g2: Graph = Graph::new();
    g2.add_node_with("A", json!(456)).unwrap();
    assert!(!g1.equals(&g2));
}

#[test]
fn test_unset_value_differs_from_null() {
    let mut g1: Graph = Graph::new();
    g1.add_node("A").unwrap();
    let mut g2: Graph = Graph::new();
    g2.add_node_with("A", json!(null)).unwrap();
    assert!(!g1.equals(&g2));
}

#[test]
fn test_values_compare_structurally() {
    let mut g1: Graph = Graph::new();
    g1.add_node_with("A", json!({"k": [1, 2]})).unwrap();
    let mut g2: Graph = Graph::new();
    g2.add_node_with("A", json!({"k": [1, 2]})).unwrap();
    assert!(g1.equals(&g2));
}

#[test]
fn test_equal_with_same_edges() {
    let mut g1 = two_nodes();
    g1.add_edge_with("AB", "A", "B", json!(123)).unwrap();
    let g2 = g1.subgraph(["A", "B"]);
    assert!(g1.equals(&g2));
}

#[test]
fn test_not_equal_with_different_edges() {
    let mut g1 = two_nodes();
    g1.add_edge_with("AB", "A", "B", json!(123)).unwrap();
    let mut g2 = two_nodes();
    g2.add_edge_with("BA", "B", "A", json!(123)).unwrap();
    assert!(!g1.equals(&g2));
}

#[test]
fn test_not_equal_with_strict_superset_of_edges() {
    let mut g1 = two_nodes();
    g1.add_edge_with("AB", "A", "B", json!(123)).unwrap();
    let mut g2 = g1.subgraph(["A", "B"]);
    g2.add_edge_with("BA", "B", "A", json!(456)).unwrap();
    assert!(!g1.equals(&g2));
}

#[test]
fn test_not_equal_with_different_edge_values() {
    let mut g1 = two_nodes();
    g1.add_edge_with("AB", "A", "B", json!(123)).unwrap();
    let mut g2 = two_nodes();
    g2.add_edge_with("AB", "A", "B", json!(456)).unwrap();
    assert!(!g1.equals(&g2));
}

#[test]
fn test_not_equal_with_reversed_edge() {
    let mut g1 = two_nodes();
    g1.add_edge_with("AB", "A", "B", json!(123)).unwrap();
    let mut g2 = two_nodes();
    g2.add_edge_with("AB", "B", "A", json!(123)).unwrap();
    assert!(!g1.equals(&g2));
    assert_ne!(g1, g2);
}
