//! Incidence and neighbourhood queries over a [`Graph`].

use std::collections::BTreeSet;

use crate::types::{GraphError, GraphResult, Key};

use super::Graph;

impl<N, E> Graph<N, E> {
    fn require_node(&self, id: impl Into<Key>) -> GraphResult<Key> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            Ok(id)
        } else {
            Err(GraphError::NodeNotFound(id))
        }
    }

    /// Ids of edges leaving `u`.
    pub fn out_edges(&self, u: impl Into<Key>) -> GraphResult<Vec<Key>> {
        let u = self.require_node(u)?;
        Ok(self.adjacency.out_edges(&u).iter().cloned().collect())
    }

    /// Ids of edges entering `u`.
    pub fn in_edges(&self, u: impl Into<Key>) -> GraphResult<Vec<Key>> {
        let u = self.require_node(u)?;
        Ok(self.adjacency.in_edges(&u).iter().cloned().collect())
    }

    /// Ids of edges incident on `u` in either direction. Self-loops appear once.
    pub fn node_edges(&self, u: impl Into<Key>) -> GraphResult<Vec<Key>> {
        let u = self.require_node(u)?;
        Ok(self
            .adjacency
            .in_edges(&u)
            .union(self.adjacency.out_edges(&u))
            .cloned()
            .collect())
    }

    /// Ids of edges from `u` to `v`. Empty when either node is missing.
    pub fn edges_between(&self, u: impl Into<Key>, v: impl Into<Key>) -> Vec<Key> {
        let u = u.into();
        let v = v.into();
        self.adjacency
            .out_edges(&u)
            .iter()
            .filter(|e| self.edges.get(*e).is_some_and(|edge| *edge.target() == v))
            .cloned()
            .collect()
    }

    /// Distinct nodes reached by an edge leaving `u`.
    pub fn successors(&self, u: impl Into<Key>) -> GraphResult<Vec<Key>> {
        let u = self.require_node(u)?;
        Ok(self.out_neighbours(&u).into_iter().cloned().collect())
    }

    /// Distinct nodes with an edge entering `u`.
    pub fn predecessors(&self, u: impl Into<Key>) -> GraphResult<Vec<Key>> {
        let u = self.require_node(u)?;
        Ok(self.in_neighbours(&u).into_iter().cloned().collect())
    }

    /// Distinct nodes adjacent to `u` in either direction.
    pub fn neighbors(&self, u: impl Into<Key>) -> GraphResult<Vec<Key>> {
        let u = self.require_node(u)?;
        let mut all = self.out_neighbours(&u);
        all.extend(self.in_neighbours(&u));
        Ok(all.into_iter().cloned().collect())
    }

    /// Number of edges entering `u`.
    pub fn in_degree(&self, u: impl Into<Key>) -> GraphResult<usize> {
        let u = self.require_node(u)?;
        Ok(self.adjacency.in_edges(&u).len())
    }

    /// Number of edges leaving `u`.
    pub fn out_degree(&self, u: impl Into<Key>) -> GraphResult<usize> {
        let u = self.require_node(u)?;
        Ok(self.adjacency.out_edges(&u).len())
    }

    /// Nodes with no incoming edges. A self-loop counts as an incoming edge.
    pub fn sources(&self) -> Vec<Key> {
        self.nodes
            .keys()
            .filter(|n| self.adjacency.in_edges(n).is_empty())
            .cloned()
            .collect()
    }

    /// Nodes with no outgoing edges.
    pub fn sinks(&self) -> Vec<Key> {
        self.nodes
            .keys()
            .filter(|n| self.adjacency.out_edges(n).is_empty())
            .cloned()
            .collect()
    }

    fn out_neighbours(&self, u: &Key) -> BTreeSet<&Key> {
        self.adjacency
            .out_edges(u)
            .iter()
            .filter_map(|e| self.edges.get(e))
            .map(|edge| edge.target())
            .collect()
    }

    fn in_neighbours(&self, u: &Key) -> BTreeSet<&Key> {
        self.adjacency
            .in_edges(u)
            .iter()
            .filter_map(|e| self.edges.get(e))
            .map(|edge| edge.source())
            .collect()
    }
}
