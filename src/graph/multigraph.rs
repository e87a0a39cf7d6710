//! Core graph structure: node and edge stores with an adjacency index.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::index::Adjacency;
use crate::types::{
    AutoId, EdgeRecord, Endpoint, GraphError, GraphResult, Key, NodeRecord, Value,
};

/// A directed multigraph with caller-chosen node and edge keys.
///
/// `N` is the node value type and `E` the edge value type. Values are
/// optional and held behind `Arc`: reads hand out shared references, never
/// copies. Parallel edges and self-loops are allowed.
///
/// All id listings are returned in ascending [`Key`] order.
pub struct Graph<N = Value, E = N> {
    /// All nodes, indexed by ID.
    pub(crate) nodes: BTreeMap<Key, NodeRecord<N>>,
    /// All edges, indexed by ID.
    pub(crate) edges: BTreeMap<Key, EdgeRecord<E>>,
    /// Incoming/outgoing edge ids per node.
    pub(crate) adjacency: Adjacency,
    /// Next counter value for generated edge ids.
    pub(crate) next_auto: u64,
}

impl<N, E> Graph<N, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            adjacency: Adjacency::new(),
            next_auto: 0,
        }
    }

    /// Assemble a graph from stores that already satisfy the edge invariants.
    pub(crate) fn from_parts(
        nodes: BTreeMap<Key, NodeRecord<N>>,
        edges: BTreeMap<Key, EdgeRecord<E>>,
        next_auto: u64,
    ) -> Self {
        let mut adjacency = Adjacency::new();
        adjacency.rebuild(
            nodes.keys(),
            edges.iter().map(|(id, e)| (id, e.source(), e.target())),
        );
        Self {
            nodes,
            edges,
            adjacency,
            next_auto,
        }
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with this id exists.
    pub fn has_node(&self, id: impl Into<Key>) -> bool {
        self.nodes.contains_key(&id.into())
    }

    /// Whether an edge with this id exists.
    pub fn has_edge(&self, id: impl Into<Key>) -> bool {
        self.edges.contains_key(&id.into())
    }

    /// All node ids.
    pub fn nodes(&self) -> Vec<Key> {
        self.nodes.keys().cloned().collect()
    }

    /// All edge ids.
    pub fn edges(&self) -> Vec<Key> {
        self.edges.keys().cloned().collect()
    }

    /// Iterate over node ids with their records.
    pub fn node_entries(&self) -> impl Iterator<Item = (&Key, &NodeRecord<N>)> {
        self.nodes.iter()
    }

    /// Iterate over edge ids with their records.
    pub fn edge_entries(&self) -> impl Iterator<Item = (&Key, &EdgeRecord<E>)> {
        self.edges.iter()
    }

    // ==================== Nodes ====================

    /// Add a node with no value.
    pub fn add_node(&mut self, id: impl Into<Key>) -> GraphResult<()> {
        self.insert_node(id, None)
    }

    /// Add a node carrying `value`.
    pub fn add_node_with(&mut self, id: impl Into<Key>, value: N) -> GraphResult<()> {
        self.insert_node(id, Some(Arc::new(value)))
    }

    /// Add a node with an optional shared value.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the id is taken; the
    /// existing node and its edges are left untouched.
    pub fn insert_node(&mut self, id: impl Into<Key>, value: Option<Arc<N>>) -> GraphResult<()> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        log::trace!("add node {}", id);
        self.adjacency.add_node(id.clone());
        self.nodes.insert(id, NodeRecord::new(value));
        Ok(())
    }

    /// Get a node's value. `Ok(None)` means the node exists with no value.
    pub fn node(&self, id: impl Into<Key>) -> GraphResult<Option<&N>> {
        Ok(self.node_record(id)?.value())
    }

    /// Get a node's value with shared identity.
    pub fn node_shared(&self, id: impl Into<Key>) -> GraphResult<Option<Arc<N>>> {
        Ok(self.node_record(id)?.shared_value())
    }

    /// Get a node's stored record.
    pub fn node_record(&self, id: impl Into<Key>) -> GraphResult<&NodeRecord<N>> {
        let id = id.into();
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Remove a node and every edge incident on it, returning the node's value.
    pub fn del_node(&mut self, id: impl Into<Key>) -> GraphResult<Option<Arc<N>>> {
        let id = id.into();
        let removed = self
            .nodes
            .remove(&id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;

        let (incoming, outgoing) = self.adjacency.remove_node(&id);
        let mut dropped = 0usize;
        for edge_id in incoming.iter().chain(outgoing.difference(&incoming)) {
            if let Some(edge) = self.edges.remove(edge_id) {
                self.adjacency.unlink(edge_id, edge.source(), edge.target());
                dropped += 1;
            }
        }
        log::debug!("removed node {} and {} incident edges", id, dropped);

        Ok(removed.into_value())
    }

    // ==================== Edges ====================

    /// Add an edge with a caller-chosen id and no value.
    pub fn add_edge(
        &mut self,
        id: impl Into<Key>,
        source: impl Into<Key>,
        target: impl Into<Key>,
    ) -> GraphResult<Key> {
        self.insert_edge(Some(id.into()), source, target, None)
    }

    /// Add an edge with a caller-chosen id carrying `value`.
    pub fn add_edge_with(
        &mut self,
        id: impl Into<Key>,
        source: impl Into<Key>,
        target: impl Into<Key>,
        value: E,
    ) -> GraphResult<Key> {
        self.insert_edge(Some(id.into()), source, target, Some(Arc::new(value)))
    }

    /// Add an edge with a generated id and no value.
    pub fn connect(&mut self, source: impl Into<Key>, target: impl Into<Key>) -> GraphResult<Key> {
        self.insert_edge(None, source, target, None)
    }

    /// Add an edge with a generated id carrying `value`.
    pub fn connect_with(
        &mut self,
        source: impl Into<Key>,
        target: impl Into<Key>,
        value: E,
    ) -> GraphResult<Key> {
        self.insert_edge(None, source, target, Some(Arc::new(value)))
    }

    /// Add an edge, generating an id when `id` is `None`. Returns the edge id.
    ///
    /// Both endpoints must already exist. Nothing is modified on failure.
    pub fn insert_edge(
        &mut self,
        id: Option<Key>,
        source: impl Into<Key>,
        target: impl Into<Key>,
        value: Option<Arc<E>>,
    ) -> GraphResult<Key> {
        let source = source.into();
        let target = target.into();

        if let Some(id) = &id {
            if self.edges.contains_key(id) {
                return Err(GraphError::DuplicateEdge(id.clone()));
            }
        }
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::InvalidEndpoint {
                endpoint: Endpoint::Source,
                node: source,
            });
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::InvalidEndpoint {
                endpoint: Endpoint::Target,
                node: target,
            });
        }

        let id = match id {
            Some(Key::Auto(auto)) => {
                // Keep generated ids ahead of any auto id seen in this graph.
                self.next_auto = self.next_auto.max(auto.get().saturating_add(1));
                Key::Auto(auto)
            }
            Some(id) => id,
            None => self.next_auto_key(),
        };

        log::trace!("add edge {} ({} -> {})", id, source, target);
        self.adjacency.link(&id, &source, &target);
        self.edges
            .insert(id.clone(), EdgeRecord::new(source, target, value));
        Ok(id)
    }

    /// Get an edge's value. `Ok(None)` means the edge exists with no value.
    pub fn edge(&self, id: impl Into<Key>) -> GraphResult<Option<&E>> {
        Ok(self.edge_record(id)?.value())
    }

    /// Get an edge's value with shared identity.
    pub fn edge_shared(&self, id: impl Into<Key>) -> GraphResult<Option<Arc<E>>> {
        Ok(self.edge_record(id)?.shared_value())
    }

    /// Get an edge's stored record.
    pub fn edge_record(&self, id: impl Into<Key>) -> GraphResult<&EdgeRecord<E>> {
        let id = id.into();
        self.edges.get(&id).ok_or(GraphError::EdgeNotFound(id))
    }

    /// The node an edge leaves.
    pub fn source(&self, id: impl Into<Key>) -> GraphResult<&Key> {
        Ok(self.edge_record(id)?.source())
    }

    /// The node an edge enters.
    pub fn target(&self, id: impl Into<Key>) -> GraphResult<&Key> {
        Ok(self.edge_record(id)?.target())
    }

    /// Remove an edge, returning its value.
    pub fn del_edge(&mut self, id: impl Into<Key>) -> GraphResult<Option<Arc<E>>> {
        let id = id.into();
        let removed = self
            .edges
            .remove(&id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.clone()))?;
        self.adjacency
            .unlink(&id, removed.source(), removed.target());
        log::trace!("removed edge {}", id);
        Ok(removed.into_value())
    }

    /// Counter value the next generated edge id will use.
    pub fn next_auto_id(&self) -> u64 {
        self.next_auto
    }

    fn next_auto_key(&mut self) -> Key {
        let key = Key::Auto(AutoId::new(self.next_auto));
        self.next_auto += 1;
        key
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

// Topology is copied, values stay shared.
impl<N, E> Clone for Graph<N, E> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            adjacency: self.adjacency.clone(),
            next_auto: self.next_auto,
        }
    }
}
