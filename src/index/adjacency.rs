//! Adjacency index: maps each node to the ids of its incoming and outgoing edges.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::Key;

static NO_EDGES: BTreeSet<Key> = BTreeSet::new();

/// Per-node incoming and outgoing edge id sets.
///
/// Every node present in the graph has an entry in both maps, even when it
/// has no edges. A self-loop is recorded once in each set of its node.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    incoming: BTreeMap<Key, BTreeSet<Key>>,
    outgoing: BTreeMap<Key, BTreeSet<Key>>,
}

impl Adjacency {
    /// Create a new, empty adjacency index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no edges.
    pub fn add_node(&mut self, node: Key) {
        self.incoming.entry(node.clone()).or_default();
        self.outgoing.entry(node).or_default();
    }

    /// Drop a node's entries, returning its (incoming, outgoing) edge ids.
    pub fn remove_node(&mut self, node: &Key) -> (BTreeSet<Key>, BTreeSet<Key>) {
        let incoming = self.incoming.remove(node).unwrap_or_default();
        let outgoing = self.outgoing.remove(node).unwrap_or_default();
        (incoming, outgoing)
    }

    /// Record an edge from `source` to `target`.
    pub fn link(&mut self, edge: &Key, source: &Key, target: &Key) {
        if let Some(out) = self.outgoing.get_mut(source) {
            out.insert(edge.clone());
        }
        if let Some(inc) = self.incoming.get_mut(target) {
            inc.insert(edge.clone());
        }
    }

    /// Forget an edge from `source` to `target`.
    pub fn unlink(&mut self, edge: &Key, source: &Key, target: &Key) {
        if let Some(out) = self.outgoing.get_mut(source) {
            out.remove(edge);
        }
        if let Some(inc) = self.incoming.get_mut(target) {
            inc.remove(edge);
        }
    }

    /// Ids of edges entering `node`.
    pub fn in_edges(&self, node: &Key) -> &BTreeSet<Key> {
        self.incoming.get(node).unwrap_or(&NO_EDGES)
    }

    /// Ids of edges leaving `node`.
    pub fn out_edges(&self, node: &Key) -> &BTreeSet<Key> {
        self.outgoing.get(node).unwrap_or(&NO_EDGES)
    }

    /// Rebuild the entire index from a node list and `(edge, source, target)` triples.
    pub fn rebuild<'a, I, J>(&mut self, nodes: I, edges: J)
    where
        I: IntoIterator<Item = &'a Key>,
        J: IntoIterator<Item = (&'a Key, &'a Key, &'a Key)>,
    {
        self.clear();
        for node in nodes {
            self.add_node(node.clone());
        }
        for (edge, source, target) in edges {
            self.link(edge, source, target);
        }
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.incoming.clear();
        self.outgoing.clear();
    }
}
