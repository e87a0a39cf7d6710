//! Subgraph extraction and structural equality.

use std::collections::BTreeMap;

use crate::types::{EdgeRecord, Key, NodeRecord};

use super::Graph;

impl<N, E> Graph<N, E> {
    /// Extract the subgraph induced by `ids`.
    ///
    /// Ids not present in this graph are ignored. The result holds every
    /// edge whose endpoints both survive, with ids preserved. Node and edge
    /// values are shared with `self`; the topology is independent.
    pub fn subgraph<I, K>(&self, ids: I) -> Graph<N, E>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut nodes: BTreeMap<Key, NodeRecord<N>> = BTreeMap::new();
        for id in ids {
            let id = id.into();
            if let Some(record) = self.nodes.get(&id) {
                nodes.insert(id, record.clone());
            }
        }

        let mut edges: BTreeMap<Key, EdgeRecord<E>> = BTreeMap::new();
        for node in nodes.keys() {
            for edge_id in self.adjacency.out_edges(node) {
                if let Some(edge) = self.edges.get(edge_id) {
                    if nodes.contains_key(edge.target()) {
                        edges.insert(edge_id.clone(), edge.clone());
                    }
                }
            }
        }

        log::debug!(
            "subgraph: kept {} of {} nodes, {} of {} edges",
            nodes.len(),
            self.order(),
            edges.len(),
            self.size()
        );

        // Inherit the counter so new generated ids cannot collide with copied ones.
        Graph::from_parts(nodes, edges, self.next_auto)
    }
}

impl<N: PartialEq, E: PartialEq> Graph<N, E> {
    /// Structural equality: same node ids with equal values, same edge ids
    /// with equal endpoints and values.
    pub fn equals(&self, other: &Graph<N, E>) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for Graph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<N: Eq, E: Eq> Eq for Graph<N, E> {}
