//! Fluent API for building Graph instances.

use std::sync::Arc;

use crate::types::{GraphResult, Key};

use super::Graph;

enum Step<N, E> {
    Node(Key, Option<Arc<N>>),
    Edge(Option<Key>, Key, Key, Option<Arc<E>>),
}

/// Fluent builder for constructing a Graph.
///
/// Steps are replayed in order by [`GraphBuilder::build`], which stops at the
/// first failing step.
pub struct GraphBuilder<N = crate::types::Value, E = N> {
    steps: Vec<Step<N, E>>,
}

impl<N, E> GraphBuilder<N, E> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a node with no value.
    pub fn node(mut self, id: impl Into<Key>) -> Self {
        self.steps.push(Step::Node(id.into(), None));
        self
    }

    /// Add a node carrying `value`.
    pub fn node_with(mut self, id: impl Into<Key>, value: N) -> Self {
        self.steps.push(Step::Node(id.into(), Some(Arc::new(value))));
        self
    }

    /// Add several value-less nodes.
    pub fn nodes<I, K>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.steps
            .extend(ids.into_iter().map(|id| Step::Node(id.into(), None)));
        self
    }

    /// Add an edge with a caller-chosen id.
    pub fn edge(mut self, id: impl Into<Key>, source: impl Into<Key>, target: impl Into<Key>) -> Self {
        self.steps
            .push(Step::Edge(Some(id.into()), source.into(), target.into(), None));
        self
    }

    /// Add an edge with a caller-chosen id carrying `value`.
    pub fn edge_with(
        mut self,
        id: impl Into<Key>,
        source: impl Into<Key>,
        target: impl Into<Key>,
        value: E,
    ) -> Self {
        self.steps.push(Step::Edge(
            Some(id.into()),
            source.into(),
            target.into(),
            Some(Arc::new(value)),
        ));
        self
    }

    /// Add an edge with a generated id.
    pub fn connect(mut self, source: impl Into<Key>, target: impl Into<Key>) -> Self {
        self.steps
            .push(Step::Edge(None, source.into(), target.into(), None));
        self
    }

    /// Add an edge with a generated id carrying `value`.
    pub fn connect_with(mut self, source: impl Into<Key>, target: impl Into<Key>, value: E) -> Self {
        self.steps.push(Step::Edge(
            None,
            source.into(),
            target.into(),
            Some(Arc::new(value)),
        ));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<N, E>> {
        let mut graph = Graph::new();
        for step in self.steps {
            match step {
                Step::Node(id, value) => graph.insert_node(id, value)?,
                Step::Edge(id, source, target, value) => {
                    graph.insert_edge(id, source, target, value)?;
                }
            }
        }
        Ok(graph)
    }
}

impl<N, E> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
