//! JSON graph documents: a node list plus an edge list.
//!
//! ```json
//! {
//!   "nodes": [{ "id": 1, "value": "V1" }, { "id": "b" }],
//!   "edges": [{ "id": "a", "source": 1, "target": "b" }, { "source": "b", "target": 1 }]
//! }
//! ```
//!
//! A missing `value` means the slot is unset, while `"value": null` is the
//! value `null`. Edges without an `id` get a generated one on import.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphResult, Key, Value};

/// Serialized form of one node.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct NodeDocument<N> {
    pub id: Key,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub value: Option<N>,
}

/// Serialized form of one edge.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
pub struct EdgeDocument<E> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Key>,
    pub source: Key,
    pub target: Key,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub value: Option<E>,
}

/// A whole graph as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>, E: Deserialize<'de>"))]
pub struct GraphDocument<N = Value, E = N> {
    #[serde(default)]
    pub nodes: Vec<NodeDocument<N>>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument<E>>,
}

// A field that is present always yields `Some`, even for `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<N, E> GraphDocument<N, E> {
    /// An empty document.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N, E> Default for GraphDocument<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: DeserializeOwned, E: DeserializeOwned> GraphDocument<N, E> {
    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a document from any reader.
    pub fn read_from(reader: impl Read) -> GraphResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a document from a JSON file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

impl<N: Serialize, E: Serialize> GraphDocument<N, E> {
    /// Render the document as JSON text.
    pub fn to_json_string(&self, pretty: bool) -> GraphResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the document as JSON to any writer.
    pub fn write_to(&self, writer: impl Write, pretty: bool) -> GraphResult<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        Ok(())
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    /// Snapshot the graph as a document. Values are cloned out of the graph.
    pub fn to_document(&self) -> GraphDocument<N, E> {
        GraphDocument {
            nodes: self
                .node_entries()
                .map(|(id, node)| NodeDocument {
                    id: id.clone(),
                    value: node.value().cloned(),
                })
                .collect(),
            edges: self
                .edge_entries()
                .map(|(id, edge)| EdgeDocument {
                    id: Some(id.clone()),
                    source: edge.source().clone(),
                    target: edge.target().clone(),
                    value: edge.value().cloned(),
                })
                .collect(),
        }
    }
}

impl<N, E> Graph<N, E> {
    /// Build a graph from a document. Fails on the first duplicate id or
    /// dangling endpoint; no partial graph is returned.
    pub fn from_document(document: GraphDocument<N, E>) -> GraphResult<Self> {
        let mut graph = Graph::new();
        let node_count = document.nodes.len();
        let edge_count = document.edges.len();

        for node in document.nodes {
            graph.insert_node(node.id, node.value.map(Arc::new))?;
        }
        for edge in document.edges {
            graph.insert_edge(edge.id, edge.source, edge.target, edge.value.map(Arc::new))?;
        }

        log::debug!(
            "imported document with {} nodes and {} edges",
            node_count,
            edge_count
        );
        Ok(graph)
    }
}
