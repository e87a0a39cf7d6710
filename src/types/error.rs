//! Error types for the multigraph library.

use std::fmt;

use thiserror::Error;

use super::Key;

/// Which end of an edge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The node the edge leaves.
    Source,
    /// The node the edge enters.
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// All errors that can occur in the multigraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found by ID.
    #[error("Node {0} not found")]
    NodeNotFound(Key),

    /// Edge not found by ID.
    #[error("Edge {0} not found")]
    EdgeNotFound(Key),

    /// Node ID already in use.
    #[error("Node {0} already exists")]
    DuplicateNode(Key),

    /// Edge ID already in use.
    #[error("Edge {0} already exists")]
    DuplicateEdge(Key),

    /// Edge endpoint does not reference an existing node.
    #[error("Edge {endpoint} node {node} is not in the graph")]
    InvalidEndpoint { endpoint: Endpoint, node: Key },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph document could not be parsed or rendered.
    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// True for lookups of a node or edge id that is not present.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound(_))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
