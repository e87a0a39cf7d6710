//! multigraph: an in-memory directed multigraph.
//!
//! Nodes and edges are identified by caller-chosen [`Key`]s and may carry an
//! optional value. Parallel edges and self-loops are allowed. The graph
//! answers incidence queries (in/out edges, successors, predecessors,
//! sources, sinks), extracts induced subgraphs and compares graphs
//! structurally.

pub mod cli;
pub mod format;
pub mod graph;
pub(crate) mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeDocument, GraphDocument, NodeDocument};
pub use graph::{Graph, GraphBuilder};
pub use types::{
    AutoId, EdgeRecord, Endpoint, GraphError, GraphResult, Key, NodeRecord, Value, AUTO_ID_PREFIX,
};
