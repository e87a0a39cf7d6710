//! All data types for the multigraph library.

pub mod edge;
pub mod error;
pub mod key;
pub mod node;

pub use edge::EdgeRecord;
pub use error::{Endpoint, GraphError, GraphResult};
pub use key::{AutoId, Key, AUTO_ID_PREFIX};
pub use node::NodeRecord;

/// Value type used when a graph is declared without type parameters.
pub type Value = serde_json::Value;
