//! Index structures kept in step with the graph's node and edge stores.

pub mod adjacency;

pub use adjacency::Adjacency;
