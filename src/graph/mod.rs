//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod display;
pub mod multigraph;
pub mod query;
pub mod subgraph;

pub use builder::GraphBuilder;
pub use multigraph::Graph;
