//! JSON interchange for graphs.

pub mod document;

pub use document::{EdgeDocument, GraphDocument, NodeDocument};
