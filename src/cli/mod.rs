//! Command implementations behind the `mgraph` binary.

pub mod commands;

pub use commands::{OutputFormat, Relation};
