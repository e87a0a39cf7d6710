//! CLI command implementations.
//!
//! Every command reads a graph document, runs one query and writes the
//! answer to `out`, either as plain text or as JSON.

use std::io::Write;
use std::path::Path;

use crate::format::GraphDocument;
use crate::graph::Graph;
use crate::types::{GraphResult, Key};

/// How command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One item per line.
    #[default]
    Text,
    /// A single JSON value.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Which neighbourhood of a node to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Targets of outgoing edges.
    Successors,
    /// Sources of incoming edges.
    Predecessors,
    /// Both of the above.
    Neighbors,
}

/// Load a graph document from disk.
pub fn load_graph(path: &Path) -> GraphResult<Graph> {
    let document = GraphDocument::read_from_file(path)?;
    Graph::from_document(document)
}

fn write_keys(out: &mut impl Write, keys: &[Key], json: bool) -> GraphResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(keys)?)?;
    } else {
        for key in keys {
            writeln!(out, "{}", key)?;
        }
    }
    Ok(())
}

/// Display summary counts for a graph document.
pub fn cmd_info(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let sources = graph.sources().len();
    let sinks = graph.sinks().len();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "order": graph.order(),
            "size": graph.size(),
            "sources": sources,
            "sinks": sinks,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Nodes: {}", graph.order())?;
        writeln!(out, "Edges: {}", graph.size())?;
        writeln!(out, "Sources: {}", sources)?;
        writeln!(out, "Sinks: {}", sinks)?;
    }
    Ok(())
}

/// Print the human-readable rendering of a graph.
pub fn cmd_show(path: &Path, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write!(out, "{}", graph)?;
    Ok(())
}

/// List every node id.
pub fn cmd_nodes(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_keys(out, &graph.nodes(), json)
}

/// List edge ids: all of them, those incident on `u`, or those from `u` to `v`.
pub fn cmd_edges(
    path: &Path,
    u: Option<Key>,
    v: Option<Key>,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let edges = match (u, v) {
        (Some(u), Some(v)) => graph.edges_between(u, v),
        (Some(u), None) => graph.node_edges(u)?,
        _ => graph.edges(),
    };
    write_keys(out, &edges, json)
}

/// List the successors, predecessors or neighbors of `u`.
pub fn cmd_adjacent(
    path: &Path,
    u: Key,
    relation: Relation,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let nodes = match relation {
        Relation::Successors => graph.successors(u)?,
        Relation::Predecessors => graph.predecessors(u)?,
        Relation::Neighbors => graph.neighbors(u)?,
    };
    write_keys(out, &nodes, json)
}

/// List nodes without incoming edges.
pub fn cmd_sources(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_keys(out, &graph.sources(), json)
}

/// List nodes without outgoing edges.
pub fn cmd_sinks(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_keys(out, &graph.sinks(), json)
}

/// Print the document of the subgraph induced by `ids`.
pub fn cmd_subgraph(path: &Path, ids: Vec<Key>, pretty: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let sub = graph.subgraph(ids);
    writeln!(out, "{}", sub.to_document().to_json_string(pretty)?)?;
    Ok(())
}

/// Compare two graph documents structurally. Returns the comparison result.
pub fn cmd_equals(path: &Path, other: &Path, json: bool, out: &mut impl Write) -> GraphResult<bool> {
    let left = load_graph(path)?;
    let right = load_graph(other)?;
    let equal = left.equals(&right);

    if json {
        writeln!(out, "{}", serde_json::json!({ "equal": equal }))?;
    } else {
        writeln!(out, "{}", equal)?;
    }
    Ok(equal)
}
