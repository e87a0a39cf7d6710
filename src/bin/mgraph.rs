//! CLI entry point for the `mgraph` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use multigraph::cli::commands;
use multigraph::cli::{OutputFormat, Relation};
use multigraph::{GraphError, Key};

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "Inspect directed multigraphs stored as JSON documents"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node, edge, source and sink counts
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Print a human-readable rendering of the graph
    Show {
        /// Path to the graph document
        file: PathBuf,
    },
    /// List node ids
    Nodes {
        /// Path to the graph document
        file: PathBuf,
    },
    /// List edge ids, optionally those incident on U or running from U to V
    Edges {
        /// Path to the graph document
        file: PathBuf,
        /// Node the edges touch (or leave, when V is given)
        u: Option<Key>,
        /// Node the edges enter
        #[arg(requires = "u")]
        v: Option<Key>,
    },
    /// List the distinct targets of edges leaving a node
    Successors {
        /// Path to the graph document
        file: PathBuf,
        /// Node id
        node: Key,
    },
    /// List the distinct sources of edges entering a node
    Predecessors {
        /// Path to the graph document
        file: PathBuf,
        /// Node id
        node: Key,
    },
    /// List nodes adjacent to a node in either direction
    Neighbors {
        /// Path to the graph document
        file: PathBuf,
        /// Node id
        node: Key,
    },
    /// List nodes with no incoming edges
    Sources {
        /// Path to the graph document
        file: PathBuf,
    },
    /// List nodes with no outgoing edges
    Sinks {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Print the document of the subgraph induced by the given node ids
    Subgraph {
        /// Path to the graph document
        file: PathBuf,
        /// Node ids to keep
        #[arg(required = true)]
        ids: Vec<Key>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Compare two graph documents structurally
    Equals {
        /// Path to the first graph document
        file: PathBuf,
        /// Path to the second graph document
        other: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format.is_json();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut out = io::stdout().lock();
    let mut equal = true;

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json, &mut out),
        Commands::Show { file } => commands::cmd_show(&file, &mut out),
        Commands::Nodes { file } => commands::cmd_nodes(&file, json, &mut out),
        Commands::Edges { file, u, v } => commands::cmd_edges(&file, u, v, json, &mut out),
        Commands::Successors { file, node } => {
            commands::cmd_adjacent(&file, node, Relation::Successors, json, &mut out)
        }
        Commands::Predecessors { file, node } => {
            commands::cmd_adjacent(&file, node, Relation::Predecessors, json, &mut out)
        }
        Commands::Neighbors { file, node } => {
            commands::cmd_adjacent(&file, node, Relation::Neighbors, json, &mut out)
        }
        Commands::Sources { file } => commands::cmd_sources(&file, json, &mut out),
        Commands::Sinks { file } => commands::cmd_sinks(&file, json, &mut out),
        Commands::Subgraph { file, ids, pretty } => {
            commands::cmd_subgraph(&file, ids, pretty, &mut out)
        }
        Commands::Equals { file, other } => {
            commands::cmd_equals(&file, &other, json, &mut out).map(|eq| equal = eq)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::NodeNotFound(_) | GraphError::EdgeNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
    if !equal {
        process::exit(1);
    }
}
