//! CLI argument parsing for graphwalk
//!
//! Uses clap for argument parsing.
//! Global flags select the graph (--graph, --preset, --edge, --vertex,
//! --directed) and the output (--format, --quiet, --verbose).

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{TraverseArgs, TraverseCommandArgs};
use graphwalk_core::config::Preset;
pub use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::VertexId;
use parse::{parse_edge, parse_output_format, parse_preset};

/// Graphwalk - step-by-step DFS and BFS over adjacency-list graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph description file (TOML)
    #[arg(long, global = true, env = "GRAPHWALK_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Built-in demo graph: console, visual
    #[arg(long, global = true, value_parser = parse_preset)]
    pub preset: Option<Preset>,

    /// Treat edges as directed arcs
    #[arg(long, global = true)]
    pub directed: bool,

    /// Add an edge written as U,V (can be specified multiple times)
    #[arg(
        long = "edge",
        global = true,
        value_parser = parse_edge,
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub edges: Vec<[VertexId; 2]>,

    /// Add a vertex with no edges (can be specified multiple times)
    #[arg(
        long = "vertex",
        global = true,
        action = clap::ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub vertices: Vec<VertexId>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, graphwalk_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency list and the edge list
    Show,

    /// Depth-first traversal from a start vertex
    Dfs(TraverseArgs),

    /// Breadth-first traversal from a start vertex
    Bfs(TraverseArgs),

    /// Traverse with the algorithm given as a flag
    Traverse(TraverseCommandArgs),
}
