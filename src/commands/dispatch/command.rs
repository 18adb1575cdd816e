//! Command trait and context for dispatching commands

use std::time::{Duration, Instant};

use crate::cli::Cli;
use graphwalk_core::bail_usage;
use graphwalk_core::config::{GraphFile, Preset};
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::graph::{Graph, VertexId};

/// Graph built from the global flags, plus the playback pacing it came with
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub step_delay: Duration,
}

/// Assemble the graph description selected by the CLI flags.
///
/// `--graph` and `--preset` pick the base description. Without either, the
/// console preset is used unless `--edge`/`--vertex` describe the graph
/// on their own. Flag edges and vertices are appended to the base.
pub fn resolve_graph_file(cli: &Cli) -> Result<GraphFile> {
    let mut file = match (&cli.graph, cli.preset) {
        (Some(_), Some(_)) => bail_usage!("--graph and --preset cannot be combined"),
        (Some(path), None) => GraphFile::load(path)?,
        (None, Some(preset)) => GraphFile::from_preset(preset),
        (None, None) if !cli.edges.is_empty() || !cli.vertices.is_empty() => {
            GraphFile::default()
        }
        (None, None) => GraphFile::from_preset(Preset::default()),
    };

    if cli.directed {
        file.directed = true;
    }
    file.edges.extend(cli.edges.iter().copied());
    file.vertices.extend(cli.vertices.iter().copied());
    file.validate()?;
    Ok(file)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_graph(&self) -> Result<LoadedGraph> {
        let file = resolve_graph_file(self.cli)?;
        let graph = file.build();
        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed = graph.is_directed(),
            "load_graph"
        );
        Ok(LoadedGraph {
            graph,
            step_delay: file.step_delay(),
        })
    }
}

/// Fail with a data error unless `vertex` is part of the graph.
pub fn require_vertex(graph: &Graph, vertex: VertexId) -> Result<()> {
    if graph.contains(vertex) {
        Ok(())
    } else {
        Err(GraphwalkError::VertexNotFound { vertex })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step depth-first and breadth-first graph traversal.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}
