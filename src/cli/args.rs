use super::parse::parse_algorithm;
use clap::Args;
use graphwalk_core::graph::{Algorithm, VertexId};

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Start vertex
    #[arg(allow_negative_numbers = true)]
    pub start: VertexId,

    /// Pause between steps in milliseconds (overrides the graph file)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Stop after the start vertex's component
    #[arg(long)]
    pub no_sweep: bool,

    /// Hide the frontier line printed after each step
    #[arg(long)]
    pub no_frontier: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TraverseCommandArgs {
    /// Traversal algorithm: dfs, bfs
    #[arg(long, short, value_parser = parse_algorithm, default_value = "dfs")]
    pub algorithm: Algorithm,

    #[command(flatten)]
    pub traverse: TraverseArgs,
}
