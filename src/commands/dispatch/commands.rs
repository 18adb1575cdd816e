//! Command implementations for all graphwalk commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use graphwalk_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::TraverseArgs;
    use crate::commands::dispatch::command::require_vertex;
    use crate::commands::{show, traverse};
    use graphwalk_core::graph::Algorithm;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Show => execute_show(ctx),
            Commands::Dfs(args) => execute_traverse(ctx, Algorithm::Dfs, args),
            Commands::Bfs(args) => execute_traverse(ctx, Algorithm::Bfs, args),
            Commands::Traverse(args) => execute_traverse(ctx, args.algorithm, &args.traverse),
        }
    }

    fn execute_show(ctx: &CommandContext) -> Result<()> {
        let loaded = ctx.load_graph()?;
        show::execute(ctx.cli, &loaded.graph)
    }

    fn execute_traverse(
        ctx: &CommandContext,
        algorithm: Algorithm,
        args: &TraverseArgs,
    ) -> Result<()> {
        let loaded = ctx.load_graph()?;
        require_vertex(&loaded.graph, args.start)?;
        let step_delay = match args.delay_ms {
            Some(ms) => std::time::Duration::from_millis(ms),
            None => loaded.step_delay,
        };
        traverse::execute(
            ctx.cli,
            &loaded.graph,
            traverse::TraverseOptions {
                algorithm,
                start: args.start,
                step_delay,
                sweep_components: !args.no_sweep,
                show_frontier: !args.no_frontier,
            },
        )
    }
}
