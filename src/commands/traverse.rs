//! `graphwalk dfs` / `bfs` / `traverse` commands
//!
//! Events are printed as they arrive from the playback driver, so human and
//! records output stream step by step. JSON output is a single document
//! written once the run has finished.

use std::time::{Duration, Instant};

use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::graph::{
    play, Algorithm, CancelToken, Graph, PlaybackOptions, TraversalEvent, TraversalObserver,
    TraversalOptions, TraversalStats, VertexId, Visit,
};
use graphwalk_core::records::{format_predecessor, join_vertices, join_vertices_csv};

/// Options for a traversal command
#[derive(Debug, Clone)]
pub struct TraverseOptions {
    pub algorithm: Algorithm,
    pub start: VertexId,
    pub step_delay: Duration,
    pub sweep_components: bool,
    pub show_frontier: bool,
}

/// Execute a traversal command
pub fn execute(cli: &Cli, graph: &Graph, opts: TraverseOptions) -> Result<()> {
    let start = Instant::now();

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    let _ = ctrlc::set_handler(move || {
        handler_token.cancel();
    });

    let json = cli.format == OutputFormat::Json;
    // JSON is written in one piece at the end, unpaced
    let step_delay = if json { Duration::ZERO } else { opts.step_delay };
    let human_quiet = cli.format == OutputFormat::Human && cli.quiet;
    let playback = PlaybackOptions {
        step_delay,
        traversal: TraversalOptions {
            sweep_components: opts.sweep_components,
            record_frontier: opts.show_frontier && !human_quiet,
        },
        cancel: Some(cancel),
        // human and records output stream events; only JSON needs the log
        keep_events: json,
    };

    let mut printer = StepPrinter::new(cli, &opts);
    printer.header(graph);
    let summary = play(graph, opts.algorithm, opts.start, &playback, &mut printer);

    graphwalk_core::trace_time!(start, "traverse", steps = summary.stats.steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if summary.cancelled {
        return Err(GraphwalkError::Interrupted {
            steps: summary.stats.steps,
        });
    }
    Ok(())
}

/// Closing line for human output. Interrupted runs get none; the
/// interruption is reported once, as the command's error.
fn completion_line(
    algorithm: Algorithm,
    stats: &TraversalStats,
    cancelled: bool,
) -> Option<String> {
    if cancelled {
        return None;
    }
    Some(format!(
        "{} complete: {} vertices visited in {} component{}",
        algorithm.as_str().to_uppercase(),
        stats.steps,
        stats.components,
        if stats.components == 1 { "" } else { "s" }
    ))
}

/// Observer that renders events in the selected output format
struct StepPrinter<'a> {
    cli: &'a Cli,
    algorithm: Algorithm,
    start: VertexId,
    show_frontier: bool,
}

impl<'a> StepPrinter<'a> {
    fn new(cli: &'a Cli, opts: &TraverseOptions) -> Self {
        Self {
            cli,
            algorithm: opts.algorithm,
            start: opts.start,
            show_frontier: opts.show_frontier,
        }
    }

    fn label(&self) -> String {
        self.algorithm.as_str().to_uppercase()
    }

    fn header(&self, graph: &Graph) {
        match self.cli.format {
            OutputFormat::Human => {
                if !self.cli.quiet {
                    println!("{} from vertex {}", self.label(), self.start);
                    println!();
                }
            }
            OutputFormat::Records => {
                println!(
                    "H graphwalk=1 records=1 mode=traverse algorithm={} start={} directed={} vertices={}",
                    self.algorithm,
                    self.start,
                    graph.is_directed(),
                    graph.vertex_count()
                );
            }
            OutputFormat::Json => {}
        }
    }

    fn visit_human(&self, visit: &Visit) {
        match visit.predecessor {
            Some(from) => println!(
                "Step {}: visited vertex {} (from {})",
                visit.step, visit.vertex, from
            ),
            None => println!("Step {}: visited vertex {}", visit.step, visit.vertex),
        }
        if self.show_frontier && !self.cli.quiet {
            println!(
                "  {}: {}",
                self.algorithm.frontier_name(),
                join_vertices(&visit.frontier)
            );
        }
    }

    fn visit_records(&self, visit: &Visit) {
        println!(
            "V {} {} {} {} {} {}",
            visit.step,
            visit.vertex,
            format_predecessor(visit.predecessor),
            visit.depth,
            visit.component,
            join_vertices_csv(&visit.frontier)
        );
    }
}

impl TraversalObserver for StepPrinter<'_> {
    fn on_event(&mut self, event: &TraversalEvent) {
        match (self.cli.format, event) {
            (OutputFormat::Json, _) => {}
            (OutputFormat::Human, TraversalEvent::ComponentStarted { root, .. }) => {
                println!("New component: starting at vertex {}", root);
            }
            (OutputFormat::Human, TraversalEvent::Visited(visit)) => self.visit_human(visit),
            (OutputFormat::Records, TraversalEvent::ComponentStarted { component, root }) => {
                println!("C {} {}", component, root);
            }
            (OutputFormat::Records, TraversalEvent::Visited(visit)) => self.visit_records(visit),
        }
    }

    fn on_finish(&mut self, stats: &TraversalStats, cancelled: bool) {
        tracing::debug!(
            algorithm = %self.algorithm,
            start = self.start,
            cancelled,
            "traversal_finished"
        );
        match self.cli.format {
            OutputFormat::Human => {
                if self.cli.quiet {
                    return;
                }
                if let Some(line) = completion_line(self.algorithm, stats, cancelled) {
                    println!();
                    println!("{}", line);
                }
            }
            OutputFormat::Records => {
                println!(
                    "S steps={} components={} discarded={} peak_frontier={} cancelled={}",
                    stats.steps,
                    stats.components,
                    stats.discarded,
                    stats.peak_frontier,
                    cancelled
                );
            }
            OutputFormat::Json => {}
        }
    }
}
