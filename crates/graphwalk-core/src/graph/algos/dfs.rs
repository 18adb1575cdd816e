use crate::graph::algos::shared::{check_cancelled, CancelToken, ComponentSweep, FrontierEntry};
use crate::graph::traversal::AdjacencyProvider;
use crate::graph::types::{TraversalEvent, TraversalOptions, TraversalStats, VertexId, Visit};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Iterative, stack-based depth-first traversal.
///
/// A vertex is marked visited when it is popped. Neighbors are pushed in
/// reverse adjacency order so they pop in adjacency order; a vertex can sit
/// on the stack more than once, and stale entries are discarded on pop.
///
/// Once the stack runs dry the traversal restarts on the smallest unvisited
/// vertex (emitting [`TraversalEvent::ComponentStarted`]) until every vertex
/// of the graph has been visited.
pub struct Dfs<'g, G: AdjacencyProvider + ?Sized> {
    graph: &'g G,
    visited: HashSet<VertexId>,
    stack: Vec<FrontierEntry>,
    sweep: ComponentSweep,
    component: usize,
    stats: TraversalStats,
    record_frontier: bool,
    cancel: Option<CancelToken>,
    cancelled: bool,
}

impl<'g, G: AdjacencyProvider + ?Sized> Dfs<'g, G> {
    pub fn new(graph: &'g G, start: VertexId) -> Self {
        Self::with_options(graph, start, TraversalOptions::default())
    }

    #[tracing::instrument(level = "debug", skip(graph, opts), fields(sweep = opts.sweep_components, frontier = opts.record_frontier))]
    pub fn with_options(graph: &'g G, start: VertexId, opts: TraversalOptions) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            stack: vec![FrontierEntry::root(start)],
            sweep: ComponentSweep::new(graph, opts.sweep_components),
            component: 0,
            stats: TraversalStats {
                peak_frontier: 1,
                ..Default::default()
            },
            record_frontier: opts.record_frontier,
            cancel: None,
            cancelled: false,
        }
    }

    /// Check `token` before every step.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn visited(&self) -> &HashSet<VertexId> {
        &self.visited
    }

    fn start_next_component(&mut self) -> Option<TraversalEvent> {
        let root = self.sweep.next_root(&self.visited)?;
        self.component += 1;
        self.stack.push(FrontierEntry::root(root));
        tracing::debug!(component = self.component, root, "dfs_component_started");
        Some(TraversalEvent::ComponentStarted {
            component: self.component,
            root,
        })
    }
}

impl<G: AdjacencyProvider + ?Sized> Iterator for Dfs<'_, G> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        loop {
            if check_cancelled(self.cancel.as_ref(), &mut self.cancelled) {
                return None;
            }

            let Some(entry) = self.stack.pop() else {
                return self.start_next_component();
            };

            if !self.visited.insert(entry.vertex) {
                self.stats.discarded += 1;
                continue;
            }
            self.stats.steps += 1;

            // components are counted once their root is visited
            self.stats.components = self.component + 1;

            let frontier: Vec<VertexId> = if self.record_frontier {
                self.stack.iter().rev().map(|e| e.vertex).collect()
            } else {
                Vec::new()
            };

            for &neighbor in self.graph.adjacent(entry.vertex).iter().rev() {
                if !self.visited.contains(&neighbor) {
                    self.stack.push(entry.child(neighbor));
                }
            }
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.stack.len());

            tracing::trace!(step = self.stats.steps, vertex = entry.vertex, "dfs_visit");
            return Some(TraversalEvent::Visited(Visit {
                step: self.stats.steps,
                vertex: entry.vertex,
                predecessor: entry.predecessor,
                depth: entry.depth,
                component: self.component,
                frontier,
            }));
        }
    }
}

impl<G: AdjacencyProvider + ?Sized> FusedIterator for Dfs<'_, G> {}
