use crate::graph::algos::shared::{check_cancelled, CancelToken, ComponentSweep, FrontierEntry};
use crate::graph::traversal::AdjacencyProvider;
use crate::graph::types::{TraversalEvent, TraversalOptions, TraversalStats, VertexId, Visit};
use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

/// Iterative, queue-based breadth-first traversal.
///
/// A vertex is marked visited when it is enqueued, so it is queued at most
/// once. Neighbors are enqueued in adjacency order. Component restarts work
/// as in [`super::dfs::Dfs`].
pub struct Bfs<'g, G: AdjacencyProvider + ?Sized> {
    graph: &'g G,
    visited: HashSet<VertexId>,
    queue: VecDeque<FrontierEntry>,
    sweep: ComponentSweep,
    component: usize,
    stats: TraversalStats,
    record_frontier: bool,
    cancel: Option<CancelToken>,
    cancelled: bool,
}

impl<'g, G: AdjacencyProvider + ?Sized> Bfs<'g, G> {
    pub fn new(graph: &'g G, start: VertexId) -> Self {
        Self::with_options(graph, start, TraversalOptions::default())
    }

    #[tracing::instrument(level = "debug", skip(graph, opts), fields(sweep = opts.sweep_components, frontier = opts.record_frontier))]
    pub fn with_options(graph: &'g G, start: VertexId, opts: TraversalOptions) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([FrontierEntry::root(start)]),
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

    /// Vertices visited or already waiting in the queue.
    pub fn visited(&self) -> &HashSet<VertexId> {
        &self.visited
    }

    fn start_next_component(&mut self) -> Option<TraversalEvent> {
        let root = self.sweep.next_root(&self.visited)?;
        self.component += 1;
        self.visited.insert(root);
        self.queue.push_back(FrontierEntry::root(root));
        tracing::debug!(component = self.component, root, "bfs_component_started");
        Some(TraversalEvent::ComponentStarted {
            component: self.component,
            root,
        })
    }
}

impl<G: AdjacencyProvider + ?Sized> Iterator for Bfs<'_, G> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        if check_cancelled(self.cancel.as_ref(), &mut self.cancelled) {
            return None;
        }

        let Some(entry) = self.queue.pop_front() else {
            return self.start_next_component();
        };
        self.stats.steps += 1;

        // components are counted once their root is visited
        self.stats.components = self.component + 1;

        let frontier: Vec<VertexId> = if self.record_frontier {
            self.queue.iter().map(|e| e.vertex).collect()
        } else {
            Vec::new()
        };

        for &neighbor in self.graph.adjacent(entry.vertex) {
            if self.visited.insert(neighbor) {
                self.queue.push_back(entry.child(neighbor));
            }
        }
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.queue.len());

        tracing::trace!(step = self.stats.steps, vertex = entry.vertex, "bfs_visit");
        Some(TraversalEvent::Visited(Visit {
            step: self.stats.steps,
            vertex: entry.vertex,
            predecessor: entry.predecessor,
            depth: entry.depth,
            component: self.component,
            frontier,
        }))
    }
}

impl<G: AdjacencyProvider + ?Sized> FusedIterator for Bfs<'_, G> {}
