use crate::graph::algos::{Bfs, CancelToken, Dfs};
use crate::graph::traversal::AdjacencyProvider;
use crate::graph::types::{
    Algorithm, TraversalEvent, TraversalOptions, TraversalStats, TraversalSummary, VertexId,
};
use std::iter::FusedIterator;

/// A running traversal of either kind.
pub enum Traversal<'g, G: AdjacencyProvider + ?Sized> {
    Dfs(Dfs<'g, G>),
    Bfs(Bfs<'g, G>),
}

impl<'g, G: AdjacencyProvider + ?Sized> Traversal<'g, G> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Traversal::Dfs(_) => Algorithm::Dfs,
            Traversal::Bfs(_) => Algorithm::Bfs,
        }
    }

    pub fn stats(&self) -> TraversalStats {
        match self {
            Traversal::Dfs(t) => t.stats(),
            Traversal::Bfs(t) => t.stats(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        match self {
            Traversal::Dfs(t) => t.is_cancelled(),
            Traversal::Bfs(t) => t.is_cancelled(),
        }
    }

    /// Drain the traversal into a summary of its visit order, components
    /// and stats. Individual events are not kept.
    pub fn summarize(mut self, start: VertexId) -> TraversalSummary {
        let mut summary = TraversalSummary::new(self.algorithm(), start);
        for event in self.by_ref() {
            summary.observe(&event);
        }
        summary.stats = self.stats();
        summary.cancelled = self.is_cancelled();
        crate::log_traversal_stats!(summary.stats, self.algorithm().as_str());
        summary
    }
}

impl<G: AdjacencyProvider + ?Sized> Iterator for Traversal<'_, G> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        match self {
            Traversal::Dfs(t) => t.next(),
            Traversal::Bfs(t) => t.next(),
        }
    }
}

impl<G: AdjacencyProvider + ?Sized> FusedIterator for Traversal<'_, G> {}

impl Algorithm {
    /// Start a full traversal (with component sweep) from `start`.
    pub fn traverse<'g, G: AdjacencyProvider + ?Sized>(
        self,
        graph: &'g G,
        start: VertexId,
    ) -> Traversal<'g, G> {
        self.traverse_with(graph, start, TraversalOptions::default(), None)
    }

    pub fn traverse_with<'g, G: AdjacencyProvider + ?Sized>(
        self,
        graph: &'g G,
        start: VertexId,
        opts: TraversalOptions,
        cancel: Option<CancelToken>,
    ) -> Traversal<'g, G> {
        match (self, cancel) {
            (Algorithm::Dfs, None) => Traversal::Dfs(Dfs::with_options(graph, start, opts)),
            (Algorithm::Dfs, Some(token)) => {
                Traversal::Dfs(Dfs::with_options(graph, start, opts).with_cancel(token))
            }
            (Algorithm::Bfs, None) => Traversal::Bfs(Bfs::with_options(graph, start, opts)),
            (Algorithm::Bfs, Some(token)) => {
                Traversal::Bfs(Bfs::with_options(graph, start, opts).with_cancel(token))
            }
        }
    }
}

/// Visited vertices of a full traversal, in step order. Frontier snapshots
/// are not taken.
pub fn visit_order<G: AdjacencyProvider + ?Sized>(
    graph: &G,
    algorithm: Algorithm,
    start: VertexId,
) -> Vec<VertexId> {
    algorithm
        .traverse(graph, start)
        .filter_map(|event| event.as_visit().map(|visit| visit.vertex))
        .collect()
}
