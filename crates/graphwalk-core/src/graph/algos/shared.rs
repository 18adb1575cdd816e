use crate::graph::traversal::AdjacencyProvider;
use crate::graph::types::VertexId;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a traversal and its owner.
///
/// Traversals check the flag before each step. A cancelled traversal stops
/// yielding events and keeps whatever it has visited so far.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Pending frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub vertex: VertexId,
    pub predecessor: Option<VertexId>,
    pub depth: u32,
}

impl FrontierEntry {
    /// Entry for a component root
    pub fn root(vertex: VertexId) -> Self {
        Self {
            vertex,
            predecessor: None,
            depth: 0,
        }
    }

    /// Entry for a neighbor discovered while expanding `self`
    pub fn child(&self, vertex: VertexId) -> Self {
        Self {
            vertex,
            predecessor: Some(self.vertex),
            depth: self.depth + 1,
        }
    }
}

/// Picks roots for the components a traversal has not reached yet.
///
/// Candidates are all graph vertices in ascending order. Visited sets only
/// grow, so a cursor that never moves backwards always finds the smallest
/// unvisited vertex.
#[derive(Debug, Clone)]
pub struct ComponentSweep {
    order: Vec<VertexId>,
    cursor: usize,
}

impl ComponentSweep {
    pub fn new<G: AdjacencyProvider + ?Sized>(graph: &G, enabled: bool) -> Self {
        let order = if enabled {
            let mut order = graph.vertices();
            order.sort_unstable();
            order.dedup();
            order
        } else {
            Vec::new()
        };
        Self { order, cursor: 0 }
    }

    /// Smallest vertex not in `visited`, or `None` when every vertex is covered.
    pub fn next_root(&mut self, visited: &HashSet<VertexId>) -> Option<VertexId> {
        while let Some(&vertex) = self.order.get(self.cursor) {
            self.cursor += 1;
            if !visited.contains(&vertex) {
                return Some(vertex);
            }
        }
        None
    }
}

/// Check the cancel token, latching the result.
pub fn check_cancelled(cancel: Option<&CancelToken>, cancelled: &mut bool) -> bool {
    if !*cancelled && cancel.is_some_and(|token| token.is_cancelled()) {
        *cancelled = true;
    }
    *cancelled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    struct Unsorted;

    impl AdjacencyProvider for Unsorted {
        fn adjacent(&self, _vertex: VertexId) -> &[VertexId] {
            &[]
        }

        fn vertices(&self) -> Vec<VertexId> {
            vec![7, 3, 5, 3]
        }
    }

    #[test]
    fn test_sweep_orders_ascending() {
        let mut sweep = ComponentSweep::new(&Unsorted, true);
        let visited = HashSet::new();
        assert_eq!(sweep.next_root(&visited), Some(3));
        assert_eq!(sweep.next_root(&visited), Some(5));
        assert_eq!(sweep.next_root(&visited), Some(7));
        assert_eq!(sweep.next_root(&visited), None);
    }

    #[test]
    fn test_sweep_skips_visited() {
        let graph = Graph::from_edges(false, [(0, 1), (2, 3)]);
        let mut sweep = ComponentSweep::new(&graph, true);
        let visited: HashSet<VertexId> = [0, 1, 2].into_iter().collect();
        assert_eq!(sweep.next_root(&visited), Some(3));
        assert_eq!(sweep.next_root(&visited), None);
    }

    #[test]
    fn test_sweep_disabled() {
        let graph = Graph::from_edges(false, [(0, 1)]);
        let mut sweep = ComponentSweep::new(&graph, false);
        assert_eq!(sweep.next_root(&HashSet::new()), None);
    }

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_check_cancelled_latches() {
        let token = CancelToken::new();
        let mut cancelled = false;
        assert!(!check_cancelled(Some(&token), &mut cancelled));
        token.cancel();
        assert!(check_cancelled(Some(&token), &mut cancelled));
        assert!(check_cancelled(None, &mut cancelled));
    }

    #[test]
    fn test_frontier_entry_child() {
        let root = FrontierEntry::root(4);
        let child = root.child(9);
        assert_eq!(child.predecessor, Some(4));
        assert_eq!(child.depth, 1);
    }
}
