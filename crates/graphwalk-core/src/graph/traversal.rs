use crate::graph::adjacency::Graph;
use crate::graph::types::VertexId;

/// Trait for providing graph adjacency to the traversal engine
pub trait AdjacencyProvider {
    /// Neighbors of `vertex` in adjacency order; empty when unknown.
    fn adjacent(&self, vertex: VertexId) -> &[VertexId];
    /// Every known vertex, in any order.
    fn vertices(&self) -> Vec<VertexId>;
}

impl AdjacencyProvider for Graph {
    fn adjacent(&self, vertex: VertexId) -> &[VertexId] {
        Graph::adjacent(self, vertex)
    }

    fn vertices(&self) -> Vec<VertexId> {
        Graph::vertices(self)
    }
}
