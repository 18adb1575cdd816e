use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::types::VertexId;

/// Adjacency-list graph over integer vertex ids.
///
/// Neighbor lists keep insertion order and may contain duplicates. For an
/// undirected graph every `add_edge(u, v)` appends to both endpoint lists at
/// insertion time. Vertices are keyed in a `BTreeMap`, so listing them is
/// always ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    directed: bool,
    adjacency: BTreeMap<VertexId, Vec<VertexId>>,
}

/// One edge as listed by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgePair {
    pub from: VertexId,
    pub to: VertexId,
}

impl Graph {
    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: BTreeMap::new(),
        }
    }

    /// Build a graph from an edge list, inserting edges in order.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new(directed);
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Create an empty neighbor list for `id` if it is not known yet.
    pub fn ensure_vertex(&mut self, id: VertexId) {
        self.adjacency.entry(id).or_default();
    }

    /// Append `v` to the neighbors of `u` (and `u` to `v` when undirected).
    ///
    /// Both endpoints become vertices of the graph. Duplicate edges and
    /// self-loops are stored as given.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.adjacency.entry(u).or_default().push(v);
        if self.directed {
            self.ensure_vertex(v);
        } else {
            self.adjacency.entry(v).or_default().push(u);
        }
    }

    /// Neighbors of `v` in insertion order; empty for unknown vertices.
    pub fn adjacent(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(&v).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// All known vertex ids in ascending order, isolated ones included.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Length of the neighbor list of `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacent(v).len()
    }

    /// Number of inserted edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// List the edges of the graph.
    ///
    /// Directed graphs list every arc in adjacency order. Undirected graphs
    /// list each inserted edge once with `from <= to`: the `u < v` half of
    /// every mirrored pair plus self-loops, which appear twice in their own
    /// neighbor list and are halved here.
    pub fn edges(&self) -> Vec<EdgePair> {
        let mut edges = Vec::new();
        for (&u, neighbors) in &self.adjacency {
            let mut loops = 0usize;
            for &v in neighbors {
                if self.directed || u < v {
                    edges.push(EdgePair { from: u, to: v });
                } else if u == v {
                    loops += 1;
                }
            }
            for _ in 0..loops / 2 {
                edges.push(EdgePair { from: u, to: u });
            }
        }
        edges
    }

    /// Iterate `(vertex, neighbors)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> {
        self.adjacency.iter().map(|(&v, n)| (v, n.as_slice()))
    }
}
