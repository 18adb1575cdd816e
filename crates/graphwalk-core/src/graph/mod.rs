//! Graph model and traversal engine
//!
//! Provides the pieces for step-by-step traversal demonstrations:
//! - Adjacency-list graph with eager symmetric closure for undirected edges
//! - DFS and BFS as lazy event iterators that sweep every component
//! - Playback driver that hands events from a producer thread to an observer
//! - Adjacency provider trait for pluggable graph sources

pub mod adjacency;
pub mod algos;
pub mod playback;
pub mod traversal;
pub mod types;
pub mod walk;

pub use adjacency::{EdgePair, Graph};
pub use algos::{Bfs, CancelToken, Dfs};
pub use playback::{play, PlaybackOptions, TraversalObserver};
pub use traversal::AdjacencyProvider;
pub use types::{
    Algorithm, TraversalEvent, TraversalOptions, TraversalStats, TraversalSummary, VertexId,
    Visit,
};
pub use walk::{visit_order, Traversal};
