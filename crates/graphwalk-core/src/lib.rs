//! Graphwalk Core Library
//!
//! Adjacency-list graph model and the step-by-step DFS/BFS traversal engine
//! behind the graphwalk CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
