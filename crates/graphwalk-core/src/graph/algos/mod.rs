//! Graph algorithm implementations
//!
//! Contains the traversal state machines:
//! - `dfs`: Stack-based depth-first search
//! - `bfs`: Queue-based breadth-first search
//! - `shared`: Component sweep, frontier entries and cancellation

pub mod bfs;
pub mod dfs;
pub mod shared;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use shared::{CancelToken, ComponentSweep, FrontierEntry};
