//! CLI commands for graphwalk

pub mod dispatch;
pub mod show;
pub mod traverse;
