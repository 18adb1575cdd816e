//! Error types and exit codes for graphwalk
//!
//! The graph and traversal engine are total and never fail; these errors
//! belong to the layers around them (graph files, CLI input, output).
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, serialization, interrupted traversal)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, invalid graph file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around graph construction and traversal
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: i64 },

    #[error("self-loop edge rejected: {vertex} --- {vertex}")]
    SelfLoop { vertex: i64 },

    #[error("graph file not found: {path:?}")]
    GraphFileNotFound { path: PathBuf },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    #[error("traversal interrupted after {steps} steps")]
    Interrupted { steps: usize },
}

impl GraphwalkError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GraphwalkError::UnknownFormat(_)
            | GraphwalkError::UsageError(_) => ExitCode::Usage,

            // Data errors
            GraphwalkError::VertexNotFound { .. }
            | GraphwalkError::SelfLoop { .. }
            | GraphwalkError::GraphFileNotFound { .. }
            | GraphwalkError::InvalidGraphFile { .. } => ExitCode::Data,

            // Generic failures
            GraphwalkError::Io(_)
            | GraphwalkError::Json(_)
            | GraphwalkError::Toml(_)
            | GraphwalkError::Other(_)
            | GraphwalkError::Interrupted { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::VertexNotFound { .. } => "vertex_not_found",
            GraphwalkError::SelfLoop { .. } => "self_loop",
            GraphwalkError::GraphFileNotFound { .. } => "graph_file_not_found",
            GraphwalkError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphwalkError::Io(_) => "io_error",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
            GraphwalkError::Other(_) => "other",
            GraphwalkError::Interrupted { .. } => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;
